//! # Script Engine
//!
//! QuickJS scripting runtime and native binding layer for a 2D/3D game
//! engine, built on [`rquickjs`].
//!
//! ## Features
//!
//! - **Runtime**: Embedded QuickJS runtime/context pair with configurable
//!   memory and stack limits and strict-mode evaluation
//! - **Modules**: Native modules exposed as global namespace objects, with
//!   enumerable fields that iterate in registration order
//! - **Classes**: Native types bound with constructors, property accessors,
//!   instance/static methods, static fields, and nested enums
//! - **Console**: `console.log` / `warn` / `error` wired to host output
//! - **Errors**: Script exceptions caught at the boundary and surfaced with
//!   message and stack trace
//!
//! ## Example
//!
//! ```ignore
//! use script_engine::ScriptRuntime;
//!
//! let runtime = ScriptRuntime::new()?;
//! runtime.module("test_module", |m| {
//!     m.field("int_elem", 1i32)?.field("bool_elem", true)?;
//!     Ok(())
//! })?;
//! runtime.eval("console.log(test_module.int_elem)")?;
//! ```

/// Builder API for exposing native values, functions, enums, and classes
pub mod binding;
/// `console` global wired to host output
pub mod console;
/// Unified error type for the scripting subsystem
pub mod error;
/// QuickJS runtime wrapper and script evaluation
pub mod runtime;

pub use binding::{BindTarget, ClassBuilder, EnumBuilder, ModuleBuilder};
pub use error::ScriptError;
pub use runtime::{ScriptConfig, ScriptRuntime};

// Bound class declarations in downstream code use these directly.
pub use rquickjs;
