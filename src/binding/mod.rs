//! Native binding layer.
//!
//! Exposes native values, functions, enums, and class types to scripts
//! through a chainable builder API:
//!
//! ```ignore
//! runtime.module("test_module", |m| {
//!     m.field("int_elem", 1i32)?
//!         .field("string_elem", String::from("string"))?;
//!     m.class::<Person>()?
//!         .static_field("static_elem", 255i32)?
//!         .enumeration("Enum")?
//!             .item("Value1", 0)?
//!             .item("Value2", 1)?
//!             .end_enum()?
//!         .end_class();
//!     Ok(())
//! })?;
//! ```
//!
//! Module exports land on a plain global namespace object, so scripts reach
//! them as `test_module.int_elem`. Exported fields are enumerable and
//! iterate in registration order.

mod class;
mod enums;
mod module;

pub use class::ClassBuilder;
pub use enums::{BindTarget, EnumBuilder};
pub use module::ModuleBuilder;
