//! Unified error handling for the scripting subsystem.
//!
//! Everything the runtime or the binding layer can fail with is collected in
//! [`ScriptError`]. JavaScript exceptions are caught at the evaluation
//! boundary and surfaced as [`ScriptError::Exception`] with the message and
//! stack trace taken from the thrown `Error` object.

use thiserror::Error;

/// Scripting subsystem error type.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Runtime initialization failed: {0}")]
    Init(String),

    #[error("Script exception: {message}")]
    Exception {
        message: String,
        stack: Option<String>,
    },

    #[error("Module '{0}' is already registered")]
    DuplicateModule(String),

    #[error("Global '{0}' is not a function")]
    NotAFunction(String),

    #[error("QuickJS error: {0}")]
    Qjs(#[from] rquickjs::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
