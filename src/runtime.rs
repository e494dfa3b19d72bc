//! QuickJS runtime wrapper.
//!
//! [`ScriptRuntime`] owns one `rquickjs` runtime and context pair, keeps the
//! registry of bound native modules, and is the single place scripts are
//! evaluated. Exceptions thrown by scripts never cross this boundary as raw
//! `rquickjs` errors; they are caught and converted into
//! [`ScriptError::Exception`] carrying the message and stack of the thrown
//! value.

use std::cell::RefCell;
use std::path::Path;

use rquickjs::class::JsClass;
use rquickjs::context::EvalOptions;
use rquickjs::function::IntoArgs;
use rquickjs::{CatchResultExt, CaughtError, Class, Context, FromJs, Function, Runtime, Value};

use crate::binding::ModuleBuilder;
use crate::console;
use crate::error::ScriptError;

/// Runtime limits and evaluation behavior.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Heap limit in bytes. `None` leaves QuickJS unlimited.
    pub memory_limit: Option<usize>,
    /// Native stack limit in bytes. `None` leaves the QuickJS default.
    pub max_stack_size: Option<usize>,
    /// Evaluate scripts in strict mode.
    pub strict: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            memory_limit: None,
            max_stack_size: None,
            strict: true,
        }
    }
}

/// The scripting runtime: an embedded QuickJS engine plus the native
/// bindings registered into it.
pub struct ScriptRuntime {
    #[allow(dead_code)]
    runtime: Runtime,
    context: Context,
    config: ScriptConfig,
    modules: RefCell<Vec<String>>,
}

impl ScriptRuntime {
    /// Creates a runtime with default configuration.
    pub fn new() -> Result<Self, ScriptError> {
        Self::with_config(ScriptConfig::default())
    }

    /// Creates a runtime with the given configuration and installs the
    /// `console` global.
    pub fn with_config(config: ScriptConfig) -> Result<Self, ScriptError> {
        let runtime = Runtime::new()
            .map_err(|e| ScriptError::Init(format!("failed to create JS runtime: {e}")))?;
        if let Some(limit) = config.memory_limit {
            runtime.set_memory_limit(limit);
        }
        if let Some(size) = config.max_stack_size {
            runtime.set_max_stack_size(size);
        }

        let context = Context::full(&runtime)
            .map_err(|e| ScriptError::Init(format!("failed to create JS context: {e}")))?;
        context.with(|ctx| console::install(&ctx))?;

        Ok(Self {
            runtime,
            context,
            config,
            modules: RefCell::new(Vec::new()),
        })
    }

    /// Registers a native module under `name` as a global namespace object.
    ///
    /// The closure receives a [`ModuleBuilder`] and declares the module's
    /// exports; scripts then reach them as `name.export`. Registering the
    /// same name twice is an error.
    pub fn module<F>(&self, name: &str, build: F) -> Result<(), ScriptError>
    where
        F: for<'js> FnOnce(&mut ModuleBuilder<'js>) -> rquickjs::Result<()>,
    {
        if self.modules.borrow().iter().any(|m| m == name) {
            return Err(ScriptError::DuplicateModule(name.to_owned()));
        }

        self.context.with(|ctx| -> Result<(), ScriptError> {
            let mut builder = ModuleBuilder::new(ctx.clone(), name)
                .catch(&ctx)
                .map_err(ScriptError::from)?;
            build(&mut builder).catch(&ctx).map_err(ScriptError::from)?;
            builder.install().catch(&ctx).map_err(ScriptError::from)?;
            Ok(())
        })?;

        self.modules.borrow_mut().push(name.to_owned());
        log::debug!("registered script module '{name}'");
        Ok(())
    }

    /// Declares bindings directly in global scope instead of a module
    /// namespace. Used for types the scripts construct by bare name, like
    /// `new Person(...)`.
    pub fn bind_globals<F>(&self, build: F) -> Result<(), ScriptError>
    where
        F: for<'js> FnOnce(&mut ModuleBuilder<'js>) -> rquickjs::Result<()>,
    {
        self.context.with(|ctx| -> Result<(), ScriptError> {
            let mut builder = ModuleBuilder::globals(ctx.clone());
            build(&mut builder).catch(&ctx).map_err(ScriptError::from)?;
            Ok(())
        })
    }

    /// Exposes the class `C` as a global constructor with no statics.
    pub fn define_global_class<C>(&self) -> Result<(), ScriptError>
    where
        C: for<'js> JsClass<'js> + 'static,
    {
        self.context.with(|ctx| -> Result<(), ScriptError> {
            Class::<C>::define(&ctx.globals())
                .catch(&ctx)
                .map_err(ScriptError::from)?;
            Ok(())
        })
    }

    /// Module names in registration order.
    pub fn modules(&self) -> Vec<String> {
        self.modules.borrow().clone()
    }

    /// Whether a module was registered under `name`.
    pub fn has_module(&self, name: &str) -> bool {
        self.modules.borrow().iter().any(|m| m == name)
    }

    /// Evaluates a script in global scope, discarding its completion value.
    pub fn eval(&self, source: &str) -> Result<(), ScriptError> {
        self.eval_as::<()>(source)
    }

    /// Evaluates a script and converts its completion value to `R`.
    pub fn eval_as<R>(&self, source: &str) -> Result<R, ScriptError>
    where
        R: for<'js> FromJs<'js>,
    {
        self.context.with(|ctx| {
            let result: Result<R, _> = ctx
                .eval_with_options(source, self.eval_options())
                .catch(&ctx);
            result.map_err(ScriptError::from)
        })
    }

    /// Reads and evaluates a script file.
    pub fn eval_file(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        log::debug!("evaluating script file {}", path.display());
        self.eval(&source)
    }

    /// Calls a global function by name.
    pub fn call<A, R>(&self, name: &str, args: A) -> Result<R, ScriptError>
    where
        A: for<'js> IntoArgs<'js>,
        R: for<'js> FromJs<'js>,
    {
        self.context.with(|ctx| {
            let value: Value = ctx
                .globals()
                .get(name)
                .catch(&ctx)
                .map_err(ScriptError::from)?;
            let func: Function = match value.into_function() {
                Some(func) => func,
                None => return Err(ScriptError::NotAFunction(name.to_owned())),
            };
            let result: Result<R, _> = func.call(args).catch(&ctx);
            result.map_err(ScriptError::from)
        })
    }

    fn eval_options(&self) -> EvalOptions {
        let mut options = EvalOptions::default();
        options.global = true;
        options.strict = self.config.strict;
        options
    }
}

impl From<CaughtError<'_>> for ScriptError {
    fn from(err: CaughtError<'_>) -> Self {
        match err {
            CaughtError::Exception(exception) => {
                let message = exception
                    .message()
                    .unwrap_or_else(|| "unknown exception".to_owned());
                let stack = exception.stack();
                log::error!("[QuickJS] uncaught exception: {message}");
                ScriptError::Exception { message, stack }
            }
            // scripts can throw non-Error values
            CaughtError::Value(value) => ScriptError::Exception {
                message: format!("uncaught value: {value:?}"),
                stack: None,
            },
            CaughtError::Error(e) => ScriptError::Qjs(e),
        }
    }
}
