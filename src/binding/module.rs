//! Module builder: a namespace object populated with native exports.

use rquickjs::class::JsClass;
use rquickjs::function::{Function, IntoJsFunc};
use rquickjs::{Class, Ctx, IntoJs, Object};

use super::class::ClassBuilder;
use super::enums::EnumBuilder;

/// Builds one native module.
///
/// Created by [`ScriptRuntime::module`](crate::ScriptRuntime::module) (a
/// fresh namespace object, installed as a global under the module name) or
/// by [`ScriptRuntime::bind_globals`](crate::ScriptRuntime::bind_globals)
/// (wraps the global object itself).
pub struct ModuleBuilder<'js> {
    pub(crate) ctx: Ctx<'js>,
    pub(crate) exports: Object<'js>,
    name: String,
    global: bool,
}

impl<'js> ModuleBuilder<'js> {
    pub(crate) fn new(ctx: Ctx<'js>, name: &str) -> rquickjs::Result<Self> {
        let exports = Object::new(ctx.clone())?;
        Ok(Self {
            ctx,
            exports,
            name: name.to_owned(),
            global: false,
        })
    }

    pub(crate) fn globals(ctx: Ctx<'js>) -> Self {
        let exports = ctx.globals();
        Self {
            ctx,
            exports,
            name: "globalThis".to_owned(),
            global: true,
        }
    }

    /// The module name as scripts see it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exports a native value under `name`.
    ///
    /// Any `IntoJs` value works: signed and unsigned integers of the usual
    /// widths, floats, bools, `&str` and owned strings.
    pub fn field<V>(&mut self, name: &str, value: V) -> rquickjs::Result<&mut Self>
    where
        V: IntoJs<'js>,
    {
        self.exports.set(name, value)?;
        Ok(self)
    }

    /// Exports a native function under `name`.
    pub fn function<F, P>(&mut self, name: &str, func: F) -> rquickjs::Result<&mut Self>
    where
        F: IntoJsFunc<'js, P> + 'js,
    {
        self.exports.set(name, Function::new(self.ctx.clone(), func)?)?;
        Ok(self)
    }

    /// Exports the class `C` under its declared name and returns a
    /// [`ClassBuilder`] for attaching statics and nested enums to the
    /// constructor.
    pub fn class<C>(&mut self) -> rquickjs::Result<ClassBuilder<'_, 'js>>
    where
        C: JsClass<'js> + 'js,
    {
        Class::<C>::define(&self.exports)?;
        let ctor: Function<'js> = self.exports.get(C::NAME)?;
        log::debug!("bound class '{}' in module '{}'", C::NAME, self.name);
        Ok(ClassBuilder::new(self, ctor))
    }

    /// Starts a named integer enum export.
    pub fn enumeration<'a>(
        &'a mut self,
        name: &str,
    ) -> rquickjs::Result<EnumBuilder<'js, &'a mut Self>> {
        EnumBuilder::new(self, name)
    }

    pub(crate) fn install(self) -> rquickjs::Result<()> {
        if !self.global {
            self.ctx.globals().set(self.name.as_str(), self.exports)?;
        }
        Ok(())
    }
}
