//! Named integer enum exports.

use rquickjs::{Ctx, IntoJs, Object};

use super::class::ClassBuilder;
use super::module::ModuleBuilder;

/// Something an enum can be registered on: a module namespace or a class
/// constructor.
pub trait BindTarget<'js> {
    fn ctx(&self) -> Ctx<'js>;
    fn target(&self) -> &Object<'js>;
}

impl<'a, 'js> BindTarget<'js> for &'a mut ModuleBuilder<'js> {
    fn ctx(&self) -> Ctx<'js> {
        self.ctx.clone()
    }

    fn target(&self) -> &Object<'js> {
        &self.exports
    }
}

impl<'a, 'js> BindTarget<'js> for ClassBuilder<'a, 'js> {
    fn ctx(&self) -> Ctx<'js> {
        self.module.ctx.clone()
    }

    fn target(&self) -> &Object<'js> {
        self.constructor()
    }
}

/// Collects named items for one enum export, then installs them on the
/// parent as a plain object (`MyEnum.Value1 == 0`).
pub struct EnumBuilder<'js, P>
where
    P: BindTarget<'js>,
{
    parent: P,
    name: String,
    items: Object<'js>,
}

impl<'js, P> EnumBuilder<'js, P>
where
    P: BindTarget<'js>,
{
    pub(crate) fn new(parent: P, name: &str) -> rquickjs::Result<Self> {
        let items = Object::new(parent.ctx())?;
        Ok(Self {
            parent,
            name: name.to_owned(),
            items,
        })
    }

    /// Adds one named item. Values are the enum's integer representation.
    pub fn item<V>(self, name: &str, value: V) -> rquickjs::Result<Self>
    where
        V: IntoJs<'js>,
    {
        self.items.set(name, value)?;
        Ok(self)
    }

    /// Installs the enum on its parent and hands the parent back.
    pub fn end_enum(self) -> rquickjs::Result<P> {
        let Self {
            parent,
            name,
            items,
        } = self;
        parent.target().set(name.as_str(), items)?;
        Ok(parent)
    }
}
