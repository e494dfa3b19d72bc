//! Class-level bindings attached to a constructor.
//!
//! The instance shape of a bound type (constructor, property accessors,
//! instance and static methods) is declared on the Rust type itself with the
//! `rquickjs` class/methods macros. What the macros cannot express are
//! class-level data members: static fields like `Person.static_elem` and
//! enums nested under the class. Those are attached here, directly on the
//! constructor object, after the class has been defined on the module.

use rquickjs::function::Function;
use rquickjs::{IntoJs, Object};

use super::enums::EnumBuilder;
use super::module::ModuleBuilder;

/// Attaches statics and nested enums to a class constructor.
pub struct ClassBuilder<'a, 'js> {
    pub(crate) module: &'a mut ModuleBuilder<'js>,
    pub(crate) ctor: Function<'js>,
}

impl<'a, 'js> ClassBuilder<'a, 'js> {
    pub(crate) fn new(module: &'a mut ModuleBuilder<'js>, ctor: Function<'js>) -> Self {
        Self { module, ctor }
    }

    /// Sets a class-level field on the constructor, reachable from scripts
    /// as `ClassName.name`.
    pub fn static_field<V>(self, name: &str, value: V) -> rquickjs::Result<Self>
    where
        V: IntoJs<'js>,
    {
        self.ctor.set(name, value)?;
        Ok(self)
    }

    /// Starts an enum nested under the class (`ClassName.EnumName.Item`).
    pub fn enumeration(self, name: &str) -> rquickjs::Result<EnumBuilder<'js, Self>> {
        EnumBuilder::new(self, name)
    }

    /// Finishes the class and hands the module builder back.
    pub fn end_class(self) -> &'a mut ModuleBuilder<'js> {
        self.module
    }

    pub(crate) fn constructor(&self) -> &Object<'js> {
        &self.ctor
    }
}
