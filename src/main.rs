//! Demo script host: binds the smoke-test module and runs a script file.

use rquickjs::class::Trace;
use script_engine::{ScriptError, ScriptRuntime};

/// Demo bound type exercised by `scripts/smoke_test.js`.
#[derive(Trace)]
#[rquickjs::class(rename = "Person")]
pub struct Person {
    #[qjs(get, set)]
    pub age: i32,
    #[qjs(get)]
    pub height: f32,
    #[qjs(get, set)]
    pub name: String,
    #[qjs(get)]
    pub const_value: i32,
}

#[rquickjs::methods]
impl Person {
    #[qjs(constructor)]
    pub fn new(name: String) -> Self {
        Self {
            age: 12,
            height: 180.0,
            name,
            const_value: 996,
        }
    }

    #[qjs(static, rename = "SayHello")]
    pub fn say_hello() {
        println!("I am person");
    }

    #[qjs(rename = "Introduce")]
    pub fn introduce(&self) {
        println!(
            "I am {}, age = {}, height = {}",
            self.name, self.age, self.height
        );
    }
}

fn run(path: &str) -> Result<(), ScriptError> {
    let runtime = ScriptRuntime::new()?;

    runtime.module("test_module", |m| {
        m.field("int_elem", 1i32)?
            .field("char_elem", 2i8)?
            .field("long_elem", 3i64)?
            .field("uint_elem", 4u32)?
            .field("uchar_elem", 5u8)?
            .field("ulong_elem", 6u64)?
            .field("float_elem", 7.0f32)?
            .field("double_elem", 8.0f64)?
            .field("bool_elem", true)?
            .field("string_view", "string view")?
            .field("str_literal", "string literal")?
            .field("string_elem", String::from("string"))?;
        Ok(())
    })?;

    runtime.bind_globals(|g| {
        g.class::<Person>()?
            .static_field("static_elem", 255i32)?
            .end_class();
        Ok(())
    })?;

    runtime.eval_file(path)
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scripts/smoke_test.js".to_owned());
    if let Err(e) = run(&path) {
        eprintln!("Script host failed: {e}");
        std::process::exit(1);
    }
}
