//! `console` global for script output.
//!
//! Scripts get `console.log` / `console.warn` / `console.error`. Arguments
//! are coerced to strings with JavaScript semantics and joined by single
//! spaces, one output line per call.

use rquickjs::convert::Coerced;
use rquickjs::function::{Function, Rest};
use rquickjs::{Ctx, FromJs, Object, Value};

/// Installs the `console` object into the context's global scope.
pub(crate) fn install(ctx: &Ctx<'_>) -> rquickjs::Result<()> {
    let console = Object::new(ctx.clone())?;

    console.set(
        "log",
        Function::new(ctx.clone(), |args: Rest<Value>| {
            let line = render_args(&args.0)?;
            println!("[JS]: {line}");
            Ok::<_, rquickjs::Error>(())
        }),
    )?;

    console.set(
        "warn",
        Function::new(ctx.clone(), |args: Rest<Value>| {
            let line = render_args(&args.0)?;
            log::warn!("[JS]: {line}");
            eprintln!("[JS]: {line}");
            Ok::<_, rquickjs::Error>(())
        }),
    )?;

    console.set(
        "error",
        Function::new(ctx.clone(), |args: Rest<Value>| {
            let line = render_args(&args.0)?;
            log::error!("[JS]: {line}");
            eprintln!("[JS]: {line}");
            Ok::<_, rquickjs::Error>(())
        }),
    )?;

    ctx.globals().set("console", console)?;
    Ok(())
}

fn render_args<'js>(args: &[Value<'js>]) -> rquickjs::Result<String> {
    let mut line = String::new();
    for (i, value) in args.iter().enumerate() {
        if i != 0 {
            line.push(' ');
        }
        let Coerced(text) = Coerced::<String>::from_js(value.ctx(), value.clone())?;
        line.push_str(&text);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use crate::runtime::ScriptRuntime;

    #[test]
    fn console_log_accepts_mixed_arguments() {
        let runtime = ScriptRuntime::new().unwrap();
        let result = runtime.eval("console.log('value:', 42, true, {a: 1})");
        assert!(result.is_ok());
    }

    #[test]
    fn console_levels_accept_mixed_arguments() {
        let runtime = ScriptRuntime::new().unwrap();
        assert!(runtime
            .eval("console.warn('w', 1); console.error('e', false, [1, 2])")
            .is_ok());
    }
}
