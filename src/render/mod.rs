//! Template rendering facade.

pub mod engine;
pub mod parser;

use crate::ctx::Ctx;
use anyhow::{Context, Result};

pub use engine::resolve;

/// Read the template, resolve it, and write the result.
///
/// Nothing is written if the template or vars file cannot be read.
pub fn render(ctx: &Ctx) -> Result<()> {
    let template = ctx.source.read().context("read template")?;
    let vars = ctx.vars()?;

    let rendered = resolve(&template, &vars);

    ctx.sink.write(&rendered).context("write output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{Sink, Source};
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn renders_file_to_file_from_vars() {
        let dir = tempfile::tempdir().unwrap();
        let tpl = dir.path().join("dynamic.yml.template");
        let vars = dir.path().join("vars.toml");
        let out = dir.path().join("dynamic.yml");
        fs::write(&tpl, "host=${HOST:-localhost} port=${PORT}").unwrap();
        fs::write(&vars, "PORT = 8080\n").unwrap();

        let ctx = Ctx::new(Some(tpl), Some(out.clone()), Some(vars), true);
        render(&ctx).unwrap();

        assert_eq!(fs::read_to_string(out).unwrap(), "host=localhost port=8080");
    }

    #[test]
    fn unreadable_template_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dynamic.yml");
        let ctx = Ctx::new(
            Some(dir.path().join("missing.template")),
            Some(out.clone()),
            None,
            true,
        );
        assert_eq!(ctx.source, Source::File(dir.path().join("missing.template")));
        assert_eq!(ctx.sink, Sink::File(out.clone()));

        let err = render(&ctx).unwrap_err();
        assert!(format!("{err:#}").contains("missing.template"));
        assert!(!out.exists());
    }

    #[test]
    fn bad_vars_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let tpl = dir.path().join("t.template");
        let vars = dir.path().join("vars.toml");
        let out = dir.path().join("t");
        fs::write(&tpl, "${A}").unwrap();
        fs::write(&vars, "not toml at all = = =").unwrap();

        let ctx = Ctx::new(Some(tpl), Some(out.clone()), Some(vars), true);
        assert!(render(&ctx).is_err());
        assert!(!out.exists());
    }
}
