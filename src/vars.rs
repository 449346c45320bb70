//! Variable sources the resolver looks names up in.

use crate::error::Error;
use std::{borrow::Cow, collections::HashMap, fs, path::Path};

/// A read-only name → value mapping.
///
/// `Some("")` means the name is set to the empty string, which is not the
/// same as `None`.
pub trait Vars {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl Vars for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<V: Vars + ?Sized> Vars for &V {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}

/// The live process environment, queried on every lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Vars for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        std::env::var_os(name).map(|v| Cow::Owned(v.to_string_lossy().into_owned()))
    }
}

/// Try `upper` first, then fall back to `lower`.
#[derive(Clone, Debug)]
pub struct Layered<A, B> {
    pub upper: A,
    pub lower: B,
}

impl<A: Vars, B: Vars> Vars for Layered<A, B> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.upper.lookup(name).or_else(|| self.lower.lookup(name))
    }
}

/// Optional process environment on top of a fixed map.
///
/// What the CLI resolves against: `--no-env` turns the upper layer off.
pub type CliVars = Layered<Option<ProcessEnv>, HashMap<String, String>>;

impl<V: Vars> Vars for Option<V> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_ref()?.lookup(name)
    }
}

// Vars files
/// Load a TOML file into a flat `name = value` map.
pub fn load_vars_file(path: &Path) -> Result<HashMap<String, String>, Error> {
    let src = fs::read_to_string(path).map_err(|source| Error::VarsRead {
        path: path.to_path_buf(),
        source,
    })?;

    let table: toml::Table = toml::from_str(&src).map_err(|source| Error::VarsParse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut vars = HashMap::new();
    for (k, v) in &table {
        flatten(k, v, &mut vars);
    }
    tracing::debug!(path = %path.display(), count = vars.len(), "loaded vars file");
    Ok(vars)
}

/// Flatten a TOML value into `prefix_key = string` pairs.
fn flatten(prefix: &str, value: &toml::Value, out: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(map) => {
            for (k, v) in map {
                flatten(&format!("{prefix}_{k}"), v, out);
            }
        }
        toml::Value::String(s) => {
            out.insert(prefix.to_owned(), s.clone());
        }
        toml::Value::Integer(i) => {
            out.insert(prefix.to_owned(), i.to_string());
        }
        toml::Value::Float(f) => {
            out.insert(prefix.to_owned(), f.to_string());
        }
        toml::Value::Boolean(b) => {
            out.insert(prefix.to_owned(), b.to_string());
        }
        toml::Value::Array(_) | toml::Value::Datetime(_) => {
            tracing::warn!(key = prefix, "skipping unsupported value type in vars file");
        }
    }
}
