use crate::{
    stream::{Sink, Source},
    vars::{self, CliVars, Layered, ProcessEnv},
};
use anyhow::{Context, Result};
use std::{collections::HashMap, path::PathBuf};

/// Template looked up in the working directory when no path is given.
pub const DEFAULT_TEMPLATE: &str = "dynamic.yml.template";

/// Everything one run needs, resolved from the command line.
/// Constructed once at startup; never mutated after that.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub source: Source,
    pub sink: Sink,
    pub vars_file: Option<PathBuf>,
    pub use_env: bool,
}

impl Ctx {
    pub fn new(
        template: Option<PathBuf>,
        output: Option<PathBuf>,
        vars_file: Option<PathBuf>,
        no_env: bool,
    ) -> Self {
        let template = template.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE));

        Self {
            source: Source::from_arg(&template),
            sink: output.map_or(Sink::Stdout, Sink::File),
            vars_file,
            use_env: !no_env,
        }
    }

    /// Build the lookup chain: process environment over the vars file.
    pub fn vars(&self) -> Result<CliVars> {
        let lower = match &self.vars_file {
            Some(path) => vars::load_vars_file(path).context("load vars file")?,
            None => HashMap::new(),
        };

        Ok(Layered {
            upper: self.use_env.then_some(ProcessEnv),
            lower,
        })
    }
}
