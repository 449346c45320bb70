//! I/O failures around the resolver. Resolution itself cannot fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read template from {source_name}")]
    ReadFailed {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output to {sink_name}")]
    WriteFailed {
        sink_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read vars file {}", path.display())]
    VarsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vars file {}", path.display())]
    VarsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
