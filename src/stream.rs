//! Template sources and output sinks.
use crate::error::Error;
use std::{
    fmt, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tempfile::Builder;

/// Where the template text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin; anything else is a path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Read the whole template into memory.
    ///
    /// The file handle is dropped before this returns, on success or error.
    pub fn read(&self) -> Result<String, Error> {
        let text = match self {
            Self::File(path) => fs::read_to_string(path),
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().lock().read_to_string(&mut buf).map(|_| buf)
            }
        }
        .map_err(|source| Error::ReadFailed {
            source_name: self.to_string(),
            source,
        })?;

        tracing::debug!(source = %self, bytes = text.len(), "read template");
        Ok(text)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Where the resolved text goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    /// Replaced atomically via a temp file in the same directory.
    File(PathBuf),
}

impl Sink {
    /// Write `text` in one go.
    pub fn write(&self, text: &str) -> Result<(), Error> {
        let res = match self {
            Self::Stdout => write_all(io::stdout().lock(), text),
            Self::File(path) => write_atomic(path, text),
        };
        res.map_err(|source| Error::WriteFailed {
            sink_name: self.to_string(),
            source,
        })?;

        tracing::debug!(sink = %self, bytes = text.len(), "wrote output");
        Ok(())
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(p) => write!(f, "{}", p.display()),
        }
    }
}

fn write_all(mut w: impl Write, text: &str) -> io::Result<()> {
    w.write_all(text.as_bytes())?;
    w.flush()
}

/// Stage `text` next to `path`, then rename over it.
fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = Builder::new().prefix(".envtpl.").tempfile_in(dir)?;
    write_all(tmp.as_file_mut(), text)?;
    tmp.as_file().sync_all()?;

    // Both paths share a directory, so the rename is atomic.
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
