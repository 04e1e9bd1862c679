//! Grammar sources
//!
//! A [`GrammarSource`] supplies the grammar text the extractor scans. The
//! extractor never sees acquisition failures: they stop at this boundary as a
//! [`SourceError`].

use crate::grammar::GrammarText;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Error that can occur while acquiring grammar text
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The grammar file does not exist
    NotFound(String),
    /// Reading failed
    Io { origin: String, message: String },
    /// The grammar is not valid UTF-8
    InvalidUtf8 { origin: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "Grammar file '{path}' not found"),
            SourceError::Io { origin, message } => {
                write!(f, "Cannot read grammar from {origin}: {message}")
            }
            SourceError::InvalidUtf8 { origin } => {
                write!(f, "Grammar from {origin} is not valid UTF-8")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Supplies grammar text
pub trait GrammarSource {
    /// Human-readable origin, used in diagnostics
    fn describe(&self) -> String;

    fn get(&mut self) -> Result<GrammarText, SourceError>;
}

fn decode(bytes: Vec<u8>, origin: String) -> Result<GrammarText, SourceError> {
    String::from_utf8(bytes)
        .map(GrammarText::from)
        .map_err(|_| SourceError::InvalidUtf8 { origin })
}

/// A grammar file on disk, typically a locally cached `grammar.js`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GrammarSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn get(&mut self) -> Result<GrammarText, SourceError> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(self.describe()),
            _ => SourceError::Io {
                origin: self.describe(),
                message: e.to_string(),
            },
        })?;
        decode(bytes, self.describe())
    }
}

/// Any reader, e.g. stdin
pub struct ReaderSource<R> {
    reader: R,
    origin: String,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R, origin: impl Into<String>) -> Self {
        Self {
            reader,
            origin: origin.into(),
        }
    }
}

impl ReaderSource<io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin(), "<stdin>")
    }
}

impl<R: Read> GrammarSource for ReaderSource<R> {
    fn describe(&self) -> String {
        self.origin.clone()
    }

    fn get(&mut self) -> Result<GrammarText, SourceError> {
        let mut bytes = Vec::new();
        self.reader
            .read_to_end(&mut bytes)
            .map_err(|e| SourceError::Io {
                origin: self.origin.clone(),
                message: e.to_string(),
            })?;
        decode(bytes, self.origin.clone())
    }
}

/// Text already in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: GrammarText,
}

impl StaticSource {
    pub fn new(text: impl Into<GrammarText>) -> Self {
        Self { text: text.into() }
    }
}

impl GrammarSource for StaticSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn get(&mut self) -> Result<GrammarText, SourceError> {
        Ok(self.text.clone())
    }
}
