//! Sources a share container can be loaded from.
//!
//! The arithmetic core never touches I/O; it consumes a
//! [`ReconstructionRequest`] and does not care whether the container came
//! from a file, standard input, or a string baked into a test.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::container;
use crate::error::Result;
use crate::share::ReconstructionRequest;

/// Where the raw container text comes from.
pub trait RequestProvider {
    fn fetch(&self) -> Result<String>;
}

/// Fetch from a provider and parse into a request in one step.
pub fn load(provider: &impl RequestProvider) -> Result<ReconstructionRequest> {
    container::parse_request(&provider.fetch()?)
}

/// Reads the container from a file on disk.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileProvider { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RequestProvider for FileProvider {
    fn fetch(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Reads the container from standard input until EOF.
pub struct StdinProvider;

impl RequestProvider for StdinProvider {
    fn fetch(&self) -> Result<String> {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// Serves a container held in memory.
pub struct StaticProvider {
    text: String,
}

impl StaticProvider {
    pub fn new(text: impl Into<String>) -> Self {
        StaticProvider { text: text.into() }
    }
}

impl RequestProvider for StaticProvider {
    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Lookup chain for interactive use: a well-known file if it exists,
/// standard input otherwise.
pub struct FileOrStdinProvider {
    path: PathBuf,
}

impl FileOrStdinProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileOrStdinProvider { path: path.into() }
    }
}

impl Default for FileOrStdinProvider {
    fn default() -> Self {
        FileOrStdinProvider::new("input.json")
    }
}

impl RequestProvider for FileOrStdinProvider {
    fn fetch(&self) -> Result<String> {
        if self.path.exists() {
            FileProvider::new(&self.path).fetch()
        } else {
            StdinProvider.fetch()
        }
    }
}
