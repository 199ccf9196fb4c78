//! Host-level errors: the ones that happen around the interpreter rather
//! than inside it (file I/O). Runtime faults inside a running program are
//! `Object::Error` values, not this type — see `object::Object` and
//! `evaluator::error`.
//!
//! Grounded in the teacher's `typechecker::error::TypeError`: a plain
//! `message` field with a hand-written `Display`/`std::error::Error`, no
//! `anyhow`/`thiserror` (the teacher's root package uses neither).
use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug)]
pub struct SourceLoadError {
    pub path: PathBuf,
    pub message: String,
}

impl Display for SourceLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read {}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for SourceLoadError {}
