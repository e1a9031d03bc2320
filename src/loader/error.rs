use std::io;

use thiserror::Error;

use crate::clusterer::{ClusterError, PointId};

/// Why loading stopped
#[derive(Error, Debug)]
pub enum LoadErrorKind {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Input is empty, expected a \"count=N\" header")]
    MissingHeader,

    #[error("Line {line}: first line must have the form \"count=N\", found \"{content}\"")]
    MalformedHeader { line: usize, content: String },

    #[error("Object count must be a positive integer, found \"{value}\"")]
    InvalidCount { value: String },

    #[error("Header declares {declared} objects, at most {max} are supported")]
    TooManyObjects { declared: usize, max: usize },

    #[error("Line {line}: expected \"ID X Y\", found {fields} fields")]
    InvalidLine { line: usize, fields: usize },

    #[error("Line {line}: invalid {field} \"{value}\"")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Header declares {declared} objects, but {found} were found")]
    CountMismatch { declared: usize, found: usize },

    #[error("Line {line}: id {id} was already used on line {first_line}")]
    DuplicateId {
        line: usize,
        id: PointId,
        first_line: usize,
    },

    #[error("Line {line}: coordinate {axis} = {value} is outside {min}..={max}")]
    CoordinateOutOfRange {
        line: usize,
        axis: char,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{0}")]
    Allocation(#[from] ClusterError),
}

impl LoadErrorKind {
    /// Whether the input text itself is at fault, as opposed to the
    /// environment (I/O, memory)
    pub fn is_format_error(&self) -> bool {
        !matches!(self, LoadErrorKind::Io(_) | LoadErrorKind::Allocation(_))
    }
}

/// A failed load, with the number of points that were read before it failed
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub loaded: usize,
}

impl LoadError {
    pub fn new(kind: impl Into<LoadErrorKind>, loaded: usize) -> Self {
        Self {
            kind: kind.into(),
            loaded,
        }
    }
}
