//! Error types for plot-assert.

use crate::artist::ArtistKind;
use crate::property::Property;
use thiserror::Error;

/// Result type alias using CompareError.
pub type CompareResult<T> = Result<T, CompareError>;

/// Broad category of a comparison failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A compared value pair differs beyond its rule's tolerance.
    Mismatch,
    /// Compared sequences differ in length, or paired objects differ in type.
    Shape,
    /// An input could not be interpreted (e.g. a color matrix with several rows).
    InvalidInput,
}

/// Errors reported by the comparison operations.
///
/// Only the first failure found is reported; nothing is aggregated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    /// Two sequences that must be the same length are not.
    #[error("Length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Paired artists are of different concrete types.
    #[error("Artist type mismatch at index {index}: {left} != {right}")]
    KindMismatch {
        index: usize,
        left: ArtistKind,
        right: ArtistKind,
    },

    /// A property differs between paired artists.
    #[error("Property '{property}' mismatch at index {index}: {left} != {right}")]
    PropertyMismatch {
        index: usize,
        property: Property,
        left: String,
        right: String,
    },

    /// The first artist exposes a property the second one lacks.
    #[error("Property '{property}' missing from second artist at index {index}")]
    MissingProperty { index: usize, property: Property },

    /// A named scalar or text attribute differs.
    #[error("{what} mismatch: {left} != {right}")]
    ValueMismatch {
        what: &'static str,
        left: String,
        right: String,
    },

    /// Numeric values are not within tolerance.
    #[error("{what} not close: {left:?} vs {right:?} (atol={absolute}, rtol={relative})")]
    NotClose {
        what: &'static str,
        left: Vec<f64>,
        right: Vec<f64>,
        absolute: f64,
        relative: f64,
    },

    /// A spine of the first axes has no counterpart on the second.
    #[error("Spine '{0}' missing from second axes")]
    MissingSpine(String),

    /// A color matrix does not reduce to a single row.
    #[error("Color arrays must be one-dimensional (got {unique_rows} unique rows)")]
    ColorRank { unique_rows: usize },

    /// A color value could not be normalized.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Path data could not be parsed.
    #[error("Invalid path data: {0}")]
    InvalidPath(String),

    /// An inner failure, annotated with what was being compared.
    #[error("{scope}: {source}")]
    Scoped {
        scope: String,
        #[source]
        source: Box<CompareError>,
    },
}

impl CompareError {
    /// Category of this failure, looking through any scope annotations.
    pub fn kind(&self) -> FailureKind {
        match self {
            CompareError::LengthMismatch { .. } | CompareError::KindMismatch { .. } => {
                FailureKind::Shape
            }
            CompareError::ColorRank { .. }
            | CompareError::InvalidColor(_)
            | CompareError::InvalidPath(_) => FailureKind::InvalidInput,
            CompareError::Scoped { source, .. } => source.kind(),
            _ => FailureKind::Mismatch,
        }
    }

    /// The innermost error, with scope annotations stripped.
    pub fn root(&self) -> &CompareError {
        match self {
            CompareError::Scoped { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn value_mismatch(
        what: &'static str,
        left: impl std::fmt::Debug,
        right: impl std::fmt::Debug,
    ) -> Self {
        CompareError::ValueMismatch {
            what,
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }
}

/// Attach a scope to the error of a comparison result.
pub(crate) trait ScopeExt<T> {
    fn scope(self, scope: impl Into<String>) -> CompareResult<T>;
}

impl<T> ScopeExt<T> for CompareResult<T> {
    fn scope(self, scope: impl Into<String>) -> CompareResult<T> {
        self.map_err(|err| CompareError::Scoped {
            scope: scope.into(),
            source: Box::new(err),
        })
    }
}
