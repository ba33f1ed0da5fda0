use thiserror::Error;

/// Failures surfaced by the catalog export pipeline.
///
/// Every variant aborts the run; there is no retry or partial-output
/// recovery. The taxonomy exists so callers see what failed instead of a
/// bare panic.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("input file not found: {path}")]
    InputNotFound { path: String },

    #[error("failed to read input file {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed Turtle in {path}: {message}")]
    MalformedGraph { path: String, message: String },

    #[error("identifier has neither '#' nor '/': {uri}")]
    MalformedIdentifier { uri: String },

    #[error("non-numeric literal {value:?} for {predicate} on {subject}")]
    InvalidNumericLiteral {
        subject: String,
        predicate: String,
        value: String,
    },

    #[error("failed to write output file {path}: {source}")]
    OutputWriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid IRI: {0}")]
    InvalidIri(#[from] oxigraph::model::IriParseError),

    #[error("triple store error: {0}")]
    Store(#[from] oxigraph::store::StorageError),
}
