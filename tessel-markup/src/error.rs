use thiserror::Error;

/// Input-contract violations raised while building a tree.
///
/// Lexical anomalies (stray `<`, unmatched quotes, unterminated comments) are
/// absorbed by the linearizer and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// An attribute part was appended before the attribute was started.
    #[error("dangling attribute continuation: `{name}` was appended to before it was set")]
    DanglingAttribute { name: String },

    /// The value list does not match the placeholder boundaries of the fragments.
    #[error("{fragments} fragments need {expected} placeholder values, got {found}")]
    FieldCountMismatch {
        fragments: usize,
        expected: usize,
        found: usize,
    },

    /// A field index points past the end of the value list.
    #[error("field index {index} is out of range for {len} values")]
    FieldOutOfRange { index: usize, len: usize },

    /// A template produced no top-level nodes.
    #[error("template produced no nodes")]
    EmptyTemplate,
}

pub type MarkupResult<T> = Result<T, MarkupError>;
