use std::num::NonZeroUsize;

/// How a non-blank text line is turned into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizeMode {
    /// Split the whole line on runs of whitespace.
    #[default]
    Whitespace,
    /// Use only the N-th tab-separated field (1-based) as the single token.
    Field(NonZeroUsize),
}

impl TokenizeMode {
    #[must_use]
    pub fn field(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self::Field)
    }
}

impl From<Option<NonZeroUsize>> for TokenizeMode {
    fn from(field: Option<NonZeroUsize>) -> Self {
        field.map_or(Self::Whitespace, Self::Field)
    }
}
