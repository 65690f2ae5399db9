use crate::error::{EngineError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Character encoding shared by the word-vector file and the text files.
///
/// Inputs are split on ASCII bytes before decoding, so only encodings that
/// keep ASCII bytes intact are accepted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    /// Resolve a WHATWG encoding label such as `utf-8` or `latin1`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEncoding`] for labels `encoding_rs` does not
    /// know and [`EngineError::UnsupportedEncoding`] for encodings that are not
    /// ASCII-compatible (UTF-16 and friends).
    pub fn from_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| EngineError::UnknownEncoding(label.to_string()))?;
        if !encoding.is_ascii_compatible() {
            return Err(EngineError::UnsupportedEncoding(encoding.name()));
        }
        Ok(Self(encoding))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Strict decode: `None` when `bytes` is malformed in this encoding.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}
