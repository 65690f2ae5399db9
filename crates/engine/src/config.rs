use crate::encoding::TextEncoding;
use crate::options::TokenizeMode;
use derive_builder::Builder;
use std::path::PathBuf;

/// Options that shape how each text line is turned into counted tokens.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct AnalyzeOptions {
    #[builder(default)]
    pub tokenizer: TokenizeMode,
    #[builder(default)]
    pub lowercase: bool,
    /// Number of most frequent OOV tokens kept in a report.
    #[builder(default = "10")]
    pub oov_number: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            tokenizer: TokenizeMode::Whitespace,
            lowercase: false,
            oov_number: 10,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub wordvecs: PathBuf,
    #[builder(default)]
    pub texts: Vec<PathBuf>,

    #[builder(default)]
    pub encoding: TextEncoding,
    #[builder(default)]
    pub max_words: Option<usize>,
    #[builder(default)]
    pub analyze: AnalyzeOptions,

    /// Abort on the first text file that fails instead of collecting errors.
    #[builder(default)]
    pub strict: bool,
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}
