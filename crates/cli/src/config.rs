// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use wvoov_engine::config::{AnalyzeOptions, AnalyzeOptionsBuilder, Config, ConfigBuilder};
use wvoov_engine::options::TokenizeMode;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let analyze = AnalyzeOptionsBuilder::default()
            .tokenizer(TokenizeMode::from(args.field))
            .lowercase(args.lowercase)
            .oov_number(args.oov_number)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        ConfigBuilder::default()
            .wordvecs(args.wordvecs)
            .texts(args.text)
            .encoding(args.encoding)
            .max_words(args.max_words)
            .analyze(analyze)
            .strict(args.strict)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
