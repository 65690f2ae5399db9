// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use log::LevelFilter;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use wvoov_engine::encoding::TextEncoding;

/// Get out-of-vocabulary rate for word vectors on text.
#[derive(Parser, Debug)]
#[command(name = "wvoov", version = crate::VERSION)]
pub struct Args {
    /// Text encoding of the word vectors and the text files
    #[arg(short, long, default_value = "UTF-8", value_name = "LABEL")]
    pub encoding: TextEncoding,

    /// Words found in TSV field N (1-based; default: plain text)
    #[arg(short, long, value_name = "N")]
    pub field: Option<NonZeroUsize>,

    /// Lowercase input text
    #[arg(short, long)]
    pub lowercase: bool,

    /// Maximum number of words to read from the word vectors
    #[arg(short, long, value_name = "N")]
    pub max_words: Option<usize>,

    /// Print out the most frequent N OOV words
    #[arg(short = 'n', long, value_name = "N", default_value_t = 10)]
    pub oov_number: usize,

    /// Stop at the first text file that cannot be analysed
    #[arg(long)]
    pub strict: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Word vector file (first line is a header)
    #[arg(value_hint = ValueHint::FilePath)]
    pub wordvecs: PathBuf,

    /// Text files to analyse
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub text: Vec<PathBuf>,
}

impl Args {
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
