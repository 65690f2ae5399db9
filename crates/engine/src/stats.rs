use crate::error::{EngineError, Result};
use crate::vocabulary::Vocabulary;
use hashbrown::HashMap;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first_seen: usize,
}

/// Per-file OOV tallies. Built fresh for every text file.
#[derive(Debug, Clone, Default)]
pub struct OovCounter {
    counts: HashMap<String, Tally>,
    total_tokens: usize,
    oov_total: usize,
}

impl OovCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one token, returning `true` if it is out of vocabulary.
    pub fn record(&mut self, token: &str, vocab: &Vocabulary) -> bool {
        self.total_tokens += 1;
        if vocab.contains(token) {
            return false;
        }
        self.oov_total += 1;
        if let Some(tally) = self.counts.get_mut(token) {
            tally.count += 1;
        } else {
            let first_seen = self.counts.len();
            self.counts.insert(
                token.to_owned(),
                Tally {
                    count: 1,
                    first_seen,
                },
            );
        }
        true
    }

    #[must_use]
    pub const fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    #[must_use]
    pub const fn oov_total(&self) -> usize {
        self.oov_total
    }

    /// Occurrences of `token` as an OOV word; 0 if never seen or in vocabulary.
    #[must_use]
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).map_or(0, |t| t.count)
    }

    /// The `n` most frequent OOV tokens, by count descending.
    ///
    /// Equal counts keep the order in which the tokens were first seen.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<OovEntry> {
        let mut ranked: Vec<_> = self.counts.iter().collect();
        ranked.sort_unstable_by_key(|(_, t)| (Reverse(t.count), t.first_seen));
        ranked
            .into_iter()
            .take(n)
            .map(|(token, t)| OovEntry {
                token: token.clone(),
                count: t.count,
            })
            .collect()
    }

    /// Finish counting `path` and keep its `oov_number` most frequent OOV tokens.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoTokens`] if no token was counted, since rates
    /// over zero tokens are undefined.
    pub fn into_report(self, path: &Path, oov_number: usize) -> Result<OovReport> {
        if self.total_tokens == 0 {
            return Err(EngineError::NoTokens {
                path: path.to_path_buf(),
            });
        }
        Ok(OovReport {
            path: path.to_path_buf(),
            total_tokens: self.total_tokens,
            oov_total: self.oov_total,
            top: self.top(oov_number),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OovEntry {
    pub token: String,
    pub count: usize,
}

/// Result of scanning one text file. `total_tokens` is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OovReport {
    pub path: PathBuf,
    pub total_tokens: usize,
    pub oov_total: usize,
    pub top: Vec<OovEntry>,
}

impl OovReport {
    /// Fraction of tokens that are out of vocabulary.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn oov_rate(&self) -> f64 {
        self.oov_total as f64 / self.total_tokens as f64
    }

    /// Fraction of all tokens that `entry` accounts for.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, entry: &OovEntry) -> f64 {
        entry.count as f64 / self.total_tokens as f64
    }
}

/// Everything produced by one invocation of [`crate::run`].
#[derive(Debug, Default)]
pub struct RunResult {
    pub vocabulary_size: usize,
    pub vocabulary_path: PathBuf,
    /// Successful reports, in input order.
    pub reports: Vec<OovReport>,
    /// Text files that could not be analysed, in input order.
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
