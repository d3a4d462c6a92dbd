use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::extract::MAX_UPLOAD_BYTES;

/// Which keyword ranking backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordBackend {
    /// Plain term frequency (default)
    Frequency,
    /// TF-IDF over the document's sentences
    TfIdf,
}

/// Central configuration loaded from environment variables.
///
/// Nothing is required; every variable has a default. The .env file is
/// loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Keyword backend (DOCSENSE_KEYWORDS=frequency|tfidf)
    pub keyword_backend: KeywordBackend,
    /// Documents analyzed at once in batch mode (DOCSENSE_CONCURRENCY, default 4)
    pub concurrency: usize,
    /// Per-document time limit in batch mode (DOCSENSE_TIMEOUT_SECS, unset = none)
    pub timeout: Option<Duration>,
    /// Largest accepted input file (DOCSENSE_MAX_UPLOAD_BYTES, default 10 MB)
    pub max_upload_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyword_backend: KeywordBackend::Frequency,
            concurrency: 4,
            timeout: None,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` uses the process
    /// environment; tests pass a closure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let keyword_backend = match lookup("DOCSENSE_KEYWORDS").as_deref() {
            Some("tfidf") | Some("tf-idf") => KeywordBackend::TfIdf,
            None | Some("") | Some("frequency") => KeywordBackend::Frequency,
            Some(other) => anyhow::bail!(
                "DOCSENSE_KEYWORDS must be `frequency` or `tfidf`, got `{other}`"
            ),
        };

        let concurrency = match lookup("DOCSENSE_CONCURRENCY") {
            Some(raw) => {
                let n: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("DOCSENSE_CONCURRENCY is not a number: {raw}"))?;
                if n == 0 {
                    anyhow::bail!("DOCSENSE_CONCURRENCY must be at least 1");
                }
                n
            }
            None => defaults.concurrency,
        };

        let timeout = match lookup("DOCSENSE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("DOCSENSE_TIMEOUT_SECS is not a number: {raw}"))?;
                Some(Duration::from_secs(secs))
            }
            None => defaults.timeout,
        };

        let max_upload_bytes = match lookup("DOCSENSE_MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DOCSENSE_MAX_UPLOAD_BYTES is not a number: {raw}"))?,
            None => defaults.max_upload_bytes,
        };

        Ok(Self {
            keyword_backend,
            concurrency,
            timeout,
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.keyword_backend, KeywordBackend::Frequency);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.timeout, None);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("DOCSENSE_KEYWORDS", "tfidf"),
            ("DOCSENSE_CONCURRENCY", "8"),
            ("DOCSENSE_TIMEOUT_SECS", "30"),
            ("DOCSENSE_MAX_UPLOAD_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.keyword_backend, KeywordBackend::TfIdf);
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_invalid_values() {
        assert!(from_pairs(&[("DOCSENSE_KEYWORDS", "bert")]).is_err());
        assert!(from_pairs(&[("DOCSENSE_CONCURRENCY", "0")]).is_err());
        assert!(from_pairs(&[("DOCSENSE_CONCURRENCY", "many")]).is_err());
        assert!(from_pairs(&[("DOCSENSE_TIMEOUT_SECS", "-1")]).is_err());
    }
}
