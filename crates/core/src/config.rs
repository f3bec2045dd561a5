//! Process-wide configuration, loaded once at startup and read-only after.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Locale key that must always be present in the policy table.
pub const DEFAULT_LOCALE: &str = "default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("locale table has no \"default\" entry")]
    MissingDefaultLocale,
}

/// How trailer searches are augmented for one original language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalePolicy {
    /// Search (and save) under the catalog's original-language title
    /// instead of the folder-derived one.
    #[serde(default)]
    pub use_original_title: bool,
    /// Keywords appended after "<title> <year>" in the search query.
    pub search_keywords: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// TMDB API key. Optional: without it, id resolution and
    /// language-dependent behaviour are disabled.
    pub tmdb_api_key: Option<String>,
    /// YouTube Data API key. Required for any search to happen.
    pub youtube_api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// When false, only warnings and errors are emitted by default.
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// Locale policy table keyed by language code, plus a mandatory
    /// "default" entry.
    pub locale: HashMap<String, LocalePolicy>,
}

impl Config {
    /// Load and validate a TOML config file. A missing `locale.default`
    /// entry is a startup error, never a mid-run surprise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        if !config.locale.contains_key(DEFAULT_LOCALE) {
            return Err(ConfigError::MissingDefaultLocale);
        }
        Ok(config)
    }

    /// Look up the policy for an original language, falling back to the
    /// default entry when the language is unknown or no catalog details
    /// were available at all.
    pub fn policy_for(&self, language: Option<&str>) -> &LocalePolicy {
        language
            .and_then(|code| self.locale.get(code))
            .unwrap_or_else(|| {
                self.locale
                    .get(DEFAULT_LOCALE)
                    .expect("default locale validated at load")
            })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[auth]
tmdb_api_key = "tmdb-key"
youtube_api_key = "yt-key"

[log]
verbose = true

[locale.default]
use_original_title = false
search_keywords = "official trailer"

[locale.fr]
use_original_title = true
search_keywords = "bande annonce vf"
"#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_full_config() {
        let file = write_config(SAMPLE);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.auth.tmdb_api_key.as_deref(), Some("tmdb-key"));
        assert_eq!(config.auth.youtube_api_key.as_deref(), Some("yt-key"));
        assert!(config.log.verbose);
        assert_eq!(config.locale.len(), 2);
    }

    #[test]
    fn missing_default_locale_fails_fast() {
        let file = write_config(
            r#"
[locale.fr]
use_original_title = true
search_keywords = "bande annonce"
"#,
        );
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDefaultLocale));
    }

    #[test]
    fn policy_lookup_falls_back_to_default() {
        let file = write_config(SAMPLE);
        let config = Config::load(file.path()).unwrap();

        let fr = config.policy_for(Some("fr"));
        assert!(fr.use_original_title);
        assert_eq!(fr.search_keywords, "bande annonce vf");

        let unknown = config.policy_for(Some("ja"));
        assert_eq!(unknown.search_keywords, "official trailer");

        let none = config.policy_for(None);
        assert_eq!(none.search_keywords, "official trailer");
    }
}
