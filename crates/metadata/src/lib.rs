pub mod provider;
pub mod tmdb;

use thiserror::Error;

pub use provider::CatalogProvider;
pub use tmdb::TmdbClient;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog error: {0}")]
    Provider(String),
}

/// Catalog details for one title. Movies and series use different
/// original-name keys upstream (`original_title` vs `original_name`), so
/// the two are kept as distinct variants rather than one loose record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDetails {
    Movie {
        original_title: String,
        original_language: String,
    },
    Series {
        original_name: String,
        original_language: String,
    },
}

impl CatalogDetails {
    pub fn original_language(&self) -> &str {
        match self {
            Self::Movie {
                original_language, ..
            }
            | Self::Series {
                original_language, ..
            } => original_language,
        }
    }

    /// The title in the work's original language, whichever upstream field
    /// it came from.
    pub fn native_title(&self) -> &str {
        match self {
            Self::Movie { original_title, .. } => original_title,
            Self::Series { original_name, .. } => original_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_title_per_variant() {
        let movie = CatalogDetails::Movie {
            original_title: "Le Film".into(),
            original_language: "fr".into(),
        };
        assert_eq!(movie.native_title(), "Le Film");
        assert_eq!(movie.original_language(), "fr");

        let series = CatalogDetails::Series {
            original_name: "La Serie".into(),
            original_language: "es".into(),
        };
        assert_eq!(series.native_title(), "La Serie");
        assert_eq!(series.original_language(), "es");
    }
}
