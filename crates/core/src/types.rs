use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of library item a folder was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Movie,
    Series,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One title to resolve a trailer for. Built from a folder name by the
/// scanner, or from hook environment variables. Immutable for the duration
/// of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    pub title: String,
    /// Four-digit release year, kept as text since it is only ever
    /// interpolated into queries and filenames.
    pub year: String,
    pub media_type: MediaType,
    /// Catalog id embedded in a library filename, if any. Resolved via the
    /// catalog search endpoint when absent.
    pub catalog_id: Option<String>,
    /// Folder the trailer should be saved into.
    pub folder: PathBuf,
}

impl TitleRecord {
    /// Output template for the downloader, with the extension placeholder
    /// still unresolved: `<folder>/<title> (<year>)-Trailer.%(ext)s`.
    pub fn trailer_template(&self, effective_title: &str) -> PathBuf {
        self.folder
            .join(format!("{} ({})-Trailer.%(ext)s", effective_title, self.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_display() {
        assert_eq!(MediaType::Movie.to_string(), "movie");
        assert_eq!(MediaType::Series.to_string(), "series");
    }

    #[test]
    fn trailer_template_uses_effective_title() {
        let rec = TitleRecord {
            title: "Alpha".into(),
            year: "2020".into(),
            media_type: MediaType::Movie,
            catalog_id: None,
            folder: PathBuf::from("/library/Alpha (2020)"),
        };
        assert_eq!(
            rec.trailer_template("Alpha"),
            PathBuf::from("/library/Alpha (2020)/Alpha (2020)-Trailer.%(ext)s")
        );
        // A resolved original-language title must flow into the filename too.
        assert_eq!(
            rec.trailer_template("Alfa"),
            PathBuf::from("/library/Alpha (2020)/Alfa (2020)-Trailer.%(ext)s")
        );
    }
}
