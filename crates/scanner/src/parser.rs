use regex::Regex;
use std::sync::LazyLock;

/// Filename endings that mark a folder as already having a trailer.
static TRAILER_SUFFIXES: &[&str] = &["-trailer.mp4", "-trailer.mkv"];

// "Title (2024)" at the start of a folder or file name
static RE_TITLE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?) \((\d{4})\)").unwrap());

// Embedded catalog id: "Title (2024) ... tmdb-12345 ..."
static RE_TMDB_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+? \(\d{4}\).*tmdb-(\d+)").unwrap());

/// Check whether a filename marks an already-downloaded trailer
/// (case-insensitive `-trailer.mp4` / `-trailer.mkv`).
pub fn has_trailer_suffix(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    TRAILER_SUFFIXES.iter().any(|suf| lower.ends_with(suf))
}

/// Parse `<title> (<4-digit-year>)` off the front of a name. Anything after
/// the year (release-group tags, ids) is ignored.
pub fn parse_title_year(name: &str) -> Option<(String, String)> {
    let caps = RE_TITLE_YEAR.captures(name)?;
    Some((caps[1].trim().to_string(), caps[2].to_string()))
}

/// Extract an embedded `tmdb-<digits>` catalog id from a file stem.
/// Absence is normal; the pipeline resolves the id over the network instead.
pub fn extract_tmdb_id(stem: &str) -> Option<String> {
    RE_TMDB_ID
        .captures(stem)
        .map(|caps| caps[1].to_string())
}

/// Strip the extension off a filename.
pub fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) => &filename[..pos],
        None => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailer_suffix_matches_case_insensitive() {
        assert!(has_trailer_suffix("Alpha (2020)-Trailer.mp4"));
        assert!(has_trailer_suffix("alpha (2020)-trailer.MKV"));
        assert!(has_trailer_suffix("Beta-TRAILER.Mp4"));
        assert!(!has_trailer_suffix("Alpha (2020).mp4"));
        assert!(!has_trailer_suffix("Alpha (2020)-Trailer.avi"));
    }

    #[test]
    fn title_year_from_folder_name() {
        assert_eq!(
            parse_title_year("The Matrix (1999)"),
            Some(("The Matrix".into(), "1999".into()))
        );
        assert_eq!(
            parse_title_year("Alpha (2020) [1080p]"),
            Some(("Alpha".into(), "2020".into()))
        );
    }

    #[test]
    fn title_year_requires_pattern() {
        assert_eq!(parse_title_year("Some Random Folder"), None);
        assert_eq!(parse_title_year("Movie (20)"), None);
        assert_eq!(parse_title_year("(2020)"), None);
    }

    #[test]
    fn tmdb_id_from_file_stem() {
        assert_eq!(
            extract_tmdb_id("Alpha (2020) [tmdb-651881] Bluray-1080p"),
            Some("651881".into())
        );
        assert_eq!(
            extract_tmdb_id("Alpha (2020) {tmdb-7} x265"),
            Some("7".into())
        );
        assert_eq!(extract_tmdb_id("Alpha (2020) Bluray-1080p"), None);
        // Pattern needs the title/year prefix too.
        assert_eq!(extract_tmdb_id("tmdb-651881"), None);
    }

    #[test]
    fn stem_strips_last_extension() {
        assert_eq!(file_stem("Alpha (2020).mkv"), "Alpha (2020)");
        assert_eq!(file_stem("no extension"), "no extension");
        assert_eq!(file_stem("a.b.c.mp4"), "a.b.c");
    }
}
