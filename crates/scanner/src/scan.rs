use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use trailfetch_core::{MediaType, TitleRecord};

use crate::parser;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// What to do with one library subfolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderDecision {
    /// A trailer file already exists. Skip without any network traffic.
    HasTrailer,
    /// Folder name does not match `<title> (<year>)`. Skip, leave untouched.
    Unparsed,
    /// Resolve a trailer for this record.
    Candidate(TitleRecord),
}

/// Classify one title folder per the library layout rules.
///
/// A folder with at least one direct regular file is a movie whose largest
/// file is the reference video (its name may embed a `tmdb-<id>`). A folder
/// with no direct files is treated as a series with episodes nested deeper.
/// That heuristic also labels empty or malformed folders as series; they
/// simply fall through to a catalog search on the folder name.
pub fn assess_folder(folder: &Path) -> Result<FolderDecision, ScanError> {
    let folder_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut files: Vec<(String, u64)> = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();

        if parser::has_trailer_suffix(&name) {
            info!(folder = %folder_name, "already has a trailer, skipping");
            return Ok(FolderDecision::HasTrailer);
        }

        if let Ok(meta) = entry.metadata() {
            if meta.is_file() {
                files.push((name, meta.len()));
            }
        }
    }

    let Some((title, year)) = parser::parse_title_year(&folder_name) else {
        info!(folder = %folder_name, "name does not match \"<title> (<year>)\", skipping");
        return Ok(FolderDecision::Unparsed);
    };

    // Movies keep their video directly in the folder; series nest episodes
    // in season subfolders.
    let (media_type, catalog_id) = match files.iter().max_by_key(|(_, size)| *size) {
        Some((reference, _)) => {
            let id = parser::extract_tmdb_id(parser::file_stem(reference));
            debug!(folder = %folder_name, reference = %reference, id = ?id, "movie folder");
            (MediaType::Movie, id)
        }
        None => {
            debug!(folder = %folder_name, "no direct files, treating as series");
            (MediaType::Series, None)
        }
    };

    Ok(FolderDecision::Candidate(TitleRecord {
        title,
        year,
        media_type,
        catalog_id,
        folder: folder.to_path_buf(),
    }))
}

/// Enumerate immediate subfolders of a library root and classify each.
/// Non-directories are ignored; unreadable folders are logged and skipped.
pub fn scan_library(root: &Path) -> Result<Vec<(PathBuf, FolderDecision)>, ScanError> {
    let mut folders: Vec<PathBuf> = std::fs::read_dir(root)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    folders.sort();

    let mut decisions = Vec::with_capacity(folders.len());
    for folder in folders {
        match assess_folder(&folder) {
            Ok(decision) => decisions.push((folder, decision)),
            Err(e) => {
                warn!(path = %folder.display(), error = %e, "cannot read folder, skipping");
            }
        }
    }
    Ok(decisions)
}
