//! Media-manager hook handling.
//!
//! Radarr and Sonarr custom scripts communicate through environment
//! variables. Parsing works over plain key/value pairs so it can be tested
//! without touching the ambient environment.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::warn;
use trailfetch_core::{MediaType, TitleRecord};

/// What a hook invocation asks the process to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookAction {
    /// "Test" event: check the search credential and exit.
    Validate,
    /// Resolve a trailer for exactly this title.
    Resolve(TitleRecord),
    /// Nothing to do (upgrade download, unknown event, incomplete context).
    Skip,
}

/// Whether the environment carries a media-manager event at all.
pub fn is_hook_invocation(vars: &HashMap<String, String>) -> bool {
    vars.contains_key("radarr_eventtype") || vars.contains_key("sonarr_eventtype")
}

/// Interpret environment variables as a hook invocation. `None` means this
/// is not a hook run at all and the CLI arguments apply instead.
pub fn hook_action(vars: &HashMap<String, String>) -> Option<HookAction> {
    if vars.contains_key("radarr_eventtype") {
        return Some(radarr_action(vars));
    }
    if vars.contains_key("sonarr_eventtype") {
        return Some(sonarr_action(vars));
    }
    None
}

fn radarr_action(vars: &HashMap<String, String>) -> HookAction {
    match vars["radarr_eventtype"].as_str() {
        "Test" => HookAction::Validate,
        "Download" => {
            // Upgrades re-download the movie file; the trailer is already
            // in place from the first import.
            if vars.get("radarr_isupgrade").map(String::as_str) == Some("True") {
                HookAction::Skip
            } else {
                movie_record(vars)
            }
        }
        "Rename" => movie_record(vars),
        other => {
            warn!(event = other, "ignoring unhandled Radarr event");
            HookAction::Skip
        }
    }
}

fn sonarr_action(vars: &HashMap<String, String>) -> HookAction {
    match vars["sonarr_eventtype"].as_str() {
        "Test" => HookAction::Validate,
        "Download" => {
            if vars.get("sonarr_isupgrade").map(String::as_str) == Some("True") {
                HookAction::Skip
            } else {
                series_record(vars)
            }
        }
        "Rename" => series_record(vars),
        other => {
            warn!(event = other, "ignoring unhandled Sonarr event");
            HookAction::Skip
        }
    }
}

fn movie_record(vars: &HashMap<String, String>) -> HookAction {
    let (Some(title), Some(year), Some(path)) = (
        vars.get("radarr_movie_title"),
        vars.get("radarr_movie_year"),
        vars.get("radarr_movie_path"),
    ) else {
        warn!("Radarr event is missing movie title/year/path");
        return HookAction::Skip;
    };

    let catalog_id = vars
        .get("radarr_movie_tmdbid")
        .filter(|id| !id.is_empty())
        .cloned();

    HookAction::Resolve(TitleRecord {
        title: title.clone(),
        year: year.clone(),
        media_type: MediaType::Movie,
        catalog_id,
        folder: PathBuf::from(path),
    })
}

fn series_record(vars: &HashMap<String, String>) -> HookAction {
    let (Some(title), Some(year), Some(path)) = (
        vars.get("sonarr_series_title"),
        vars.get("sonarr_series_year"),
        vars.get("sonarr_series_path"),
    ) else {
        warn!("Sonarr event is missing series title/year/path");
        return HookAction::Skip;
    };

    // Sonarr exposes no TMDB id; the pipeline resolves one.
    HookAction::Resolve(TitleRecord {
        title: title.clone(),
        year: year.clone(),
        media_type: MediaType::Series,
        catalog_id: None,
        folder: PathBuf::from(path),
    })
}
