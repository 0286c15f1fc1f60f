//! Typed models for the Channels DVR HTTP API
//!
//! The JSON schema is owned by the server; these structs capture the
//! fields the lookup needs and ignore everything else.

use serde::Deserialize;

/// Airing metadata attached to a scheduled or recorded program
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Airing {
    /// Program title
    #[serde(rename = "Title")]
    pub title: String,

    /// Season number, present for series airings
    #[serde(rename = "SeasonNumber")]
    pub season_number: Option<u32>,

    /// Episode number, present for series airings
    #[serde(rename = "EpisodeNumber")]
    pub episode_number: Option<u32>,

    /// Category tags, the first of which classifies the program
    #[serde(rename = "Categories", default)]
    pub categories: Vec<String>,

    /// Raw guide data, not always provided by the source
    #[serde(rename = "Raw")]
    pub raw: Option<RawAiring>,
}

/// Subset of the raw guide data carried by some airings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAiring {
    /// UTC start time in the form "2023-06-24T15:00Z"
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
}

/// One entry from the `/dvr/jobs` or `/dvr/files` listing
///
/// Jobs and files share this shape; fields only one of them carries
/// (`Skipped` on jobs, `FileID` on some files) are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Recording {
    #[serde(rename = "ID")]
    pub id: String,

    /// ID of the pass that scheduled this recording, if any
    #[serde(rename = "RuleID")]
    pub rule_id: Option<String>,

    /// ID of the job that produced this recording
    #[serde(rename = "JobID")]
    pub job_id: Option<String>,

    /// ID of the recorded file, when distinct from `ID`
    #[serde(rename = "FileID")]
    pub file_id: Option<String>,

    /// Source path of an imported (not recorded) program
    #[serde(rename = "ImportPath")]
    pub import_path: Option<String>,

    /// Jobs only: marked to be skipped instead of recorded
    #[serde(rename = "Skipped", default)]
    pub skipped: bool,

    #[serde(rename = "Airing")]
    pub airing: Airing,
}

impl Recording {
    /// Category of the program: the first `Categories` tag, or
    /// `"Program"` when none is present.
    pub fn category(&self) -> &str {
        self.airing
            .categories
            .first()
            .map(String::as_str)
            .unwrap_or("Program")
    }

    /// Whether this program was imported into the library rather
    /// than recorded by the server.
    pub fn is_imported(&self) -> bool {
        self.import_path.is_some()
    }

    /// Whether this recording was scheduled manually rather than by
    /// a pass. Manual recordings carry `-ch` in their ID or job ID.
    pub fn is_manual(&self) -> bool {
        self.id.contains("-ch")
            || self
                .job_id
                .as_deref()
                .map_or(false, |job_id| job_id.contains("-ch"))
    }

    /// UTC start time from the raw guide data, if provided
    pub fn start_time(&self) -> Option<&str> {
        self.airing.raw.as_ref().and_then(|raw| raw.start_time.as_deref())
    }
}

/// One saved pass from the `/dvr/rules` listing
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    #[serde(rename = "ID")]
    pub id: String,

    /// Human-readable pass name
    #[serde(rename = "Name")]
    pub name: String,
}

/// Media info document for a recorded file
#[derive(Debug, Clone, Deserialize)]
pub struct MediaInfo {
    pub format: MediaFormat,
}

/// Container-level media info
#[derive(Debug, Clone, Deserialize)]
pub struct MediaFormat {
    /// On-disk path of the recorded file
    pub filename: String,
}
