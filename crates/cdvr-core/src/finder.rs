//! High-level pass lookup API
//!
//! Combines the HTTP client with the match filter to answer the one
//! question this crate exists for: which pass triggered a recording.

use crate::client::{ClientConfig, DvrClient};
use crate::error::{DvrError, Result};
use crate::matcher::{filter_matches, Criteria};
use crate::types::Recording;

/// Which server listing a match came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Upcoming recording from `/dvr/jobs`
    Scheduled,
    /// Already recorded program from `/dvr/files`
    Library,
}

/// One program that matched the search criteria
#[derive(Debug, Clone)]
pub struct ProgramMatch {
    /// Listing the program was found in
    pub source: Source,
    /// The matching server record
    pub recording: Recording,
    /// Name of the pass that scheduled it, when one could be resolved
    pub pass_name: Option<String>,
    /// On-disk file name, for programs already recorded
    pub file_name: Option<String>,
}

/// Pass lookup against one Channels DVR server
///
/// # Example
/// ```no_run
/// # async fn example() -> cdvr_core::Result<()> {
/// use cdvr_core::{Criteria, PassFinder};
///
/// let finder = PassFinder::new("http://127.0.0.1:8089")?;
/// let criteria = Criteria::new("Nature").season(2).episode(3);
/// for matched in finder.find(&criteria).await? {
///     match matched.pass_name {
///         Some(name) => println!("triggered by pass: {}", name),
///         None => println!("no pass found"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct PassFinder {
    client: DvrClient,
}

impl PassFinder {
    /// Create a finder for the given server base URL
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = DvrClient::new(base_url)?;
        Ok(Self { client })
    }

    /// Create a finder with custom client configuration
    pub fn with_config(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = DvrClient::with_config(base_url, config)?;
        Ok(Self { client })
    }

    /// Base URL of the server being queried
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Find every scheduled or recorded program matching the criteria
    /// and resolve the pass that triggered each one.
    ///
    /// Returns an empty list when nothing matches; the pass listing is
    /// only fetched once at least one match exists.
    ///
    /// # Errors
    /// - `InvalidQuery` if the criteria title is empty or whitespace
    /// - `Connection` if the server cannot be reached
    /// - `Status` / `Shape` if a listing response is unusable
    pub async fn find(&self, criteria: &Criteria) -> Result<Vec<ProgramMatch>> {
        if criteria.title.trim().is_empty() {
            return Err(DvrError::InvalidQuery(
                "title cannot be empty".to_string(),
            ));
        }

        let scheduled = filter_matches(criteria, self.client.scheduled_recordings().await?);
        let library = filter_matches(criteria, self.client.library_recordings().await?);

        if scheduled.is_empty() && library.is_empty() {
            return Ok(Vec::new());
        }

        let passes = self.client.passes().await?;

        let mut matches = Vec::with_capacity(scheduled.len() + library.len());
        for (source, recordings) in [(Source::Scheduled, scheduled), (Source::Library, library)] {
            for recording in recordings {
                let pass_name = recording
                    .rule_id
                    .as_ref()
                    .and_then(|rule_id| passes.get(rule_id).cloned());
                let file_name = self.resolve_file_name(&recording).await?;

                matches.push(ProgramMatch {
                    source,
                    recording,
                    pass_name,
                    file_name,
                });
            }
        }

        Ok(matches)
    }

    /// Look up the recorded file name for a match, when it has one.
    ///
    /// Only programs whose record carries no `FileID` and whose own ID
    /// is a plain file ID (no dash) have a media info document. A
    /// missing or malformed document degrades to no file name; the
    /// file name is decoration, not the answer.
    async fn resolve_file_name(&self, recording: &Recording) -> Result<Option<String>> {
        if recording.file_id.is_some() || recording.id.contains('-') {
            return Ok(None);
        }

        match self.client.recorded_file_name(&recording.id).await {
            Ok(file_name) => Ok(Some(file_name)),
            Err(DvrError::Status { .. } | DvrError::Shape { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
