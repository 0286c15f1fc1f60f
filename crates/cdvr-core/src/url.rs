//! URL helpers for the Channels DVR HTTP API
//!
//! Builds the base server URL and the endpoint URLs used by the lookup.

/// Default host for a locally running Channels DVR server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port of the Channels DVR web server
pub const DEFAULT_PORT: u16 = 8089;

/// Builds the base URL of a Channels DVR server
///
/// # Example
/// ```
/// use cdvr_core::url::build_base_url;
/// let url = build_base_url("127.0.0.1", 8089);
/// assert_eq!(url, "http://127.0.0.1:8089");
/// ```
pub fn build_base_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}

/// Builds the URL of the scheduled-recordings listing
///
/// # Example
/// ```
/// use cdvr_core::url::build_jobs_url;
/// let url = build_jobs_url("http://127.0.0.1:8089");
/// assert_eq!(url, "http://127.0.0.1:8089/dvr/jobs");
/// ```
pub fn build_jobs_url(base_url: &str) -> String {
    format!("{}/dvr/jobs", base_url)
}

/// Builds the URL of the library (recorded files) listing
///
/// # Example
/// ```
/// use cdvr_core::url::build_files_url;
/// let url = build_files_url("http://127.0.0.1:8089");
/// assert_eq!(url, "http://127.0.0.1:8089/dvr/files");
/// ```
pub fn build_files_url(base_url: &str) -> String {
    format!("{}/dvr/files", base_url)
}

/// Builds the URL of the pass (recording rule) listing
///
/// # Example
/// ```
/// use cdvr_core::url::build_rules_url;
/// let url = build_rules_url("http://127.0.0.1:8089");
/// assert_eq!(url, "http://127.0.0.1:8089/dvr/rules");
/// ```
pub fn build_rules_url(base_url: &str) -> String {
    format!("{}/dvr/rules", base_url)
}

/// Builds the media-info URL for a recorded file
///
/// # Arguments
/// * `base_url` - Base server URL (e.g., "http://127.0.0.1:8089")
/// * `file_id` - ID of the recorded file
///
/// # Example
/// ```
/// use cdvr_core::url::build_mediainfo_url;
/// let url = build_mediainfo_url("http://127.0.0.1:8089", "901");
/// assert_eq!(url, "http://127.0.0.1:8089/dvr/files/901/mediainfo.json");
/// ```
pub fn build_mediainfo_url(base_url: &str, file_id: &str) -> String {
    format!("{}/dvr/files/{}/mediainfo.json", base_url, file_id)
}
