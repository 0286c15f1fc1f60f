//! Report rendering for matched programs
//!
//! Formats the lookup result the way the server's users expect it:
//! matches grouped into scheduled and library sections, one line per
//! program naming the pass (or the import/manual origin) plus the
//! recorded file name or the local airing time.

use cdvr_core::{ProgramMatch, Source};
use chrono::Local;

/// Categories whose matches get an S/E suffix after the title
const EPISODIC_CATEGORIES: [&str; 3] = ["Episode", "Show", "Series"];

/// Render all matches into the final report text
pub fn render(matches: &[ProgramMatch]) -> String {
    let mut out = String::new();

    let scheduled: Vec<&ProgramMatch> = matches
        .iter()
        .filter(|m| m.source == Source::Scheduled)
        .collect();
    let library: Vec<&ProgramMatch> = matches
        .iter()
        .filter(|m| m.source == Source::Library)
        .collect();

    if !scheduled.is_empty() {
        out.push_str("|----------------------|\n");
        out.push_str("| Scheduled recordings |\n");
        out.push_str("|----------------------|\n\n");
        for matched in &scheduled {
            out.push_str(&render_program(matched));
            out.push('\n');
        }
    }

    if !library.is_empty() {
        out.push_str("|-------------------|\n");
        out.push_str("| Library programs  |\n");
        out.push_str("|-------------------|\n\n");
        for matched in &library {
            out.push_str(&render_program(matched));
            out.push('\n');
        }
    }

    out
}

/// One program's report lines
fn render_program(matched: &ProgramMatch) -> String {
    let recording = &matched.recording;
    let airing = &recording.airing;

    let mut text = format!(" - {} \"{}\" ", recording.category(), airing.title);

    if EPISODIC_CATEGORIES.contains(&recording.category()) {
        if let Some(season) = airing.season_number {
            text.push_str(&format!("S{}", season));
        }
        if let Some(episode) = airing.episode_number {
            text.push_str(&format!("E{}", episode));
            text.push(' ');
        }
    }

    if recording.is_imported() {
        text.push_str("is an import:\n");
        if let Some(file_name) = &matched.file_name {
            text.push_str(&format!("    \"{}\"\n", file_name));
        }
    } else if recording.is_manual() {
        text.push_str("is a manual recording.\n");
        text.push_str(&render_location(matched));
    } else {
        let pass_name = matched.pass_name.as_deref().unwrap_or("nothing found!");
        text.push_str(&format!("triggered by pass: \"{}\"\n", pass_name));
        text.push_str(&render_location(matched));
    }

    text
}

/// File name for recorded programs, local airing time for scheduled
/// ones; empty when neither is known.
fn render_location(matched: &ProgramMatch) -> String {
    if let Some(file_name) = &matched.file_name {
        return format!("    \"{}\"\n", file_name);
    }

    if let Some(start) = matched.recording.start_time() {
        if let Some(local) = format_start_time(start) {
            return format!("   will be recorded on {}\n", local);
        }
    }

    String::new()
}

/// Convert a UTC guide time like "2023-06-24T15:00Z" into a local
/// timestamp like "Saturday, June 24, 2023 11:00:00 AM".
fn format_start_time(utc: &str) -> Option<String> {
    let naive = chrono::NaiveDateTime::parse_from_str(utc, "%Y-%m-%dT%H:%MZ").ok()?;
    let local = naive.and_utc().with_timezone(&Local);
    Some(local.format("%A, %B %d, %Y %I:%M:%S %p").to_string())
}
