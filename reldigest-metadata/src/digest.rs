// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render a release list into a Telegram-flavored Markdown digest.

use crate::ReleaseRecord;

/// Fixed message written to the output file when a run fails. Deliberately
/// generic: the file is posted to a channel, so raw error detail stays on
/// stderr.
pub const ERROR_DIGEST: &str = "*ERROR:* Failed to fetch releases using GraphQL. \
     Please check the repository owner/name and workflow permissions.";

/// Format the complete digest message for a repository's releases.
///
/// Pure and infallible: identical input always produces byte-identical
/// output. Records are rendered one line each, in input order.
pub fn format_digest(repo_full_name: &str, releases: &[ReleaseRecord]) -> String {
    if releases.is_empty() {
        return format!("*INFO: No releases found for {}*", repo_full_name);
    }

    let header = format!(
        "*🚀 All {} Releases for {}*\n\n",
        releases.len(),
        repo_full_name
    );
    let lines: Vec<String> = releases.iter().map(render_release).collect();
    format!("{}{}", header, lines.join("\n"))
}

fn render_release(release: &ReleaseRecord) -> String {
    let name = match &release.name {
        Some(name) if !name.is_empty() => name.as_str(),
        _ => "Untitled Release",
    };
    // Calendar-date portion of the ISO-8601 timestamp.
    let date = match &release.published_at {
        Some(timestamp) if !timestamp.is_empty() => {
            timestamp.get(..10).unwrap_or(timestamp.as_str())
        }
        _ => "N/A",
    };

    format!(
        "*-* [{} ({})]({}) - _Published on {}_",
        name, release.tag_name, release.url, date
    )
}
