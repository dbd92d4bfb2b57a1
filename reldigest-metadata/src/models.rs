// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// One published release of a repository, as returned by the GitHub GraphQL
/// API.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    /// The display name of the release, if one was set.
    pub name: Option<String>,

    /// The Git tag the release was published from.
    pub tag_name: String,

    /// Canonical URL for this release.
    pub url: String,

    /// ISO-8601 timestamp of publication, if the release is published.
    pub published_at: Option<String>,
}

/// One page of releases along with its pagination metadata.
#[derive(Clone, Debug, Deserialize)]
pub struct ReleasePage {
    /// The release records on this page, in server order
    /// (creation date, descending).
    pub nodes: Vec<ReleaseRecord>,

    /// Cursor metadata for the next request.
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// True if the server has more pages after this one.
    pub has_next_page: bool,

    /// Opaque cursor identifying where the next page starts.
    pub end_cursor: Option<String>,
}
