// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// A required environment value is missing. Detected before any network call.
#[derive(Clone, Debug, Error)]
#[error("required environment variable {variable} is missing or empty")]
pub(crate) struct ConfigError {
    pub(crate) variable: &'static str,
}

/// Any failure during the paginated fetch. Terminal: the whole fetch is
/// abandoned with no partial results.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("GraphQL request failed")]
    Request(#[from] reqwest::Error),

    #[error("GraphQL query returned errors: {}", .0.join("; "))]
    Api(Vec<String>),

    #[error("malformed GraphQL response: {0}")]
    MalformedResponse(&'static str),
}
