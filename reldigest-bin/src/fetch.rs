// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Paginated release fetch against the GitHub GraphQL API.

use crate::{config::Config, errors::FetchError};
use reldigest_metadata::{ReleasePage, ReleaseRecord};
use serde::Deserialize;
use std::future::Future;

const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("reldigest/", env!("CARGO_PKG_VERSION"));

const RELEASES_QUERY: &str = "\
query GetReleases($owner: String!, $repo: String!, $cursor: String) {
  repository(owner: $owner, name: $repo) {
    releases(first: 100, after: $cursor, orderBy: {field: CREATED_AT, direction: DESC}) {
      nodes {
        name
        tagName
        url
        publishedAt
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}";

/// Fetch the complete, in-order release list for the configured repository.
pub(crate) async fn fetch_all_releases(config: &Config) -> Result<Vec<ReleaseRecord>, FetchError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    collect_pages(|cursor| fetch_page(&client, config, cursor)).await
}

/// Fold cursor-paginated pages into one sequence, preserving server order.
///
/// Pages are strictly sequential: each request needs the cursor from the
/// previous response, so nothing here overlaps requests.
async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<ReleaseRecord>, FetchError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ReleasePage, FetchError>>,
{
    let mut releases = Vec::new();
    let mut cursor = None;

    loop {
        let page = fetch_page(cursor).await?;
        let fetched = page.nodes.len();
        releases.extend(page.nodes);
        eprintln!(
            "fetched {} releases, total so far: {}, has next page: {}",
            fetched,
            releases.len(),
            page.page_info.has_next_page
        );

        if !page.page_info.has_next_page {
            break;
        }
        cursor = Some(page.page_info.end_cursor.ok_or(FetchError::MalformedResponse(
            "pageInfo reports a next page but carries no endCursor",
        ))?);
    }

    Ok(releases)
}

async fn fetch_page(
    client: &reqwest::Client,
    config: &Config,
    cursor: Option<String>,
) -> Result<ReleasePage, FetchError> {
    let body = serde_json::json!({
        "query": RELEASES_QUERY,
        "variables": {
            "owner": config.owner,
            "repo": config.repo,
            "cursor": cursor,
        },
    });

    let response: GraphQlResponse = client
        .post(GRAPHQL_ENDPOINT)
        .bearer_auth(&config.token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if !response.errors.is_empty() {
        let messages = response.errors.into_iter().map(|e| e.message).collect();
        return Err(FetchError::Api(messages));
    }

    let repository = response
        .data
        .and_then(|data| data.repository)
        .ok_or(FetchError::MalformedResponse(
            "response data carries no repository",
        ))?;
    Ok(repository.releases)
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<QueryData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    repository: Option<RepositoryData>,
}

#[derive(Debug, Deserialize)]
struct RepositoryData {
    releases: ReleasePage,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}
