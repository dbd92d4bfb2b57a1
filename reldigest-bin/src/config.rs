// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run configuration, read from the environment set by the workflow.

use crate::errors::ConfigError;

pub(crate) const OWNER_VAR: &str = "REPO_OWNER";
pub(crate) const REPO_VAR: &str = "REPO_NAME";
pub(crate) const TOKEN_VAR: &str = "GH_TOKEN";

#[derive(Clone, Debug)]
pub(crate) struct Config {
    /// Repository owner or organization login.
    pub(crate) owner: String,

    /// Repository name.
    pub(crate) repo: String,

    /// Bearer credential for the GraphQL API.
    pub(crate) token: String,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| std::env::var(variable).ok())
    }

    /// Build a config from an arbitrary lookup function, so tests never
    /// mutate the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            owner: require(&lookup, OWNER_VAR)?,
            repo: require(&lookup, REPO_VAR)?,
            token: require(&lookup, TOKEN_VAR)?,
        })
    }

    pub(crate) fn repo_full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
) -> Result<String, ConfigError> {
    match lookup(variable) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError { variable }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |variable| map.get(variable).cloned()
    }

    #[test]
    fn all_present_succeeds() {
        let lookup = lookup_from(&[
            (OWNER_VAR, "owner"),
            (REPO_VAR, "repo"),
            (TOKEN_VAR, "ghp_secret"),
        ]);
        let config = Config::from_lookup(lookup).expect("config is valid");
        assert_eq!(config.owner, "owner");
        assert_eq!(config.repo, "repo");
        assert_eq!(config.token, "ghp_secret");
        assert_eq!(config.repo_full_name(), "owner/repo");
    }

    #[test]
    fn each_missing_variable_is_named() {
        for missing in [OWNER_VAR, REPO_VAR, TOKEN_VAR] {
            let pairs: Vec<(&str, &str)> = [OWNER_VAR, REPO_VAR, TOKEN_VAR]
                .into_iter()
                .filter(|v| *v != missing)
                .map(|v| (v, "value"))
                .collect();
            let error = Config::from_lookup(lookup_from(&pairs))
                .expect_err("missing variable must fail");
            assert_eq!(error.variable, missing);
        }
    }

    #[test]
    fn empty_value_is_rejected() {
        let lookup = lookup_from(&[
            (OWNER_VAR, "owner"),
            (REPO_VAR, ""),
            (TOKEN_VAR, "ghp_secret"),
        ]);
        let error = Config::from_lookup(lookup).expect_err("empty value must fail");
        assert_eq!(error.variable, REPO_VAR);
    }
}
