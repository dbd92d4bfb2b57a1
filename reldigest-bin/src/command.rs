// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{config::Config, fetch::fetch_all_releases, output::write_message};
use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use reldigest_metadata::{format_digest, ERROR_DIGEST};

#[doc(hidden)]
#[derive(Debug, Parser)]
#[clap(version)]
pub struct DigestApp {
    /// File to write the digest message to
    #[clap(long, default_value = "telegram-message.txt")]
    output: Utf8PathBuf,
}

impl DigestApp {
    pub async fn exec(self) -> Result<()> {
        let outcome = build_digest().await;
        self.finish(outcome)
    }

    /// Write the run's outcome to the output file. The file always exists
    /// after a run: either the digest, or the fixed error message.
    fn finish(self, outcome: Result<String>) -> Result<()> {
        match outcome {
            Ok(message) => {
                write_message(&self.output, &message)?;
                eprintln!("digest message saved to {}", self.output);
                Ok(())
            }
            Err(error) => {
                // Diagnostic detail goes to stderr, not into the posted
                // message.
                if let Err(write_error) = write_message(&self.output, ERROR_DIGEST) {
                    eprintln!("failed to write error digest: {:#}", write_error);
                }
                Err(error)
            }
        }
    }
}

async fn build_digest() -> Result<String> {
    let config =
        Config::from_env().wrap_err("failed to load configuration from the environment")?;
    let repo_full_name = config.repo_full_name();
    eprintln!("fetching releases for {} using GraphQL", repo_full_name);

    let releases = fetch_all_releases(&config)
        .await
        .wrap_err_with(|| format!("failed to fetch releases for {}", repo_full_name))?;
    eprintln!("found a total of {} releases", releases.len());

    Ok(format_digest(&repo_full_name, &releases))
}
