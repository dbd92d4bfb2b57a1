// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A simple script to fetch every release of a GitHub repository and write a
//! Telegram-ready digest message for the next workflow step to post.

use clap::Parser;
use color_eyre::Result;
use reldigest_bin::DigestApp;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let app = DigestApp::parse();
    app.exec().await
}
