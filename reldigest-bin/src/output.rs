// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Write the digest message to the output file.

use atomicwrites::{AtomicFile, OverwriteBehavior};
use camino::Utf8Path;
use color_eyre::eyre::{Result, WrapErr};
use std::io::Write;

/// Write `message` to `path`, replacing any previous content. The write is
/// atomic, so the downstream step never reads a torn file.
pub(crate) fn write_message(path: &Utf8Path, message: &str) -> Result<()> {
    let file = AtomicFile::new(path, OverwriteBehavior::AllowOverwrite);
    file.write(|f| f.write_all(message.as_bytes()))
        .wrap_err_with(|| format!("failed to write digest message to {}", path))?;

    Ok(())
}
