// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod command;
mod config;
mod errors;
mod fetch;
mod output;

pub use command::DigestApp;
