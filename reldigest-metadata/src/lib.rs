// Copyright (c) The reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Release records and digest formatting for reldigest.

mod digest;
mod models;

pub use digest::*;
pub use models::*;
