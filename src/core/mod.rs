// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout msgsplit.
//!
//! - [`SplitError`] - Error handling for the splitting pipeline
//! - [`Result`] - Result alias over [`SplitError`]

pub mod error;

pub use error::{Result, SplitError};
