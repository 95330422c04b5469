//! Core engine for relnotes operations
//!
//! This module contains the building blocks for one synchronization run:
//!
//! - **changelog**: changelog segmentation (newest version entry extraction)
//! - **config**: configuration resolution (CLI/env over relnotes.toml over defaults)
//! - **error**: error types with exit codes and contextual help messages
//! - **fsio**: UTF-8 file read/write collaborators
//! - **merge**: idempotent release-notes splicing
//! - **sync**: plan/apply orchestration for a single run

pub mod changelog;
pub mod config;
pub mod error;
pub mod fsio;
pub mod merge;
pub mod sync;
