//! Lunchy — the friendly launchctl wrapper.
//!
//! Library crate behind the `lunchy` binary; exposes every layer for
//! integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
