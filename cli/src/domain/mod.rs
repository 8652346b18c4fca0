//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod action;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod profile;
pub mod status;

pub use action::{ActionOutcome, BatchSummary, ControlVerb, LifecycleAction};
pub use config::LunchyConfig;
pub use descriptor::{Catalog, ServiceDescriptor, descriptor_path};
pub use error::LunchyError;
