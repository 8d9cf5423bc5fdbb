//! # Gradebook Common
//!
//! Types shared by every layer of the workspace.
//!
//! * **[`project`]**: the [`project::Project`] record held by the store.
//! * **[`error`]**: the validation failures a store can report.
//! * **[`config`]**: runtime options collected from the command line.

pub mod config;
pub mod error;
pub mod project;
