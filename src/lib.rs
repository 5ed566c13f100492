//! Workspace-level test and demo package. The real library lives in
//! `crates/core`; this shim re-exports it for the integration tests and
//! demos that sit at the repository root.

pub use evalscope_core::*;
