//! Deterministic RICE prioritization engine for product backlogs.
//!
//! The crate is split into a pure scoring core ([`backlog`]) and the ambient
//! service plumbing (configuration, telemetry, application errors) shared by
//! whatever surface hosts it. The core holds no state between calls; every
//! ranking request is a pure function of its inputs.

pub mod backlog;
pub mod config;
pub mod error;
pub mod telemetry;
