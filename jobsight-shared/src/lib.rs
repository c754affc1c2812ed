#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Shared wire models for the JobSight client.
//!
//! Everything the web client exchanges with the backend lives here, along
//! with the validation and classification logic that gates what the client
//! sends. Keeping these types free of any UI dependency lets the admission
//! rules run under plain `cargo test`.

pub mod models;
