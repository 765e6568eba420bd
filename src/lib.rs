//! # Form Guide
//!
//! A local dashboard over historical international football results.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (matches, outcomes, summaries, selections)
//! - **storage**: Results CSV loading
//! - **filter**: The staged filter pipeline behind every view
//! - **calculate**: Outcome classification and aggregation
//! - **report**: Dashboard view assembly (narrative, chart series)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod filter;
pub mod models;
pub mod report;
pub mod storage;

pub use models::*;
