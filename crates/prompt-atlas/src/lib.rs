//! Prompt catalog browsing and heuristic prompt quality scoring.

pub mod catalog;
pub mod config;
pub mod error;
pub mod guidance;
pub mod quality;
pub mod telemetry;
