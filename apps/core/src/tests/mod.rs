//! Test Module
//!
//! Cross-module test suite for the Echosphere core.
//!
//! ## Test Categories
//! - `scorer_tests`: scoring properties over whole texts
//! - `risk_tests`: aggregation properties, including permutation invariance
//! - `monitor_tests`: brand reports end to end
//! - `integration_tests`: configuration-driven backend setup against a mock endpoint

pub mod monitor_tests;
pub mod risk_tests;
pub mod scorer_tests;
