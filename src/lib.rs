//! Pac-Man arcade resource library: embedded assets decoded into typed bundles.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod audio;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod logging;

pub mod asset;
pub mod bundle;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod texture;
