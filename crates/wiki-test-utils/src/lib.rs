//! Shared test utilities for the wiki workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not each
//! rebuild a wiki root by hand. Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`wiki`]: [`TestWiki`](wiki::TestWiki) builder for an on-disk wiki root

pub mod wiki;

pub use wiki::TestWiki;
