//! Shared test utilities for the cfgtree workspace.
//!
//! This crate provides standardised configuration-tree fixtures so crate
//! test suites do not each hand-roll temp directories. It is a
//! dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`tree`]: the [`TestTree`](tree::TestTree) builder
//! - [`permissions`]: helpers for unreadable-file scenarios

pub mod permissions;
pub mod tree;

pub use tree::TestTree;
