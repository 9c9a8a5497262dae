//! Consolidated test utilities for gitcoach
//!
//! Provides unified helpers for integration tests, focused on real git
//! repository scenarios.

pub mod repository;
