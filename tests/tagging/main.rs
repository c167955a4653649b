//! Tagging Service Tests
//!
//! End-to-end tests through the public `metatag` crate:
//! - Tagger lifecycle and entry points
//! - Create/query scenarios and payload shape
//! - Concurrent callers sharing one service
//! - Configuration loaded from `metatag.toml`

mod common;

mod concurrency;
mod config;
mod scenarios;
