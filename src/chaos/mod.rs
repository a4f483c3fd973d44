//! Simulate I/O failures in byte sources.
//!
//! This module provides tools for testing how code reacts when reading a
//! byte source goes wrong:
//!
//! - [`FailureInjector`] - Core trait for failure injection
//! - [`CountingInjector`] - Fail based on attempt count (first N, every Nth, after N)
//! - [`FaultySource`] - A [`ByteSource`](crate::source::ByteSource) whose opens
//!   and reads fail on demand
//!
//! # Example
//!
//! ```rust
//! use testkit_bytes::chaos::{CountingInjector, FaultySource};
//! use testkit_bytes::prelude::*;
//!
//! let faulty = FaultySource::new(source::wrap(vec![1]), CountingInjector::always());
//!
//! let err = assert_that(&faulty).has_size(1).unwrap_err();
//! assert!(err.is_injected());
//! ```

mod injector;
mod source;

pub use injector::{CountingInjector, FailureInjector, InjectorStats};
pub use source::FaultySource;
