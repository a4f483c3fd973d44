//! # testkit-bytes 🧰
//!
//! > Fluent assertions for byte sources
//!
//! **testkit-bytes** checks the content, emptiness and size of re-openable
//! byte containers with a chainable, readable API.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_bytes::prelude::*;
//!
//! # fn main() -> testkit_bytes::Result<()> {
//! let actual = source::wrap(vec![0u8; 1]);
//! let other = source::wrap(vec![0u8; 1]);
//!
//! assert_that(&actual)
//!     .has_size(1)?
//!     .has_same_content_as(&other)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - 📦 **Byte Sources** - In-memory, file, slice and concatenated sources
//! - 🔍 **Fluent Assertions** - Content, emptiness and size checks
//! - 📝 **Readable Failures** - Descriptions, overrides and configurable layout
//! - 💥 **Failure Injection** - Sources whose reads fail on demand

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod chaos;
pub mod error;
pub mod source;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_bytes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::{
        assert_that, assert_that_option, AbstractAssert, ByteSourceAssert, Configuration,
    };
    pub use crate::error::{Error, Result};
    pub use crate::source::{self, ByteSource, WrappedBytes};
}

// Re-exports
pub use assertions::{assert_that, assert_that_option};
pub use error::{Error, Result};
