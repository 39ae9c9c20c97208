//! # linkmap-error
//!
//! Unified error handling for linkmap.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong (e.g. `NoMatchingPrefix`, `UnknownKind`)
//! - **Error Context**: operation name plus key/value pairs locating the cause
//! - **Error Source**: the wrapped underlying error, if any
//!
//! Every failure in the pipeline is fatal. There is no retry classification:
//! a run either renders a complete graph or reports one of these errors.
//!
//! ## Usage
//!
//! ```rust
//! use linkmap_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::UnknownKind, "no shape for kind")
//!         .with_operation("classify::shape_for_kind")
//!         .with_context("kind", "widget"))
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using linkmap Error
pub type Result<T> = std::result::Result<T, Error>;
