//! An ordered, append-only list of human-readable error messages.
//!
//! An [`ErrorList`] starts with one message and grows as a failure unwinds:
//! every layer appends what it was doing, nothing is ever discarded, and the
//! final holder renders the whole chain once.
//!
//! # Examples
//!
//! ## Accumulating Context
//!
//! ```
//! use error_list::ErrorList;
//!
//! let mut list = ErrorList::new("hello");
//! list.append("world").append("!!!");
//!
//! assert_eq!(list.count(), 3);
//! assert_eq!(list.get(1), Some("world"));
//! assert_eq!(list.render(), "[error]\n   - hello\n   - world\n   - !!!\n");
//! ```
//!
//! ## Custom Rendering
//!
//! ```
//! use error_list::{ErrorList, ListFormatConfig};
//!
//! let list = ErrorList::new("hello").with("world").with("!!!");
//!
//! assert_eq!(list.render_with(&ListFormatConfig::plain()), "hello\nworld\n!!!\n");
//! ```
//!
//! ## Along a Call Chain
//!
//! ```
//! use error_list::prelude::*;
//!
//! fn parse_timeout(raw: &str) -> ListResult<u64> {
//!     raw.parse::<u64>().context("parsing `timeout`")
//! }
//!
//! let err = parse_timeout("soon").context("loading config").unwrap_err();
//! assert_eq!(err.first(), "invalid digit found in string");
//! assert_eq!(err.last(), "loading config");
//! ```
//!
//! # Release
//!
//! A list owns its messages and frees them when it is dropped, on every exit
//! path of the scope that owns it. [`ErrorList::release`] and [`release`]
//! make that explicit where it helps readability.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros for building error lists
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversions and `Result`/`Option` extensions
pub mod traits;
/// ErrorList, its formatters and storage types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    release, AllocError, DefaultFormatter, ErrorList, ListFormatConfig, ListResult,
    MessageFormatter, Messages,
};

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
