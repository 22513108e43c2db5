//! Error list types and utilities.
//!
//! # Examples
//!
//! ```
//! use error_list::ErrorList;
//!
//! let list = ErrorList::new("connection refused")
//!     .with("while fetching /health")
//!     .with("while starting worker 3");
//!
//! eprint!("{}", list);
//! // [error]
//! //    - connection refused
//! //    - while fetching /health
//! //    - while starting worker 3
//! ```
pub mod alloc_error;
pub mod alloc_type;
pub mod error_formatter;
pub mod error_list;
pub mod messages;

pub use alloc_error::AllocError;
pub use error_formatter::{DefaultFormatter, ListFormatConfig, MessageFormatter};
pub use error_list::{release, ErrorList, MessageVec};
pub use messages::{Iter, Messages};

/// Result alias whose failures are an [`ErrorList`].
pub type ListResult<T> = Result<T, ErrorList>;
