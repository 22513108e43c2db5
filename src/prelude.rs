//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_list::prelude::*;
//!
//! fn read_port(raw: &str) -> ListResult<u16> {
//!     raw.trim().parse::<u16>().context("reading port")
//! }
//!
//! assert_eq!(read_port(" 8080 ").unwrap(), 8080);
//! assert_eq!(read_port("x").unwrap_err().last(), "reading port");
//! ```

// Macros
pub use crate::{bail_list, error_list};

// Core types
pub use crate::types::{ErrorList, ListFormatConfig, ListResult, MessageFormatter};

// Traits
pub use crate::traits::{IntoErrorList, OptionExt, ResultExt};
