//! Conversion of failure values into an [`ErrorList`].
//!
//! A converted error becomes the first message of a new list; an
//! [`ErrorList`] converts to itself, so context keeps accumulating on the
//! same list instead of being wrapped into a fresh one.
//!
//! # Examples
//!
//! ```
//! use error_list::traits::IntoErrorList;
//! use error_list::ErrorList;
//!
//! let from_str = "disk full".into_error_list();
//! let from_parse = "x1".parse::<u8>().unwrap_err().into_error_list();
//! let existing = ErrorList::new("a").with("b").into_error_list();
//!
//! assert_eq!(from_str.first(), "disk full");
//! assert_eq!(from_parse.first(), "invalid digit found in string");
//! assert_eq!(existing.count(), 2);
//! ```
use crate::types::alloc_type::{Box, String};
use crate::types::ErrorList;

/// Converts a type into an [`ErrorList`].
///
/// Types that implement `Display` can opt in with
/// [`impl_into_error_list!`](crate::impl_into_error_list), which uses their
/// display text as the first message.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into an error list",
    label = "this type does not implement `IntoErrorList`",
    note = "implement `IntoErrorList` manually or use `impl_into_error_list!({Self})`"
)]
pub trait IntoErrorList {
    fn into_error_list(self) -> ErrorList;
}

impl IntoErrorList for ErrorList {
    #[inline]
    fn into_error_list(self) -> ErrorList {
        self
    }
}

impl IntoErrorList for String {
    #[inline]
    fn into_error_list(self) -> ErrorList {
        ErrorList::new(self)
    }
}

impl IntoErrorList for &str {
    #[inline]
    fn into_error_list(self) -> ErrorList {
        ErrorList::new(self)
    }
}

impl IntoErrorList for Box<str> {
    #[inline]
    fn into_error_list(self) -> ErrorList {
        ErrorList::new(String::from(self))
    }
}

#[cfg(feature = "std")]
impl IntoErrorList for Box<dyn std::error::Error + Send + Sync> {
    #[inline]
    fn into_error_list(self) -> ErrorList {
        ErrorList::new(self.to_string())
    }
}

crate::impl_into_error_list!(
    core::fmt::Error,
    core::num::ParseIntError,
    core::num::ParseFloatError,
    core::num::TryFromIntError,
    core::str::ParseBoolError,
    core::str::Utf8Error,
    core::char::ParseCharError,
    crate::types::AllocError,
);

#[cfg(feature = "std")]
crate::impl_into_error_list!(std::io::Error, std::string::FromUtf8Error);
