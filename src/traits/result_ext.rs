//! Extension trait for appending context to `Result` errors.
//!
//! [`ResultExt`] turns the error of a `Result` into an [`ErrorList`] (or
//! reuses the one already there) and appends one more message, so each layer
//! of a call chain can say what it was doing without a `.map_err()` closure.
//!
//! # Examples
//!
//! ```
//! use error_list::traits::ResultExt;
//! use error_list::ErrorList;
//!
//! fn parse_port(raw: &str) -> Result<u16, ErrorList> {
//!     raw.parse::<u16>().context("parsing `port`")
//! }
//!
//! fn load_config(raw: &str) -> Result<u16, ErrorList> {
//!     parse_port(raw).context("loading config")
//! }
//!
//! let err = load_config("eighty").unwrap_err();
//! assert_eq!(
//!     err.iter().collect::<Vec<_>>(),
//!     ["invalid digit found in string", "parsing `port`", "loading config"]
//! );
//! ```

use crate::traits::IntoErrorList;
use crate::types::ErrorList;

/// Extension trait for adding context to `Result` types ergonomically.
pub trait ResultExt<T> {
    /// Converts the error into an [`ErrorList`] and appends `message`.
    ///
    /// `Ok` values pass through untouched.
    fn context<C: AsRef<str>>(self, message: C) -> Result<T, ErrorList>;

    /// Like [`context`](ResultExt::context), but only builds the message when
    /// the `Result` is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_list::traits::ResultExt;
    ///
    /// let user_id = 42;
    /// let result: Result<(), &str> = Err("not found");
    /// let err = result.with_context(|| format!("loading user {user_id}")).unwrap_err();
    ///
    /// assert_eq!(err.last(), "loading user 42");
    /// ```
    fn with_context<F, C>(self, f: F) -> Result<T, ErrorList>
    where
        F: FnOnce() -> C,
        C: AsRef<str>;
}

impl<T, E: IntoErrorList> ResultExt<T> for Result<T, E> {
    #[inline]
    fn context<C: AsRef<str>>(self, message: C) -> Result<T, ErrorList> {
        self.map_err(|e| e.into_error_list().with(message))
    }

    #[inline]
    fn with_context<F, C>(self, f: F) -> Result<T, ErrorList>
    where
        F: FnOnce() -> C,
        C: AsRef<str>,
    {
        self.map_err(|e| e.into_error_list().with(f()))
    }
}

/// Extension trait for turning a missing `Option` value into an [`ErrorList`].
pub trait OptionExt<T> {
    /// Returns the value, or a new list holding `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_list::traits::OptionExt;
    ///
    /// let port: Option<u16> = None;
    /// let err = port.context("missing field `port`").unwrap_err();
    /// assert_eq!(err.first(), "missing field `port`");
    /// ```
    fn context<C: AsRef<str>>(self, message: C) -> Result<T, ErrorList>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn context<C: AsRef<str>>(self, message: C) -> Result<T, ErrorList> {
        self.ok_or_else(|| ErrorList::new(message.as_ref()))
    }
}
