//! Ergonomic macros for building an [`ErrorList`](crate::ErrorList).
//!
//! - [`macro@crate::error_list`] - Creates a list from a formatted first message.
//! - [`macro@crate::bail_list`] - Returns early with such a list as the error.
//! - [`macro@crate::impl_into_error_list`] - Lets `Display` types convert into a list.
//!
//! # Examples
//!
//! ```
//! use error_list::{bail_list, error_list, ErrorList};
//!
//! fn check_port(port: u32) -> Result<u16, ErrorList> {
//!     if port > u32::from(u16::MAX) {
//!         bail_list!("port {} is out of range", port);
//!     }
//!     Ok(port as u16)
//! }
//!
//! let list = error_list!("worker {} stopped", 3);
//! assert_eq!(list.first(), "worker 3 stopped");
//! assert_eq!(check_port(70_000).unwrap_err().first(), "port 70000 is out of range");
//! ```

/// Creates an [`ErrorList`](crate::ErrorList) whose first message is built
/// with `format!` syntax.
///
/// # Examples
///
/// ```
/// use error_list::error_list;
///
/// let field = "port";
/// let list = error_list!("missing field `{}`", field);
///
/// assert_eq!(list.count(), 1);
/// assert_eq!(list.first(), "missing field `port`");
/// ```
#[macro_export]
macro_rules! error_list {
    ($($arg:tt)*) => {
        $crate::ErrorList::new($crate::__private::format!($($arg)*))
    };
}

/// Returns early with `Err` holding a new [`ErrorList`](crate::ErrorList).
///
/// The list is converted with `Into`, so the enclosing function may return
/// any error type an `ErrorList` converts into.
///
/// # Examples
///
/// ```
/// use error_list::{bail_list, ErrorList};
///
/// fn open(path: &str) -> Result<(), ErrorList> {
///     if path.is_empty() {
///         bail_list!("empty path");
///     }
///     Ok(())
/// }
///
/// assert_eq!(open("").unwrap_err().render(), "[error]\n   - empty path\n");
/// ```
#[macro_export]
macro_rules! bail_list {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err(::core::convert::Into::into($crate::error_list!($($arg)*)))
    };
}

/// Implements [`IntoErrorList`](crate::traits::IntoErrorList) for types that
/// implement `Display`, using their display text as the first message.
///
/// # Examples
///
/// ```
/// use error_list::impl_into_error_list;
/// use error_list::traits::ResultExt;
///
/// #[derive(Debug)]
/// struct Timeout(u32);
///
/// impl std::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "timed out after {}ms", self.0)
///     }
/// }
///
/// impl_into_error_list!(Timeout);
///
/// let result: Result<(), Timeout> = Err(Timeout(250));
/// let err = result.context("calling upstream").unwrap_err();
/// assert_eq!(err.first(), "timed out after 250ms");
/// ```
#[macro_export]
macro_rules! impl_into_error_list {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::IntoErrorList for $type {
                fn into_error_list(self) -> $crate::ErrorList {
                    $crate::ErrorList::new($crate::types::alloc_type::ToString::to_string(&self))
                }
            }
        )+
    };
}
