//! Traits for feeding failures into an [`ErrorList`](crate::ErrorList).
//!
//! - [`IntoErrorList`]: conversion of error values into a list
//! - [`ResultExt`]: `.context()` / `.with_context()` on `Result`
//! - [`OptionExt`]: `.context()` on `Option`

pub mod into_error_list;
pub mod result_ext;

pub use into_error_list::IntoErrorList;
pub use result_ext::{OptionExt, ResultExt};
