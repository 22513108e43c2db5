use std::fmt;

use error_list::traits::ResultExt;
use error_list::{bail_list, error_list, impl_into_error_list, ErrorList};

#[derive(Debug)]
struct Timeout(u32);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.0)
    }
}

impl_into_error_list!(Timeout);

#[test]
fn test_error_list_macro_formats_first_message() {
    let worker = 3;
    let list = error_list!("worker {} stopped", worker);

    assert_eq!(list.count(), 1);
    assert_eq!(list.first(), "worker 3 stopped");
}

#[test]
fn test_error_list_macro_inline_args() {
    let field = "port";
    let list = error_list!("missing field `{field}`");

    assert_eq!(list.first(), "missing field `port`");
}

#[test]
fn test_bail_list_returns_early() {
    fn check(value: i32) -> Result<i32, ErrorList> {
        if value < 0 {
            bail_list!("negative value: {}", value);
        }
        Ok(value)
    }

    assert_eq!(check(5).unwrap(), 5);
    assert_eq!(check(-1).unwrap_err().render(), "[error]\n   - negative value: -1\n");
}

#[test]
fn test_bail_list_converts_into_boxed_error() {
    fn check() -> Result<(), Box<dyn std::error::Error>> {
        bail_list!("not ready");
    }

    assert_eq!(check().unwrap_err().to_string(), "[error]\n   - not ready\n");
}

#[test]
fn test_impl_into_error_list_enables_context() {
    let result: Result<(), Timeout> = Err(Timeout(250));
    let err = result.context("calling upstream").unwrap_err();

    assert_eq!(err.iter().collect::<Vec<_>>(), ["timed out after 250ms", "calling upstream"]);
}
