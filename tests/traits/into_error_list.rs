use error_list::traits::IntoErrorList;
use error_list::{AllocError, ErrorList};

#[test]
fn test_string_types_become_first_message() {
    assert_eq!("disk full".into_error_list().first(), "disk full");
    assert_eq!(String::from("disk full").into_error_list().first(), "disk full");
    assert_eq!(Box::<str>::from("disk full").into_error_list().first(), "disk full");
}

#[test]
fn test_error_list_converts_to_itself() {
    let list = ErrorList::new("a").with("b");
    assert_eq!(list.clone().into_error_list(), list);
}

#[test]
fn test_display_errors_use_their_text() {
    let parse = "x".parse::<i32>().unwrap_err().into_error_list();
    assert_eq!(parse.first(), "invalid digit found in string");

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml not found");
    assert_eq!(io.into_error_list().first(), "config.toml not found");

    assert_eq!(AllocError::Storage.into_error_list().first(), "message storage could not grow");
}

#[test]
fn test_boxed_std_error_converts() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "opaque failure".into();
    assert_eq!(boxed.into_error_list().first(), "opaque failure");
}
