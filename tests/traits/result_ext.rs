use error_list::traits::{OptionExt, ResultExt};
use error_list::ErrorList;

fn parse_port(raw: &str) -> Result<u16, ErrorList> {
    raw.parse::<u16>().context("parsing `port`")
}

fn load_config(raw: &str) -> Result<u16, ErrorList> {
    parse_port(raw).context("loading config")
}

#[test]
fn test_context_converts_error_and_appends() {
    let result: Result<(), &str> = Err("failed");
    let err = result.context("performing operation").unwrap_err();

    assert_eq!(err.iter().collect::<Vec<_>>(), ["failed", "performing operation"]);
}

#[test]
fn test_context_passes_ok_through() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.context("unused").unwrap(), 42);
}

#[test]
fn test_context_accumulates_on_existing_list() {
    let err = load_config("eighty").unwrap_err();

    assert_eq!(
        err.render(),
        "[error]\n   - invalid digit found in string\n   - parsing `port`\n   - loading config\n"
    );
}

#[test]
fn test_with_context_is_lazy() {
    let mut called = false;
    let ok: Result<i32, &str> = Ok(1);
    let _ = ok.with_context(|| {
        called = true;
        "never built"
    });
    assert!(!called);

    let err: Result<i32, String> = Err("boom".to_string());
    let list = err.with_context(|| format!("attempt {}", 3)).unwrap_err();
    assert_eq!(list.last(), "attempt 3");
}

#[test]
fn test_option_context_creates_list() {
    let value: Option<u16> = None;
    let err = value.context("missing field `port`").unwrap_err();

    assert_eq!(err.count(), 1);
    assert_eq!(err.first(), "missing field `port`");
    assert_eq!(Some(7).context("unused").unwrap(), 7);
}

#[test]
fn test_option_then_result_context_chain() {
    fn lookup(key: &str) -> Result<&'static str, ErrorList> {
        let value: Option<&'static str> = None;
        value
            .context(format!("missing field `{key}`"))
            .context("while parsing server section")
            .context("while parsing config")
    }

    let err = lookup("port").unwrap_err();
    assert_eq!(err.count(), 3);
    assert_eq!(err.first(), "missing field `port`");
    assert_eq!(err.last(), "while parsing config");
}
