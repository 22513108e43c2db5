use error_list::{release, ErrorList, ListFormatConfig};


#[test]
fn test_error_list_accumulates_context_in_order() {
    let list = ErrorList::new("missing field x")
        .with("while parsing server section")
        .with("while parsing config");

    assert_eq!(list.count(), 3);
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        ["missing field x", "while parsing server section", "while parsing config"]
    );
}

#[test]
fn test_default_and_plain_rendering_agree_on_content() {
    let list = ErrorList::new("hello").with("world").with("!!!");

    assert_eq!(list.render(), "[error]\n   - hello\n   - world\n   - !!!\n");
    assert_eq!(list.render_with(&ListFormatConfig::plain()), "hello\nworld\n!!!\n");
}

#[test]
fn test_scoped_list_is_released_on_early_return() {
    fn first_invalid(values: &[&str]) -> Option<String> {
        let mut list = ErrorList::new("validating values");
        for value in values {
            if value.parse::<i32>().is_err() {
                list.append(format!("`{value}` is not a number"));
                return Some(list.last().to_string());
            }
        }
        None
    }

    assert_eq!(first_invalid(&["1", "x", "y"]), Some("`x` is not a number".to_string()));
    assert_eq!(first_invalid(&["1", "2"]), None);
}

#[test]
fn test_release_through_slot_clears_it() {
    let mut slot = Some(ErrorList::new("boom"));
    release(&mut slot);
    assert!(slot.is_none());
}
