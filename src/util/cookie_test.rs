use super::*;

#[test]
fn finds_cookie_among_several() {
    let raw = "theme=dark; csrftoken=abc123; sessionid=zzz";
    assert_eq!(find_cookie(raw, "csrftoken").as_deref(), Some("abc123"));
}

#[test]
fn finds_first_cookie_without_leading_separator() {
    assert_eq!(find_cookie("csrftoken=tok", "csrftoken").as_deref(), Some("tok"));
}

#[test]
fn does_not_match_name_suffix() {
    assert_eq!(find_cookie("xcsrftoken=bad", "csrftoken"), None);
}

#[test]
fn missing_or_empty_cookie_is_none() {
    assert_eq!(find_cookie("", "csrftoken"), None);
    assert_eq!(find_cookie("csrftoken=", "csrftoken"), None);
    assert_eq!(find_cookie("other=1", "csrftoken"), None);
}

#[test]
fn value_is_percent_decoded() {
    assert_eq!(find_cookie("csrftoken=a%20b%3Dc", "csrftoken").as_deref(), Some("a b=c"));
}

#[test]
fn value_keeps_equals_signs_after_the_first() {
    assert_eq!(find_cookie("csrftoken=a=b", "csrftoken").as_deref(), Some("a=b"));
}

#[test]
fn stray_percent_is_kept_verbatim() {
    assert_eq!(find_cookie("csrftoken=50%", "csrftoken").as_deref(), Some("50%"));
    assert_eq!(find_cookie("csrftoken=%zz", "csrftoken").as_deref(), Some("%zz"));
}

#[test]
fn read_returns_none_outside_browser() {
    assert_eq!(read("csrftoken"), None);
}
