use super::*;

#[test]
fn neutral_option_label_is_plain_text() {
    assert_eq!(option_label("4", OptionMark::Neutral), "4");
}

#[test]
fn correct_and_wrong_labels_get_glyphs() {
    assert_eq!(option_label("4", OptionMark::Correct), "4 \u{2713}");
    assert_eq!(option_label("3", OptionMark::Wrong), "3 \u{2717}");
}

#[test]
fn unverified_label_has_no_glyph() {
    assert_eq!(option_label("5", OptionMark::Unverified), "5");
}
