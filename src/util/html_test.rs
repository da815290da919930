use super::*;

// =============================================================
// strip_tags
// =============================================================

#[test]
fn strip_tags_removes_simple_markup() {
    assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
}

#[test]
fn strip_tags_passes_plain_text_through() {
    assert_eq!(strip_tags("no markup here"), "no markup here");
}

#[test]
fn strip_tags_handles_attributes() {
    assert_eq!(
        strip_tags(r#"<a href="/posts/1" class="link">read</a> more"#),
        "read more"
    );
}

#[test]
fn strip_tags_handles_unclosed_tag() {
    assert_eq!(strip_tags("text <img src='x"), "text ");
}

// =============================================================
// preview
// =============================================================

#[test]
fn preview_returns_short_text_unchanged() {
    assert_eq!(preview("<p>short</p>", 150), "short");
}

#[test]
fn preview_truncates_with_ellipsis() {
    assert_eq!(preview("<p>abcdefghij</p>", 4), "abcd...");
}

#[test]
fn preview_counts_characters_not_bytes() {
    assert_eq!(preview("ééééé", 3), "ééé...");
}

// =============================================================
// date_only
// =============================================================

#[test]
fn date_only_drops_time_component() {
    assert_eq!(date_only("2025-06-01T09:00:00"), "2025-06-01");
}

#[test]
fn date_only_passes_dateless_values_through() {
    assert_eq!(date_only("2025-06-01"), "2025-06-01");
}
