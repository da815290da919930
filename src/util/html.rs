//! Plain-text previews of HTML post content, plus timestamp display.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Strip HTML tags, leaving only text content.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}

/// Plain-text excerpt of HTML content, ellipsized past `length` characters.
pub fn preview(html: &str, length: usize) -> String {
    let text = strip_tags(html);
    if text.chars().count() <= length {
        return text;
    }
    let cut: String = text.chars().take(length).collect();
    format!("{cut}...")
}

/// The date portion of an ISO-8601 timestamp from the backend.
pub fn date_only(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
