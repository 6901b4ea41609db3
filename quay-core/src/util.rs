/// Largest prefix of `text` no longer than `limit` bytes that ends on a
/// character boundary.
pub fn clip_text(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Clips long statement text when formatting it for logs and errors.
#[macro_export]
macro_rules! truncate_long {
    ($text:expr) => {
        format_args!(
            "{}{}",
            $crate::clip_text($text.as_ref(), 256).trim_end(),
            if $text.len() > 256 { "..." } else { "" },
        )
    };
}
