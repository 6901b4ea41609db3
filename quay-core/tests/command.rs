#[cfg(test)]
mod tests {
    use quay_core::{Command, clip_text};

    #[test]
    fn display_keeps_short_statements_intact() {
        let command = Command::new("SELECT * FROM vol_table WHERE tagid = @id");
        assert_eq!(
            command.to_string(),
            "SELECT * FROM vol_table WHERE tagid = @id"
        );
    }

    #[test]
    fn display_clips_long_statements() {
        let text = "x".repeat(300);
        let command = Command::new(text);
        assert_eq!(command.to_string(), format!("{}...", "x".repeat(256)));
    }

    // The clip must never split a multi-byte character; a statement with
    // non-ASCII text straddling the clip point has to format, not panic.
    #[test]
    fn display_clips_on_a_character_boundary() {
        let text = format!("{}é and more", "a".repeat(255));
        assert!(!text.is_char_boundary(256));
        let command = Command::new(text);
        assert_eq!(command.to_string(), format!("{}...", "a".repeat(255)));
    }

    #[test]
    fn clip_text_respects_the_byte_limit() {
        assert_eq!(clip_text("abcdef", 6), "abcdef");
        assert_eq!(clip_text("abcdef", 3), "abc");
        // 'é' occupies bytes 1..3; clipping inside it backs off to byte 1.
        assert_eq!(clip_text("aé", 2), "a");
        assert_eq!(clip_text("aé", 3), "aé");
    }
}
