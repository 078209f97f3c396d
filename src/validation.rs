/// Content policy for posts
///
/// Posts are emoji-only: 1 to 280 characters drawn from the Unicode emoji
/// repertoire. This is a content-shape policy, not a general text validator;
/// anything outside the emoji character classes is rejected outright.
use crate::error::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum post length in Unicode scalar values
pub const MAX_CONTENT_CHARS: usize = 280;

// Extended_Pictographic covers the emoji themselves; Emoji_Component covers
// the glue that composite emoji are built from (ZWJ, variation selectors,
// skin-tone modifiers, regional indicators, keycap parts).
static EMOJI_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\p{Extended_Pictographic}|\p{Emoji_Component})+$")
        .expect("emoji pattern is valid")
});

/// Validate post content against the emoji-only policy.
///
/// Must pass before the rate limiter is consulted or any write happens.
pub fn validate_content(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(AppError::Validation("Content must not be empty".to_string()));
    }

    let char_count = content.chars().count();
    if char_count > MAX_CONTENT_CHARS {
        return Err(AppError::Validation(format!(
            "Content must be at most {} characters, got {}",
            MAX_CONTENT_CHARS, char_count
        )));
    }

    if !EMOJI_ONLY.is_match(content) {
        return Err(AppError::Validation(
            "Content must consist of emoji only".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_emoji() {
        assert!(validate_content("😀").is_ok());
    }

    #[test]
    fn accepts_multiple_emoji() {
        assert!(validate_content("🦀🔥🎉").is_ok());
    }

    #[test]
    fn accepts_zwj_sequences_and_modifiers() {
        // family (ZWJ sequence), waving hand with skin tone, flag
        assert!(validate_content("👨\u{200D}👩\u{200D}👧\u{200D}👦").is_ok());
        assert!(validate_content("👋🏽").is_ok());
        assert!(validate_content("🇺🇸").is_ok());
    }

    #[test]
    fn accepts_max_length() {
        let content: String = std::iter::repeat('😀').take(280).collect();
        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_content(""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_over_max_length() {
        let content: String = std::iter::repeat('😀').take(281).collect();
        assert!(matches!(
            validate_content(&content),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(validate_content("hello").is_err());
    }

    #[test]
    fn rejects_mixed_text_and_emoji() {
        assert!(validate_content("hi 😀").is_err());
        assert!(validate_content("😀!").is_err());
    }

    #[test]
    fn rejects_whitespace_between_emoji() {
        assert!(validate_content("😀 😀").is_err());
    }
}
