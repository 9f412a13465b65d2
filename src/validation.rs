use regex::Regex;
use std::sync::LazyLock;

use crate::config::PromptLimits;
use crate::error::{CodeMentorError, Result};

/// Printable text plus common punctuation; anything outside this set is
/// rejected at the HTTP boundary.
static ALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-Z0-9\s.,!?;:()\[\]{}'"\-_+=*/\\<>@#$%&]*$"#)
        .expect("allow-list pattern is a compile-time constant")
});

/// Validates inbound prompts before they reach the generation chain.
pub struct InputValidator {
    min_chars: usize,
    max_chars: usize,
}

impl InputValidator {
    pub fn new(limits: &PromptLimits) -> Self {
        Self {
            min_chars: limits.min_chars,
            max_chars: limits.max_chars,
        }
    }

    /// Trim and validate a raw prompt, returning the cleaned text.
    ///
    /// An empty (or whitespace-only) prompt fails with a plain message;
    /// length and character violations are collected into `details` so a
    /// caller can report every problem at once.
    pub fn validate_prompt(&self, raw: &str) -> Result<String> {
        let prompt = raw.trim();
        if prompt.is_empty() {
            return Err(CodeMentorError::validation("Please provide a valid prompt"));
        }

        let mut details = Vec::new();
        let chars = prompt.chars().count();
        if chars < self.min_chars || chars > self.max_chars {
            details.push(format!(
                "Prompt must be between {} and {} characters",
                self.min_chars, self.max_chars
            ));
        }
        if !ALLOWED_CHARS.is_match(prompt) {
            details.push("Prompt contains invalid characters".to_string());
        }

        if details.is_empty() {
            Ok(prompt.to_string())
        } else {
            Err(CodeMentorError::validation_with_details(
                "Validation Error",
                details,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> InputValidator {
        InputValidator::new(&PromptLimits {
            min_chars: 3,
            max_chars: 5000,
        })
    }

    #[test]
    fn trims_and_accepts_ordinary_prompts() {
        let cleaned = validator()
            .validate_prompt("  Explain quicksort  ")
            .unwrap();
        assert_eq!(cleaned, "Explain quicksort");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        for raw in ["", "   ", "\n\t "] {
            let err = validator().validate_prompt(raw).unwrap_err();
            assert!(matches!(err, CodeMentorError::Validation { .. }));
        }
    }

    #[test]
    fn rejects_too_short_and_too_long_with_details() {
        let err = validator().validate_prompt("hi").unwrap_err();
        let CodeMentorError::Validation { details, .. } = err else {
            panic!("expected validation error");
        };
        assert_eq!(details.len(), 1);
        assert!(details[0].contains("between 3 and 5000"));

        let long = "a".repeat(5001);
        assert!(validator().validate_prompt(&long).is_err());
    }

    #[test]
    fn rejects_characters_outside_the_allow_list() {
        let err = validator().validate_prompt("drop table; 😈").unwrap_err();
        let CodeMentorError::Validation { details, .. } = err else {
            panic!("expected validation error");
        };
        assert!(details.iter().any(|d| d.contains("invalid characters")));
    }

    #[test]
    fn accepts_code_flavored_punctuation() {
        let prompt = r#"Why does arr[i] = { "k": v } fail in my for-loop (line 3)?"#;
        assert!(validator().validate_prompt(prompt).is_ok());
    }
}
