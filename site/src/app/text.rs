//! Text utilities: read-time estimation, slug generation, email validation

use std::sync::LazyLock;

use regex::Regex;

/// Assumed reading speed for the read-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Number of words in a text, splitting on whitespace and ignoring empty
/// tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read `word_count` words: `ceil(words / 200)`, clamped
/// to a minimum of 1.
pub fn read_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE).max(1)
}

pub fn format_read_time(minutes: usize) -> String {
    format!("{} min read", minutes)
}

/// Read-time string for a full text, e.g. "6 min read"
pub fn estimate_read_time(text: &str) -> String {
    format_read_time(read_time_minutes(word_count(text)))
}

/// Generate a URL-safe slug: lowercase, strip everything that is not
/// alphanumeric/whitespace/hyphen, collapse whitespace and hyphen runs to a
/// single hyphen, trim leading and trailing hyphens. Idempotent.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== read time tests =====

    #[test]
    fn zero_words_still_takes_a_minute() {
        assert_eq!(read_time_minutes(0), 1);
    }

    #[test]
    fn exactly_one_page_of_words_is_one_minute() {
        assert_eq!(read_time_minutes(200), 1);
    }

    #[test]
    fn one_word_over_rounds_up() {
        assert_eq!(read_time_minutes(201), 2);
    }

    #[test]
    fn long_reads_scale_linearly() {
        assert_eq!(read_time_minutes(1000), 5);
        assert_eq!(read_time_minutes(1001), 6);
    }

    #[test]
    fn estimate_counts_words_not_characters() {
        let text = "word ".repeat(401);
        assert_eq!(estimate_read_time(&text), "3 min read");
    }

    #[test]
    fn word_count_ignores_empty_tokens() {
        assert_eq!(word_count("  one   two\n\nthree  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    // ===== slugify tests =====

    #[test]
    fn slugify_basic_title() {
        assert_eq!(
            slugify("The Future of Sustainable Architecture"),
            "the-future-of-sustainable-architecture"
        );
    }

    #[test]
    fn slugify_strips_special_characters() {
        assert_eq!(slugify("Hello, World! (Part 2)"), "hello-world-part-2");
    }

    #[test]
    fn slugify_collapses_whitespace_and_hyphen_runs() {
        assert_eq!(slugify("a   b --- c"), "a-b-c");
    }

    #[test]
    fn slugify_trims_leading_and_trailing_hyphens() {
        assert_eq!(slugify("--- Trimmed ---"), "trimmed");
    }

    #[test]
    fn slugify_is_idempotent() {
        let once = slugify("Urban Planning: Trends for 2024!");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slugify_of_only_special_characters_is_empty() {
        assert_eq!(slugify("!!!???"), "");
    }

    // ===== email validation tests =====

    #[test]
    fn valid_emails_are_accepted() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn strings_without_an_at_sign_are_rejected() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("user@example"));
    }
}
