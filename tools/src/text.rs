//! Read-time estimation
//!
//! Same arithmetic the site uses: whitespace-separated words at 200 words
//! per minute, rounded up, never below one minute.

const WORDS_PER_MINUTE: usize = 200;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn estimate_read_time(text: &str) -> String {
    let minutes = word_count(text).div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_texts_round_up_to_one_minute() {
        assert_eq!(estimate_read_time(""), "1 min read");
        assert_eq!(estimate_read_time("a few words"), "1 min read");
    }

    #[test]
    fn boundaries_round_up() {
        let exactly_200 = "word ".repeat(200);
        let one_over = "word ".repeat(201);

        assert_eq!(estimate_read_time(&exactly_200), "1 min read");
        assert_eq!(estimate_read_time(&one_over), "2 min read");
    }
}
