//! Form field checks shared by the handlers. Limits are in characters,
//! not bytes.

pub const MAX_TITLE_LEN: usize = 60;
pub const MAX_YEAR_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 20;

pub fn valid_movie_input(title: &str, year: &str) -> bool {
    !title.is_empty()
        && !year.is_empty()
        && title.chars().count() <= MAX_TITLE_LEN
        && year.chars().count() <= MAX_YEAR_LEN
}

pub fn valid_display_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_NAME_LEN
}

/// Guestbook entries only require both fields to be present; the declared
/// schema limits are intentionally not enforced here.
pub fn valid_message_input(name: &str, content: &str) -> bool {
    !name.is_empty() && !content.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie_input() {
        assert!(valid_movie_input("Leon", "1994"));
        assert!(valid_movie_input(&"a".repeat(60), "2020"));
        assert!(!valid_movie_input("", "2020"));
        assert!(!valid_movie_input("Leon", ""));
        assert!(!valid_movie_input(&"a".repeat(61), "2020"));
        assert!(!valid_movie_input("Leon", "19944"));
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // four CJK characters are twelve bytes but still a valid year length
        assert!(valid_movie_input("电影真好", "一九九六"));
    }

    #[test]
    fn test_valid_display_name() {
        assert!(valid_display_name("Test"));
        assert!(valid_display_name(&"a".repeat(20)));
        assert!(!valid_display_name(""));
        assert!(!valid_display_name(&"a".repeat(21)));
    }

    #[test]
    fn test_valid_message_input() {
        assert!(valid_message_input("小江", "电影真好看啊！"));
        assert!(!valid_message_input("", "hello"));
        assert!(!valid_message_input("someone", ""));
        // length limits are deliberately not enforced
        assert!(valid_message_input(&"a".repeat(100), &"b".repeat(1000)));
    }
}
