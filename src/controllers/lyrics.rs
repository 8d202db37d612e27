//! Verse splitting and pagination for song text.
//!
//! A verse is a maximal run of non-blank lines; any stretch of one or more
//! blank lines (lines containing only whitespace) separates two verses.

/// Split lyrics into verses. The whole text is trimmed first, so leading
/// and trailing blank lines never produce empty verses. Whitespace-only
/// input yields no verses at all.
pub fn split_verses(text: &str) -> Vec<String> {
    let mut verses: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.trim().lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                verses.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        verses.push(current.join("\n"));
    }

    verses
}

/// Return the 1-based `page` of verses, `size` verses per page. A page
/// past the end is an empty list, and a partial last page is clamped to
/// the verse count. Callers validate that page and size are positive.
pub fn paginate_verses(text: &str, page: usize, size: usize) -> Vec<String> {
    let mut verses = split_verses(text);
    let start = page.saturating_sub(1).saturating_mul(size);
    let end = start.saturating_add(size).min(verses.len());

    if start >= verses.len() {
        return Vec::new();
    }

    verses.drain(..start);
    verses.truncate(end - start);
    verses
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_VERSES: &str = "\
Ooh baby, don't you know I suffer?
Ooh baby, can you hear me moan?

You caught me under false pretenses
How long before you let me go?

Ooh, you set my soul alight
Ooh, you set my soul alight";

    #[test]
    fn splits_on_blank_lines() {
        let verses = split_verses(THREE_VERSES);
        assert_eq!(verses.len(), 3);
        assert!(verses[0].starts_with("Ooh baby"));
        assert!(verses[2].ends_with("soul alight"));
    }

    #[test]
    fn whitespace_only_lines_separate_verses() {
        let text = "first verse\nstill first\n   \t\nsecond verse";
        let verses = split_verses(text);
        assert_eq!(verses, vec!["first verse\nstill first", "second verse"]);
    }

    #[test]
    fn runs_of_blank_lines_count_once() {
        let text = "one\n\n\n\ntwo\n\n  \n\nthree";
        assert_eq!(split_verses(text), vec!["one", "two", "three"]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let text = "\n\n  \nonly verse\n\n\n";
        assert_eq!(split_verses(text), vec!["only verse"]);
    }

    #[test]
    fn empty_text_has_no_verses() {
        assert!(split_verses("").is_empty());
        assert!(split_verses("   \n \t \n").is_empty());
    }

    #[test]
    fn size_one_walks_each_verse_in_order() {
        let all = split_verses(THREE_VERSES);
        for (i, verse) in all.iter().enumerate() {
            let page = paginate_verses(THREE_VERSES, i + 1, 1);
            assert_eq!(page, vec![verse.clone()]);
        }
    }

    #[test]
    fn page_past_the_end_is_empty() {
        assert!(paginate_verses(THREE_VERSES, 4, 1).is_empty());
        assert!(paginate_verses(THREE_VERSES, 100, 10).is_empty());
        assert!(paginate_verses("", 1, 1).is_empty());
    }

    #[test]
    fn last_page_is_clamped() {
        let page = paginate_verses(THREE_VERSES, 2, 2);
        assert_eq!(page.len(), 1);
        assert!(page[0].starts_with("Ooh, you set"));
    }

    #[test]
    fn one_page_can_hold_everything() {
        let page = paginate_verses(THREE_VERSES, 1, 50);
        assert_eq!(page.len(), 3);
    }
}
