/// Кусок текста ячейки; `matched`: совпадение с поисковым запросом
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub matched: bool,
}

impl HighlightSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}

/// Посимвольное приведение к нижнему регистру; `ς` сводится к `σ`,
/// чтобы конечная сигма совпадала с обычной
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|lower| if lower == 'ς' { 'σ' } else { lower })
}

/// Case folding shared by column filtering and highlighting
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Split `text` into plain and matched segments, marking every
/// case-insensitive, non-overlapping occurrence of `query`.
///
/// Matching runs on the folded text; each folded byte maps back to the
/// original character it came from, so segments always cut `text` on char
/// boundaries even when lowercasing changes byte lengths.
pub fn highlight_segments(text: &str, query: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![HighlightSegment::plain(text)];
    }

    let needle = fold_case(query);
    let mut folded = String::with_capacity(text.len());
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lower in fold_char(ch) {
            folded.push(lower);
            origin.extend(std::iter::repeat((start, end)).take(lower.len_utf8()));
        }
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut search_from = 0;
    while let Some(found) = folded[search_from..].find(&needle) {
        let folded_start = search_from + found;
        let folded_end = folded_start + needle.len();
        search_from = folded_end;

        let start = origin[folded_start].0;
        let end = origin[folded_end - 1].1;
        // the match began inside a character already emitted
        if start < cursor {
            continue;
        }
        if start > cursor {
            segments.push(HighlightSegment::plain(&text[cursor..start]));
        }
        segments.push(HighlightSegment::matched(&text[start..end]));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(HighlightSegment::plain(&text[cursor..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[HighlightSegment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_highlight_prefix() {
        assert_eq!(
            highlight_segments("ASLS152", "asls"),
            vec![HighlightSegment::matched("ASLS"), HighlightSegment::plain("152")]
        );
    }

    #[test]
    fn test_highlight_every_occurrence() {
        let segments = highlight_segments("Dong A dong", "DONG");
        assert_eq!(
            segments,
            vec![
                HighlightSegment::matched("Dong"),
                HighlightSegment::plain(" A "),
                HighlightSegment::matched("dong"),
            ]
        );
    }

    #[test]
    fn test_empty_query_has_no_matches() {
        assert_eq!(
            highlight_segments("Việt Nam", ""),
            vec![HighlightSegment::plain("Việt Nam")]
        );
        assert!(highlight_segments("", "a").is_empty());
    }

    #[test]
    fn test_no_match_is_single_plain_segment() {
        assert_eq!(
            highlight_segments("Supplier", "xyz"),
            vec![HighlightSegment::plain("Supplier")]
        );
    }

    #[test]
    fn test_unicode_case_folding_keeps_char_boundaries() {
        let segments = highlight_segments("ĐÔNG Á", "đông");
        assert_eq!(segments[0], HighlightSegment::matched("ĐÔNG"));
        assert_eq!(joined(&segments), "ĐÔNG Á");

        // 'İ' lowercases to two chars; the text must survive intact
        let segments = highlight_segments("İstanbul", "stan");
        assert_eq!(joined(&segments), "İstanbul");
        assert!(segments.iter().any(|s| s.matched && s.text == "stan"));
    }

    #[test]
    fn test_regex_characters_are_literal() {
        let segments = highlight_segments("a.b*c", ".b*");
        assert_eq!(
            segments,
            vec![
                HighlightSegment::plain("a"),
                HighlightSegment::matched(".b*"),
                HighlightSegment::plain("c"),
            ]
        );
    }

    #[test]
    fn test_final_sigma_highlights_like_it_filters() {
        assert_eq!(fold_case("ΟΔΟΣ"), fold_case("οδος"));
        assert_eq!(
            highlight_segments("ΟΔΟΣ 1", "οδος"),
            vec![HighlightSegment::matched("ΟΔΟΣ"), HighlightSegment::plain(" 1")]
        );
        assert_eq!(
            highlight_segments("οδος", "ΟΔΟΣ"),
            vec![HighlightSegment::matched("οδος")]
        );
    }
}
