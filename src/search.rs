/// Byte range of one match inside the searched text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSpan {
    pub start: usize,
    pub end: usize,
}

const HIGHLIGHT: &str = "\x1B[43m\x1B[30m"; // Yellow background, black text
const RESET: &str = "\x1B[0m";

/// ASCII case-insensitive search. Matches may overlap: every search resumes
/// one byte after the start of the previous match.
pub fn find_matches(text: &str, query: &str) -> Vec<SearchSpan> {
    if query.is_empty() {
        return vec![];
    }

    let haystack = text.as_bytes();
    let needle = query.as_bytes();
    if needle.len() > haystack.len() {
        return vec![];
    }

    (0..=haystack.len() - needle.len())
        .filter(|&start| haystack[start..start + needle.len()].eq_ignore_ascii_case(needle))
        .map(|start| SearchSpan {
            start,
            end: start + needle.len(),
        })
        .collect()
}

/// Wraps every span of `text` in ANSI highlight codes. Overlapping spans are
/// merged into one highlighted run.
pub fn highlight(text: &str, spans: &[SearchSpan]) -> String {
    let mut merged: Vec<SearchSpan> = vec![];
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(*span),
        }
    }

    let mut out = String::with_capacity(text.len() + merged.len() * (HIGHLIGHT.len() + RESET.len()));
    let mut cursor = 0;
    for span in merged {
        out.push_str(&text[cursor..span.start]);
        out.push_str(HIGHLIGHT);
        out.push_str(&text[span.start..span.end]);
        out.push_str(RESET);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Device Name: MockGPU\n\tgeometryShader 1\n\tGEOMETRYSHADER 0\n";

    #[test]
    fn finds_case_insensitive_matches_in_order() {
        let spans = find_matches(TEXT, "geometryshader");
        assert_eq!(spans.len(), 2);
        assert_eq!(&TEXT[spans[0].start..spans[0].end], "geometryShader");
        assert_eq!(&TEXT[spans[1].start..spans[1].end], "GEOMETRYSHADER");
        assert!(spans[0].start < spans[1].start);
    }

    #[test]
    fn overlapping_matches_are_all_reported() {
        let spans = find_matches("aaaa", "aa");
        assert_eq!(
            spans,
            [
                SearchSpan { start: 0, end: 2 },
                SearchSpan { start: 1, end: 3 },
                SearchSpan { start: 2, end: 4 },
            ]
        );
    }

    #[test]
    fn empty_or_missing_queries_find_nothing() {
        assert!(find_matches(TEXT, "").is_empty());
        assert!(find_matches(TEXT, "tessellation").is_empty());
        assert!(find_matches("ab", "abc").is_empty());
    }

    #[test]
    fn highlight_merges_overlaps() {
        let spans = find_matches("xaaay", "aa");
        assert_eq!(
            highlight("xaaay", &spans),
            format!("x{}aaa{}y", HIGHLIGHT, RESET)
        );
    }

    #[test]
    fn highlight_without_spans_is_identity() {
        assert_eq!(highlight(TEXT, &[]), TEXT);
    }
}
