//! Recursive delimiter matching.
//!
//! Splits text into alternating depth-zero ("outside") and depth-balanced
//! ("inside") spans for a delimiter pair. The same scanner drives brace-level
//! class-body splitting, parenthesis-level annotation-argument removal and
//! angle-bracket generic unwrapping.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Text at delimiter depth zero.
    Outside,
    /// A balanced substring with the outer delimiter pair stripped.
    Inside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    /// Byte offset of the span content in the scanned text (delimiters excluded).
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Scans `text` for `open`/`close` pairs and returns the alternating
/// outside/inside spans, correct at arbitrary nesting depth.
///
/// Malformed input degrades instead of failing: a closing delimiter at depth
/// zero is ordinary outside text, and an unclosed opening delimiter produces a
/// final inside span running to the end of the text.
pub fn match_scopes(text: &str, open: char, close: char) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut outside_start = 0usize;
    let mut inside_start = 0usize;

    for (idx, ch) in text.char_indices() {
        if ch == open {
            if depth == 0 {
                spans.push(Span {
                    kind: SpanKind::Outside,
                    start: outside_start,
                    end: idx,
                });
                inside_start = idx + open.len_utf8();
            }
            depth += 1;
        } else if ch == close {
            if depth == 1 {
                spans.push(Span {
                    kind: SpanKind::Inside,
                    start: inside_start,
                    end: idx,
                });
                outside_start = idx + close.len_utf8();
                depth = 0;
            } else if depth > 1 {
                depth -= 1;
            }
            // depth == 0: stray closer, treated as outside text
        }
    }

    if depth > 0 {
        spans.push(Span {
            kind: SpanKind::Inside,
            start: inside_start,
            end: text.len(),
        });
    } else if outside_start < text.len() {
        spans.push(Span {
            kind: SpanKind::Outside,
            start: outside_start,
            end: text.len(),
        });
    }

    spans
}

/// First outside span content, if any.
pub fn first_outside<'a>(text: &'a str, open: char, close: char) -> Option<&'a str> {
    match_scopes(text, open, close)
        .iter()
        .find(|s| s.kind == SpanKind::Outside)
        .map(|s| s.text(text))
}

/// First inside span content, if any.
pub fn first_inside<'a>(text: &'a str, open: char, close: char) -> Option<&'a str> {
    match_scopes(text, open, close)
        .iter()
        .find(|s| s.kind == SpanKind::Inside)
        .map(|s| s.text(text))
}

/// Splits on commas that sit outside any `<...>` nesting, at arbitrary depth.
/// Used for parameter lists and `implements` clauses, where a naive split
/// would break generic arguments apart.
pub fn split_top_level_commas(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, ch) in text.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&text[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    pieces.push(&text[start..]);
    pieces
}
