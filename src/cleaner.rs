//! Lexical cleaning of Java source text.
//!
//! Produces a stripped-down rendition of a compilation unit that the
//! downstream parsers can scan without tripping over comments, literals or
//! annotation argument lists: comments and string/char literals are removed
//! (literals can carry unmatched brackets), `throws` clauses are removed,
//! annotations are removed including nested argument lists, and whitespace
//! runs collapse to a single space. Pure function, idempotent.

use crate::scope::{SpanKind, match_scopes};

pub fn clean_java_content(input: &str) -> String {
    let text = strip_comments_and_literals(input);
    let text = strip_throws_clauses(&text);
    let text = remove_annotations(&text);
    normalize_whitespace(&text)
}

#[derive(PartialEq)]
enum LexState {
    Code,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
}

/// Removes `//`/`/* */` comments and string/char literals in a single pass.
/// A block comment leaves one space behind so it never glues two tokens.
fn strip_comments_and_literals(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = LexState::Code;
    let mut escaped = false;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            LexState::Code => match ch {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = LexState::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = LexState::BlockComment;
                }
                '"' => {
                    state = LexState::StringLiteral;
                    escaped = false;
                }
                '\'' => {
                    state = LexState::CharLiteral;
                    escaped = false;
                }
                _ => out.push(ch),
            },
            LexState::LineComment => {
                if ch == '\n' {
                    out.push('\n');
                    state = LexState::Code;
                }
            }
            LexState::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push(' ');
                    state = LexState::Code;
                }
            }
            LexState::StringLiteral => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    state = LexState::Code;
                }
            }
            LexState::CharLiteral => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '\'' {
                    state = LexState::Code;
                }
            }
        }
    }

    out
}

/// Removes `throws` clauses: the text between a closing parenthesis and the
/// next `{` or `;`, whichever comes first. The terminator itself stays.
fn strip_throws_clauses(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(paren) = rest.find(')') {
        let split = paren + 1;
        out.push_str(&rest[..split]);
        rest = &rest[split..];

        let after_ws = rest.trim_start();
        let is_throws = after_ws.strip_prefix("throws").is_some_and(|tail| {
            tail.chars().next().is_none_or(|c| !c.is_alphanumeric() && c != '_')
        });
        if !is_throws {
            continue;
        }
        if let Some(stop) = rest.find(['{', ';']) {
            rest = &rest[stop..];
        }
    }

    out.push_str(rest);
    out
}

fn remove_annotations(input: &str) -> String {
    let mut text = remove_bare_annotations(input);

    let mut ranges = annotation_argument_ranges(&text);
    // back-to-front so earlier offsets stay valid
    ranges.sort_by(|a, b| b.0.cmp(&a.0));
    for (start, end) in ranges {
        text.replace_range(start..end, "");
    }

    remove_bare_annotations(&text)
}

/// Byte ranges of annotation argument-list contents, at arbitrary nesting
/// depth. Only the content between the parentheses is reported; the empty
/// `@Name()` husk left after deletion is taken by the bare-annotation pass.
fn annotation_argument_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut remove_next = false;

    for span in match_scopes(text, '(', ')') {
        match span.kind {
            SpanKind::Outside => {
                remove_next = ends_with_annotation_token(span.text(text));
            }
            SpanKind::Inside => {
                if remove_next {
                    ranges.push((span.start, span.end));
                    remove_next = false;
                } else if span.text(text).contains('@') {
                    // argument lists may themselves carry annotations
                    for (start, end) in annotation_argument_ranges(span.text(text)) {
                        ranges.push((span.start + start, span.start + end));
                    }
                }
            }
        }
    }

    ranges
}

/// True when the trailing non-whitespace run is an annotation token (`@name`).
fn ends_with_annotation_token(text: &str) -> bool {
    let tail = text
        .rsplit(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("");
    match tail.find('@') {
        Some(at) => at + 1 < tail.len(),
        None => false,
    }
}

/// Removes annotations that carry no argument list (optionally an empty `()`).
/// Annotations with arguments are left for the parenthesis-scope pass.
fn remove_bare_annotations(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];

        let name_len = tail
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c.is_whitespace() || c == '(')
            .map_or(tail.len(), |(i, _)| i);
        let mut consumed = name_len;
        while tail[consumed..].starts_with("()") {
            consumed += 2;
        }

        let boundary = tail[consumed..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace);
        if boundary {
            rest = &tail[consumed..];
        } else {
            // argument list follows: keep the token for the scope pass
            out.push_str(&tail[..consumed]);
            rest = &tail[consumed..];
        }
    }

    out.push_str(rest);
    out
}

fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
