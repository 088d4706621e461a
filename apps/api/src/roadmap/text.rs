//! Small text helpers shared by the topic extractor, classifier and intent detector.

/// Characters that survive sanitizing anywhere in a word ("c++", "c#").
const ALWAYS_KEPT: &[char] = &['+', '#'];
/// Characters that survive only between two alphanumerics ("node.js", "i'd", "e-commerce").
const INNER_KEPT: &[char] = &['.', '-', '\''];

/// Replaces punctuation with spaces, keeping the characters that belong to a word.
pub fn sanitize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c.is_alphanumeric() || c.is_whitespace() || ALWAYS_KEPT.contains(&c) {
                return c;
            }
            let inner = i > 0
                && chars[i - 1].is_alphanumeric()
                && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
            if inner && INNER_KEPT.contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Lower-cased, sanitized words of `text` in order.
pub fn words(text: &str) -> Vec<String> {
    sanitize(&text.to_lowercase())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lower-cased tokens for keyword matching. Splits on every non-word
/// character, so "web-development" yields `["web", "development"]`.
pub fn match_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || ALWAYS_KEPT.contains(&c)))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keywords that only match a whole token. Prefix matching would let them
/// fire inside unrelated words ("fun" in "fundamentals", "art" in "martian").
const WHOLE_WORD_ONLY: &[&str] = &[
    "fun", "ai", "ui", "ux", "art", "tech", "excel", "exam", "react", "bread",
];

fn word_matches(token: &str, keyword: &str) -> bool {
    token == keyword || (!WHOLE_WORD_ONLY.contains(&keyword) && token.starts_with(keyword))
}

/// True when `term` occurs in `tokens` as a contiguous run of words, each
/// token starting with the matching keyword word ("websites" hits "web").
pub fn contains_term(tokens: &[String], term: &str) -> bool {
    let needle: Vec<&str> = term.split_whitespace().collect();
    if needle.is_empty() || needle.len() > tokens.len() {
        return false;
    }
    tokens
        .windows(needle.len())
        .any(|window| window.iter().zip(&needle).all(|(t, n)| word_matches(t, n)))
}

/// True when any of `terms` occurs in `tokens`.
pub fn contains_any(tokens: &[String], terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_term(tokens, term))
}

/// Capitalizes the first letter and lower-cases the rest. A first letter
/// whose upper case is several characters ("ß") is kept as is.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    let upper = first.to_uppercase();
    if upper.len() == 1 {
        out.extend(upper);
    } else {
        out.push(first);
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}
