//! Identifier casing.
//!
//! Generated symbol names (`BillingPage`, `kInvoicesPage`, `billingProvider`)
//! are derived from user-supplied names here. The functions are pure so the
//! same input always yields the same symbol, which keeps registry dedup keys
//! stable across runs.

/// Characters that always separate two words.
fn is_break(c: char) -> bool {
    matches!(c, '_' | '-' | ' ' | '/' | '\\')
}

/// Split a name into words.
///
/// Explicit separators always split. A lowercase letter followed by an
/// uppercase one also splits (`myPage` → `my` + `Page`), which is what makes
/// [`pascal_case`] stable on its own output.
fn split_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_lower = false;

    for (idx, c) in input.char_indices() {
        if is_break(c) {
            if let Some(s) = start.take() {
                words.push(&input[s..idx]);
            }
            prev_lower = false;
            continue;
        }

        if prev_lower && c.is_uppercase() {
            if let Some(s) = start.take() {
                words.push(&input[s..idx]);
            }
        }

        if start.is_none() {
            start = Some(idx);
        }
        prev_lower = c.is_lowercase();
    }

    if let Some(s) = start {
        words.push(&input[s..]);
    }

    words
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Convert a name to PascalCase.
///
/// | Input             | Output          |
/// |-------------------|-----------------|
/// | `my_page`         | `MyPage`        |
/// | `multi-word_name` | `MultiWordName` |
/// | `a`               | `A`             |
/// | `orders/history`  | `OrdersHistory` |
/// | `MyPage`          | `MyPage`        |
pub fn pascal_case(input: &str) -> String {
    split_words(input).into_iter().map(capitalize).collect()
}

/// Convert a name to camelCase (`my_page` → `myPage`).
pub fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
