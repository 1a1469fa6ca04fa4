//! Masking of `$…$` and `$$…$$` spans.
//!
//! Math is swapped for private-use placeholders while the markup rewrites
//! run, then restored byte for byte.

use std::sync::LazyLock;

use regex::{Captures, Regex};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\u{E000}([0-9]+)\u{E001}").expect("valid placeholder regex")
});

/// Text with its math spans replaced by placeholders.
pub(crate) struct Masked<'a> {
    pub text: String,
    spans: Vec<&'a str>,
}

impl Masked<'_> {
    /// Put the original math spans back in place of their placeholders.
    pub fn restore(&self, text: &str) -> String {
        RE_PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| self.spans.get(idx))
                    .map_or_else(|| caps[0].to_string(), |span| (*span).to_string())
            })
            .into_owned()
    }
}

/// Replace every closed math span with a placeholder.
///
/// Returns `None` when the input already contains placeholder characters.
pub(crate) fn mask(text: &str) -> Option<Masked<'_>> {
    if text.contains(OPEN) || text.contains(CLOSE) {
        return None;
    }

    let bytes = text.as_bytes();
    let mut masked = String::with_capacity(text.len());
    let mut spans = Vec::new();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' => {
                let delim: &[u8] = if bytes.get(i + 1) == Some(&b'$') { b"$$" } else { b"$" };
                match find_closing(bytes, i + delim.len(), delim) {
                    Some(close) => {
                        let end = close + delim.len();
                        masked.push_str(&text[copied..i]);
                        masked.push(OPEN);
                        masked.push_str(&spans.len().to_string());
                        masked.push(CLOSE);
                        spans.push(&text[i..end]);
                        copied = end;
                        i = end;
                    }
                    None => i += delim.len(),
                }
            }
            _ => i += 1,
        }
    }
    masked.push_str(&text[copied..]);

    Some(Masked {
        text: masked,
        spans,
    })
}

fn find_closing(bytes: &[u8], from: usize, delim: &[u8]) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == b'\\' {
            j += 2;
        } else if bytes[j..].starts_with(delim) {
            return Some(j);
        } else {
            j += 1;
        }
    }
    None
}
