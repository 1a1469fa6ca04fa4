//! LaTeX to HTML transcoding for KaTeX-rendered flashcards.
//!
//! The rewrite table runs in a fixed order: later rewrites see the output of
//! earlier ones. Math spans are masked between the display-math rewrite and
//! the line pass, so KaTeX receives them unchanged. Anything not in the
//! table passes through as text.

mod math;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static RE_DISPLAY_MATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\\\|\\\[(.*?)\\\]").expect("valid display math regex")
});
static RE_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\\\|\\([A-Za-z]+|[;,!])").expect("valid command regex")
});
static RE_ITEM_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\item\[(.*?)\]").expect("valid item label regex"));
static RE_SUBSECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\subsection\*?\{([^}]+)\}").expect("valid subsection regex")
});
static RE_ALGORITHMIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\begin\{algorithmic\}(?:\[\d*\])?").expect("valid algorithmic regex")
});

/// Environment markers and the HTML that replaces them, in rewrite order.
static ENVIRONMENTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\\begin\{algorithm\}", r#"<div class="algorithm">"#),
        (r"\\end\{algorithm\}", "</div>"),
    ]
    .into_iter()
    .map(|(pattern, html)| (Regex::new(pattern).expect("valid environment regex"), html))
    .collect()
});

static LISTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\\begin\{itemize\}", "<ul>"),
        (r"\\end\{itemize\}", "</ul>"),
        (r"\\begin\{enumerate\}", "<ol>"),
        (r"\\end\{enumerate\}", "</ol>"),
    ]
    .into_iter()
    .map(|(pattern, html)| (Regex::new(pattern).expect("valid list regex"), html))
    .collect()
});

static EMPHASIS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\\textbf\{([^}]+)\}", "strong"),
        (r"\\textit\{([^}]+)\}", "em"),
        (r"\\emph\{([^}]+)\}", "em"),
    ]
    .into_iter()
    .map(|(pattern, tag)| (Regex::new(pattern).expect("valid emphasis regex"), tag))
    .collect()
});

const ITEM: &[(&str, &str)] = &[("item", "<li>")];

const ALGORITHM_KEYWORDS: &[(&str, &str)] = &[
    ("Require", r#"<span class="algo-keyword">Require:</span>"#),
    ("Ensure", r#"<span class="algo-keyword">Ensure:</span>"#),
    ("State", "<br>&nbsp;&nbsp;"),
    ("Repeat", r#"<span class="algo-keyword">Repeat:</span>"#),
    ("Until", r#"<span class="algo-keyword">Until:</span>"#),
    ("If", r#"<span class="algo-keyword">If</span>"#),
    ("Else", r#"<span class="algo-keyword">Else</span>"#),
    ("EndIf", ""),
    ("For", r#"<span class="algo-keyword">For</span>"#),
    ("EndFor", ""),
    ("Return", r#"<span class="algo-keyword">Return:</span>"#),
];

const SPACING: &[(&str, &str)] = &[
    ("quad", "&emsp;"),
    ("qquad", "&emsp;&emsp;"),
    (";", "&thinsp;"),
    (",", "&thinsp;"),
    ("!", ""),
];

const LINE_BREAK: &str = "<br>";

/// Rewrite one LaTeX span into HTML with `$$`/`$` math delimiters.
///
/// Never fails: unknown or malformed markup is left as text.
pub fn transcode(text: &str) -> String {
    let text = display_math(text);

    let markup = match math::mask(&text) {
        Some(masked) => masked.restore(&rewrite_markup(&masked.text)),
        None => rewrite_markup(&text),
    };

    normalize_lines(&markup)
}

fn display_math(text: &str) -> Cow<'_, str> {
    RE_DISPLAY_MATH.replace_all(text, |caps: &Captures<'_>| match caps.get(1) {
        Some(inner) => format!("$${}$$", inner.as_str()),
        None => caps[0].to_string(),
    })
}

fn rewrite_markup(text: &str) -> String {
    let mut text = replace_all(text, &ENVIRONMENTS);
    text = RE_ALGORITHMIC
        .replace_all(&text, r#"<div class="algorithmic">"#)
        .into_owned();
    text = text.replace(r"\end{algorithmic}", "</div>");

    for (re, tag) in EMPHASIS.iter() {
        text = re
            .replace_all(&text, |caps: &Captures<'_>| {
                format!("<{tag}>{}</{tag}>", &caps[1])
            })
            .into_owned();
    }

    text = replace_all(&text, &LISTS);
    text = RE_ITEM_LABEL
        .replace_all(&text, |caps: &Captures<'_>| {
            format!("<li><strong>{}</strong> ", &caps[1])
        })
        .into_owned();
    text = replace_commands(&text, ITEM);

    text = RE_SUBSECTION
        .replace_all(&text, |caps: &Captures<'_>| format!("<h4>{}</h4>", &caps[1]))
        .into_owned();

    text = replace_commands(&text, ALGORITHM_KEYWORDS);
    text = replace_commands(&text, SPACING);
    line_breaks(&text)
}

fn replace_all(text: &str, table: &[(Regex, &str)]) -> String {
    table.iter().fold(text.to_string(), |acc, (re, html)| {
        re.replace_all(&acc, *html).into_owned()
    })
}

/// Replace whole command tokens found in `table`; other commands are kept.
fn replace_commands(text: &str, table: &[(&str, &str)]) -> String {
    RE_COMMAND
        .replace_all(text, |caps: &Captures<'_>| {
            caps.get(1)
                .and_then(|name| table.iter().find(|(cmd, _)| *cmd == name.as_str()))
                .map_or_else(|| caps[0].to_string(), |(_, html)| (*html).to_string())
        })
        .into_owned()
}

fn line_breaks(text: &str) -> String {
    RE_COMMAND
        .replace_all(text, |caps: &Captures<'_>| {
            match caps.get(1).map(|name| name.as_str()) {
                None | Some("newline") => LINE_BREAK.to_string(),
                Some(_) => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Trim every line and turn blank lines into explicit breaks.
fn normalize_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| match line.trim() {
            "" => LINE_BREAK,
            trimmed => trimmed,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
