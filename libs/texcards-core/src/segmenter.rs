//! Section segmenter for LaTeX lecture files.
//!
//! # Format
//! ```latex
//! \part{Supervised learning}
//! \section{What is overfitting?}
//! The model fits noise in the training data.
//!
//! \section{Define the bias of an estimator}
//! \[ \mathrm{Bias}(\hat\theta) = E[\hat\theta] - \theta \]
//! \part{Unsupervised learning}
//! ```
//!
//! Every `\section{...}` title becomes a question and the text up to the next
//! section (or the next `\part{`, or end of file) becomes its answer.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::types::{RawCard, SectionBoundary};

static RE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\section\{([^}]*)\}").expect("valid section regex"));
static RE_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\part\{").expect("valid part regex"));

/// Split document text into question/answer cards.
pub fn segment(content: &str) -> Vec<RawCard> {
    let mut cards = Vec::new();

    for span in answer_spans(content) {
        let question = span.boundary.title.trim();
        let answer = content[span.body].trim();

        if question.is_empty() || answer.is_empty() {
            continue;
        }

        cards.push(RawCard {
            question: question.to_string(),
            answer: answer.to_string(),
            line_number: line_of(content, span.boundary.start),
        });
    }

    cards
}

/// Decode document bytes as UTF-8, then segment.
pub fn segment_bytes(bytes: &[u8]) -> Result<Vec<RawCard>, ParseError> {
    let content = std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidEncoding {
        offset: e.valid_up_to(),
    })?;
    Ok(segment(content))
}

/// All `\section{...}` markers in document order.
pub fn section_boundaries(content: &str) -> Vec<SectionBoundary> {
    RE_SECTION
        .captures_iter(content)
        .filter_map(|caps| {
            let marker = caps.get(0)?;
            let title = caps.get(1)?;
            Some(SectionBoundary {
                title: title.as_str().to_string(),
                start: marker.start(),
                body_start: marker.end(),
            })
        })
        .collect()
}

struct AnswerSpan {
    boundary: SectionBoundary,
    body: Range<usize>,
}

fn answer_spans(content: &str) -> Vec<AnswerSpan> {
    let boundaries = section_boundaries(content);
    let next_starts: Vec<Option<usize>> = boundaries
        .iter()
        .skip(1)
        .map(|b| Some(b.start))
        .chain(std::iter::once(None))
        .collect();

    boundaries
        .into_iter()
        .zip(next_starts)
        .map(|(boundary, next_start)| {
            let end = next_start.unwrap_or_else(|| fallback_end(content, boundary.body_start));
            let body = boundary.body_start..end;
            AnswerSpan { boundary, body }
        })
        .collect()
}

/// End of the last section's answer: the next `\part{` or end of document.
fn fallback_end(content: &str, from: usize) -> usize {
    RE_PART
        .find(&content[from..])
        .map_or(content.len(), |m| from + m.start())
}

fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn pairs(content: &str) -> Vec<(String, String)> {
        segment(content)
            .into_iter()
            .map(|c| (c.question, c.answer))
            .collect()
    }

    #[test]
    fn segment_two_sections() {
        let input = "\\section{Q1}\n  A1  \n\\section{Q2}\nA2\n";
        assert_eq!(
            pairs(input),
            vec![
                ("Q1".to_string(), "A1".to_string()),
                ("Q2".to_string(), "A2".to_string()),
            ]
        );
    }

    #[test]
    fn segment_no_sections() {
        assert!(segment("Just a preamble\n\\subsection{Not a question}\nText").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn segment_trims_title() {
        let cards = segment("\\section{  What is a kernel?  }\nA similarity function.");
        assert_eq!(cards[0].question, "What is a kernel?");
    }

    #[test]
    fn skip_blank_titles() {
        let input = "\\section{   }\nOrphan\n\\section{}\nAlso orphan\n\\section{Q}\nA";
        assert_eq!(pairs(input), vec![("Q".to_string(), "A".to_string())]);
    }

    #[test]
    fn empty_title_still_ends_previous_answer() {
        let input = "\\section{Q}\nA\n\\section{}\nDropped";
        assert_eq!(pairs(input), vec![("Q".to_string(), "A".to_string())]);
    }

    #[test]
    fn skip_empty_answers() {
        let input = "\\section{Q1}\n\n\\section{Q2}\nA2";
        assert_eq!(pairs(input), vec![("Q2".to_string(), "A2".to_string())]);
    }

    #[test]
    fn last_answer_stops_at_part() {
        let input = "\\part{One}\n\\section{Q}\nA\n\\part{Two}\nTrailing text";
        assert_eq!(pairs(input), vec![("Q".to_string(), "A".to_string())]);
    }

    #[test]
    fn part_between_sections_stays_in_answer() {
        let input = "\\section{Q1}\nA1\n\\part{Two}\n\\section{Q2}\nA2";
        let cards = segment(input);
        assert_eq!(cards[0].answer, "A1\n\\part{Two}");
        assert_eq!(cards[1].answer, "A2");
    }

    #[test]
    fn last_answer_runs_to_end() {
        let input = "\\section{Q}\nLine 1\n\nLine 3\n";
        assert_eq!(segment(input)[0].answer, "Line 1\n\nLine 3");
    }

    #[test]
    fn subsections_stay_in_answer() {
        let input = "\\section{Q}\n\\subsection{Part A}\nText";
        let cards = segment(input);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer, "\\subsection{Part A}\nText");
    }

    #[test]
    fn records_line_numbers() {
        let input = "preamble\n\\section{Q1}\nA1\n\n\\section{Q2}\nA2";
        let cards = segment(input);
        assert_eq!(cards[0].line_number, 2);
        assert_eq!(cards[1].line_number, 5);
    }

    #[test]
    fn boundaries_in_document_order() {
        let input = "\\section{A}x\\section{B}y";
        let boundaries = section_boundaries(input);
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0].title, "A");
        assert_eq!(boundaries[0].start, 0);
        assert_eq!(boundaries[0].body_start, 11);
        assert_eq!(boundaries[1].start, 12);
    }

    #[test]
    fn segment_is_idempotent() {
        let input = "\\section{Q1}\nA1\n\\section{Q2}\nA2\n\\part{P}";
        assert_eq!(segment(input), segment(input));
    }

    #[test]
    fn reject_invalid_utf8() {
        let bytes = b"\\section{Q}\nA \xff\xfe";
        let result = segment_bytes(bytes);
        assert_eq!(result, Err(ParseError::InvalidEncoding { offset: 14 }));
    }

    #[test]
    fn segment_bytes_accepts_utf8() {
        let cards = segment_bytes("\\section{Größe}\nÄ".as_bytes()).unwrap();
        assert_eq!(cards[0].question, "Größe");
        assert_eq!(cards[0].answer, "Ä");
    }

    fn document() -> impl Strategy<Value = String> {
        let piece = prop_oneof![
            "[a-z \n]{0,12}".prop_map(String::from),
            "[A-Za-z ]{0,6}".prop_map(|t| format!("\\section{{{t}}}")),
            Just("\\part{X}".to_string()),
            Just("\\subsection{S}".to_string()),
        ];
        prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn spans_partition_the_document(doc in document()) {
            let spans = answer_spans(&doc);
            for pair in spans.windows(2) {
                prop_assert_eq!(pair[0].body.end, pair[1].boundary.start);
            }
            for span in &spans {
                prop_assert!(span.boundary.body_start == span.body.start);
                prop_assert!(span.body.start <= span.body.end);
                prop_assert!(span.body.end <= doc.len());
            }
            if let Some(last) = spans.last() {
                let rest = &doc[last.body.end..];
                let ends_at_part = rest.is_empty() || rest.starts_with("\\part{");
                prop_assert!(ends_at_part, "trailing text must start at a part marker");
            }
        }

        #[test]
        fn cards_are_trimmed_and_non_empty(doc in document()) {
            for card in segment(&doc) {
                prop_assert!(!card.question.is_empty());
                prop_assert!(!card.answer.is_empty());
                prop_assert_eq!(card.question.trim(), card.question.as_str());
                prop_assert_eq!(card.answer.trim(), card.answer.as_str());
            }
        }
    }
}
