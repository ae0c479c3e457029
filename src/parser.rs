//! Parser for loosely formatted question/answer text.
//!
//! # Format
//! ```text
//! 1. Question: What is 2+2?
//! Answer: 4
//!
//! 2. Question: Capital of France?
//! Answer: Paris
//! ```
//!
//! The text typically comes from a chat-completion response and only
//! loosely follows the convention above: labels may be abbreviated
//! (`Q:`/`A:`), lowercased, or missing their colon; answers may span
//! several lines; numbering may be nested (`1. 1. ...`). When no numbered
//! headers are present at all, blank lines separate blocks instead.
//!
//! Parsing is a single forward scan over lines. It never fails: input
//! with nothing recognizable yields an empty list.

use crate::types::QuestionAnswerPair;

const QUESTION_LABELS: &[&str] = &["question", "q"];
const ANSWER_LABELS: &[&str] = &["answer", "a"];

/// Parse free text into an ordered list of question/answer pairs.
///
/// Blocks where both fields come out empty are discarded; a block with
/// one empty field is kept so downstream editing can fill it in. Input
/// order is preserved.
pub fn parse(text: &str) -> Vec<QuestionAnswerPair> {
    let lines: Vec<&str> = text.lines().collect();

    let numbered = lines.iter().any(|line| is_header(line));
    let blocks = if numbered {
        split_at_headers(&lines)
    } else {
        split_at_blanks(&lines)
    };

    blocks
        .into_iter()
        .filter_map(|block| extract_pair(&block, numbered))
        .collect()
}

/// Serialize pairs back into the numbered text convention, the inverse of
/// [`parse`] for single-line pairs.
pub fn render(pairs: &[QuestionAnswerPair]) -> String {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            format!(
                "{}. Question: {}\nAnswer: {}",
                i + 1,
                pair.question,
                pair.answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One candidate entry's lines, before label stripping.
struct ParsedBlock<'a> {
    lines: Vec<&'a str>,
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Strip one leading `<digits>.` ordinal, returning the remainder.
fn strip_ordinal(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits == 0 {
        return None;
    }
    trimmed[digits..].strip_prefix('.')
}

fn is_header(line: &str) -> bool {
    strip_ordinal(line).is_some()
}

/// Strip a leading label (`Question:`, `Q:`, `Answer`, ...), returning the
/// remainder. The colon is optional; without it the label must be followed
/// by whitespace or end of line, so `Apple` is not an `A` label.
fn strip_label<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let trimmed = line.trim_start();
    for label in labels {
        let head = match trimmed.get(..label.len()) {
            Some(head) => head,
            None => continue,
        };
        if !head.eq_ignore_ascii_case(label) {
            continue;
        }
        let rest = &trimmed[label.len()..];
        if let Some(after_colon) = rest.strip_prefix(':') {
            return Some(after_colon.trim_start());
        }
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(rest.trim_start());
        }
    }
    None
}

/// Each block runs from a numbered header line to the next header or end
/// of input. Lines before the first header are noise.
fn split_at_headers<'a>(lines: &[&'a str]) -> Vec<ParsedBlock<'a>> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for &line in lines {
        if is_header(line) {
            if let Some(lines) = current.take() {
                blocks.push(ParsedBlock { lines });
            }
            current = Some(vec![line]);
        } else if let Some(block) = current.as_mut() {
            block.push(line);
        }
    }
    if let Some(lines) = current {
        blocks.push(ParsedBlock { lines });
    }
    blocks
}

/// Fallback segmentation when no numbering exists: blocks are runs of
/// non-blank lines.
fn split_at_blanks<'a>(lines: &[&'a str]) -> Vec<ParsedBlock<'a>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for &line in lines {
        if is_blank(line) {
            if !current.is_empty() {
                blocks.push(ParsedBlock {
                    lines: std::mem::take(&mut current),
                });
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(ParsedBlock { lines: current });
    }
    blocks
}

/// Split a block into question and answer parts and strip prefixes.
///
/// The question part is everything before the first answer-label line;
/// the answer part is that line's remainder plus all following lines.
/// Multi-line parts are joined with `\n` so structure survives for
/// display. Ordinals on the first line are stripped repeatedly (nested
/// numbering), then a single question label.
fn extract_pair(block: &ParsedBlock<'_>, numbered: bool) -> Option<QuestionAnswerPair> {
    let mut question_lines: Vec<&str> = Vec::new();
    let mut answer_lines: Vec<&str> = Vec::new();
    let mut in_answer = false;

    for (i, &line) in block.lines.iter().enumerate() {
        let mut body = line;
        if i == 0 {
            while let Some(rest) = strip_ordinal(body) {
                body = rest;
            }
        }

        if in_answer {
            answer_lines.push(line);
        } else if let Some(rest) = strip_label(body, ANSWER_LABELS) {
            in_answer = true;
            answer_lines.push(rest);
        } else {
            if question_lines.is_empty() {
                body = strip_label(body, QUESTION_LABELS).unwrap_or(body);
            }
            question_lines.push(body);
        }
    }

    // Unnumbered "Question\nAnswer" blocks often omit the answer label
    // entirely; treat the lines after the first as the answer.
    if !numbered && answer_lines.is_empty() && question_lines.len() > 1 {
        answer_lines = question_lines.split_off(1);
    }

    let question = question_lines.join("\n").trim().to_string();
    let answer = answer_lines.join("\n").trim().to_string();

    if question.is_empty() && answer.is_empty() {
        return None;
    }
    Some(QuestionAnswerPair { question, answer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(question: &str, answer: &str) -> QuestionAnswerPair {
        QuestionAnswerPair {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn parse_numbered_blocks() {
        let input =
            "1. Question: What is 2+2?\nAnswer: 4\n\n2. Question: Capital of France?\nAnswer: Paris";
        assert_eq!(
            parse(input),
            vec![pair("What is 2+2?", "4"), pair("Capital of France?", "Paris")]
        );
    }

    #[test]
    fn parse_skips_preamble_noise() {
        let input = "Here are the extracted question-answer pairs:\n\n1. Question: Q1\nAnswer: A1";
        assert_eq!(parse(input), vec![pair("Q1", "A1")]);
    }

    #[test]
    fn parse_multiline_answer_runs_to_next_header() {
        let input = "1. Question: Derive it\nAnswer: x = 1\ny = 2\n\n2. Question: Next\nAnswer: ok";
        let pairs = parse(input);
        assert_eq!(pairs[0].answer, "x = 1\ny = 2");
        assert_eq!(pairs[1].question, "Next");
    }

    #[test]
    fn parse_bare_numbered_entries() {
        let input = "1. What is Rust?\nAnswer: A language\n2. Why?\nAnswer: Because";
        assert_eq!(
            parse(input),
            vec![pair("What is Rust?", "A language"), pair("Why?", "Because")]
        );
    }

    #[test]
    fn parse_abbreviated_and_lowercase_labels() {
        let input = "1. q: First?\na: One\n\n2. QUESTION: Second?\nANSWER: Two";
        assert_eq!(parse(input), vec![pair("First?", "One"), pair("Second?", "Two")]);
    }

    #[test]
    fn parse_label_without_colon() {
        let input = "1. Question: Short one?\nAnswer short";
        assert_eq!(parse(input), vec![pair("Short one?", "short")]);
    }

    #[test]
    fn parse_nested_numbering() {
        let input = "1. 1. Question: Doubly numbered?\nAnswer: yes";
        assert_eq!(parse(input), vec![pair("Doubly numbered?", "yes")]);
    }

    #[test]
    fn parse_blank_line_fallback() {
        let input = "Question: Q1\nAnswer: A1\n\nQuestion: Q2\nAnswer: A2";
        assert_eq!(parse(input), vec![pair("Q1", "A1"), pair("Q2", "A2")]);
    }

    #[test]
    fn parse_fallback_without_answer_label() {
        let input = "What is the largest ocean?\nPacific Ocean";
        assert_eq!(parse(input), vec![pair("What is the largest ocean?", "Pacific Ocean")]);
    }

    #[test]
    fn parse_keeps_block_with_one_empty_field() {
        let input = "1. Question: Orphaned?\n\n2. Question: Paired?\nAnswer: yes";
        assert_eq!(parse(input), vec![pair("Orphaned?", ""), pair("Paired?", "yes")]);
    }

    #[test]
    fn parse_preserves_order() {
        let input = "1. Question: C?\nAnswer: 3\n2. Question: A?\n3. Question: B?\nAnswer: 2";
        let pairs = parse(input);
        let questions: Vec<&str> = pairs.iter().map(|p| p.question.as_str()).collect();
        assert_eq!(questions, vec!["C?", "A?", "B?"]);
    }

    #[test]
    fn parse_unicode_whitespace() {
        let input = "1.\u{a0}Question:\u{a0}Wide?\nAnswer:\u{3000}yes\u{3000}";
        assert_eq!(parse(input), vec![pair("Wide?", "yes")]);
    }

    #[test]
    fn parse_unparseable_input_yields_nothing() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("   \n\t\n \u{a0} "), vec![]);
    }

    // Pins legacy behavior for doubled labels: only one label is stripped.
    #[test]
    fn parse_double_label_strips_once() {
        let input = "1. Question Question: x\nAnswer: y";
        assert_eq!(parse(input), vec![pair("Question: x", "y")]);
    }

    #[test]
    fn apple_is_not_an_answer_label() {
        let input = "1. Question: Fruit?\nApple pie\nAnswer: cherry";
        let pairs = parse(input);
        assert_eq!(pairs[0].question, "Fruit?\nApple pie");
        assert_eq!(pairs[0].answer, "cherry");
    }

    #[test]
    fn render_matches_convention() {
        let rendered = render(&[pair("Q1", "A1"), pair("Q2", "A2")]);
        assert_eq!(rendered, "1. Question: Q1\nAnswer: A1\n\n2. Question: Q2\nAnswer: A2");
    }

    #[test]
    fn reparse_of_rendered_pairs_is_identity() {
        let pairs = vec![
            pair("What is 2+2?", "4"),
            pair("Capital of France?", "Paris"),
            pair("Largest ocean?", "Pacific Ocean"),
        ];
        assert_eq!(parse(&render(&pairs)), pairs);
    }
}
