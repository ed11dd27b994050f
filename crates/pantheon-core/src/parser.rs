//! Generated-text parsers.
//!
//! Turns free-form generator output into question records. Neither parser
//! returns an error: anything that does not match the grammar is logged and
//! replaced by placeholder content, so callers always get a complete,
//! well-formed result.

use thiserror::Error;

use crate::model::{AnswerChoice, Axis, QuestionRecord, QuizSet, TraitLetter, FULL_SET_SIZE};

/// Prefix of every question line.
pub const QUESTION_MARKER: &str = "질문";
/// Label of the first answer.
pub const ANSWER_A_LABEL: &str = "답변A";
/// Label of the second answer.
pub const ANSWER_B_LABEL: &str = "답변B";
/// Label of a trait-letter segment.
pub const TYPE_LABEL: &str = "유형";
/// Separates the segments of a line.
pub const DELIMITER: char = '|';

/// Separates a label from its value. The full-width colon shows up often
/// enough in Korean output to accept it too.
const LABEL_MARKERS: &[char] = &[':', '：'];

pub const PLACEHOLDER_ANSWER_A: &str = "답변 A";
pub const PLACEHOLDER_ANSWER_B: &str = "답변 B";
/// Question text used when a single-question response has none.
pub const MISSING_QUESTION_TEXT: &str = "질문을 생성하지 못했습니다";

/// Why a full-set candidate line was skipped.
#[derive(Debug, Error, PartialEq, Eq)]
enum LineRejection {
    #[error("expected 5 segments, found {0}")]
    SegmentCount(usize),

    #[error("segment {0} has no label marker")]
    MissingLabel(usize),

    #[error("segment {0} is empty")]
    EmptyField(usize),

    #[error("unrecognised trait letter {0:?}")]
    InvalidTrait(String),

    #[error("trait letters {found_a}/{found_b} do not match slot axis {expected}")]
    AxisMismatch {
        expected: Axis,
        found_a: TraitLetter,
        found_b: TraitLetter,
    },
}

/// Parse a full-set response into exactly [`FULL_SET_SIZE`] questions.
///
/// Accepted lines keep their order; the remaining slots are filled with
/// placeholders for those slot numbers. A candidate line is accepted only if
/// its trait letters are the pair for the slot it would occupy.
pub fn parse_full_set(response: &str) -> QuizSet {
    let mut questions = Vec::with_capacity(FULL_SET_SIZE);

    for raw in response.lines() {
        if questions.len() >= FULL_SET_SIZE {
            break;
        }
        let line = strip_decoration(raw);
        if !line.starts_with(QUESTION_MARKER) {
            continue;
        }

        let slot = questions.len() + 1;
        match parse_full_set_line(line, Axis::for_slot(slot)) {
            Ok(record) => questions.push(record),
            Err(reason) => {
                tracing::warn!(slot, %reason, "skipping malformed question line: {line}");
            }
        }
    }

    let accepted = questions.len();
    if accepted < FULL_SET_SIZE {
        tracing::info!(
            accepted,
            filled = FULL_SET_SIZE - accepted,
            "filling missing questions with placeholders"
        );
    }
    questions.extend((accepted + 1..=FULL_SET_SIZE).map(placeholder_question));

    QuizSet { questions }
}

/// Placeholder record for a 1-based slot.
pub fn placeholder_question(slot: usize) -> QuestionRecord {
    let axis = Axis::for_slot(slot);
    QuestionRecord {
        question: format!("{QUESTION_MARKER} {slot}"),
        answers: [
            AnswerChoice::new(PLACEHOLDER_ANSWER_A, axis.first()),
            AnswerChoice::new(PLACEHOLDER_ANSWER_B, axis.second()),
        ],
    }
}

// 질문N: q | 답변A: a | 유형: X | 답변B: b | 유형: Y
fn parse_full_set_line(line: &str, axis: Axis) -> Result<QuestionRecord, LineRejection> {
    let segments: Vec<&str> = line.split(DELIMITER).collect();
    if segments.len() != 5 {
        return Err(LineRejection::SegmentCount(segments.len()));
    }

    let values = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let (_, value) = segment
                .split_once(LABEL_MARKERS)
                .ok_or(LineRejection::MissingLabel(i))?;
            let value = value.trim().trim_matches('*').trim();
            if value.is_empty() {
                return Err(LineRejection::EmptyField(i));
            }
            Ok(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let letter_a = parse_letter(values[2])?;
    let letter_b = parse_letter(values[4])?;
    if !axis.contains(letter_a) || letter_b != letter_a.opposite() {
        return Err(LineRejection::AxisMismatch {
            expected: axis,
            found_a: letter_a,
            found_b: letter_b,
        });
    }

    Ok(QuestionRecord {
        question: values[0].to_string(),
        answers: [
            AnswerChoice::new(values[1], letter_a),
            AnswerChoice::new(values[3], letter_b),
        ],
    })
}

fn parse_letter(value: &str) -> Result<TraitLetter, LineRejection> {
    value
        .parse()
        .map_err(|_| LineRejection::InvalidTrait(value.to_string()))
}

/// Parse a single-question response for the given axis.
///
/// Missing question text, answer text, or trait letters are replaced with
/// fixed fallbacks; trait letters always come out as the two letters of
/// `axis`.
pub fn parse_single_question(response: &str, axis: Axis) -> QuestionRecord {
    let mut question = String::new();
    let mut answer_a = AnswerLine::default();
    let mut answer_b = AnswerLine::default();

    for raw in response.lines() {
        let line = strip_decoration(raw);
        if let Some(rest) = strip_label(line, ANSWER_A_LABEL) {
            answer_a = AnswerLine::parse(rest, axis);
        } else if let Some(rest) = strip_label(line, ANSWER_B_LABEL) {
            answer_b = AnswerLine::parse(rest, axis);
        } else if let Some(rest) = strip_label(line, QUESTION_MARKER) {
            question = rest.to_string();
        }
    }

    if question.is_empty() {
        tracing::warn!(%axis, "generated text had no question line");
        question = MISSING_QUESTION_TEXT.to_string();
    }

    let (letter_a, letter_b) = match (answer_a.letter, answer_b.letter) {
        (Some(a), Some(b)) if a != b => (a, b),
        (Some(a), _) => (a, a.opposite()),
        (None, Some(b)) => (b.opposite(), b),
        (None, None) => (axis.first(), axis.second()),
    };

    QuestionRecord {
        question,
        answers: [
            AnswerChoice::new(answer_a.text_or(PLACEHOLDER_ANSWER_A), letter_a),
            AnswerChoice::new(answer_b.text_or(PLACEHOLDER_ANSWER_B), letter_b),
        ],
    }
}

#[derive(Debug, Default)]
struct AnswerLine {
    text: String,
    letter: Option<TraitLetter>,
}

impl AnswerLine {
    /// `text | 유형: X`; the trait segment is optional.
    fn parse(rest: &str, axis: Axis) -> Self {
        let (text, trait_segment) = match rest.split_once(DELIMITER) {
            Some((text, segment)) => (text, Some(segment)),
            None => (rest, None),
        };

        let letter = trait_segment.and_then(|segment| {
            let value = segment
                .split_once(LABEL_MARKERS)
                .map_or(segment, |(_, v)| v);
            match value.parse::<TraitLetter>() {
                Ok(letter) if axis.contains(letter) => Some(letter),
                _ => {
                    tracing::debug!(%axis, "ignoring trait segment {segment:?}");
                    None
                }
            }
        });

        Self {
            text: text.trim().to_string(),
            letter,
        }
    }

    fn text_or(self, fallback: &str) -> String {
        if self.text.is_empty() {
            fallback.to_string()
        } else {
            self.text
        }
    }
}

/// If `line` starts with `label`, optionally followed by digits or spaces and
/// then a label marker, return the trimmed text after the marker.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(label)?;
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit() || c.is_whitespace() || c == '*');
    let rest = rest.strip_prefix(LABEL_MARKERS)?;
    Some(rest.trim_start_matches('*').trim())
}

/// Trim whitespace and leading markdown bullets or emphasis.
fn strip_decoration(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| matches!(c, '-' | '*' | '#' | '>') || c.is_whitespace())
}
