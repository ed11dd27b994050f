//! Generation prompts for the full quiz set and single questions.
//!
//! The response formats described here are the grammars that
//! [`crate::parser`] accepts, so both modules share the label constants.

use std::fmt::Write;

use crate::model::{Axis, FULL_SET_SIZE};
use crate::parser::{ANSWER_A_LABEL, ANSWER_B_LABEL, DELIMITER, QUESTION_MARKER, TYPE_LABEL};
use crate::topics::{axis_description_for, topic_for};

/// Maximum question length requested from the generator, in characters.
pub const MAX_QUESTION_CHARS: usize = 40;

/// Maximum answer length requested from the generator, in characters.
pub const MAX_ANSWER_CHARS: usize = 50;

/// System prompt sent alongside every quiz prompt.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an MBTI test expert creating questions for a personality test. Follow the response format exactly and output nothing else.";

/// Prompt asking for all twenty questions in one response.
pub fn full_set_prompt() -> String {
    let mut p = String::new();
    p.push_str("You are an MBTI test expert creating questions for a personality test.\n\n");
    p.push_str("[CRITICAL] You MUST respond ONLY in Korean.\n\n");
    let _ = writeln!(p, "Create {FULL_SET_SIZE} MBTI questions following these rules:\n");

    p.push_str("[REQUIREMENTS]\n");
    p.push_str("1. Create general life situation questions (NOT Greek mythology themed)\n");
    p.push_str("2. Questions should be about everyday life, work, relationships, hobbies, etc.\n");
    p.push_str("3. All content MUST be in Korean\n");
    let _ = writeln!(p, "4. Keep each question under {MAX_QUESTION_CHARS} Korean characters");
    let _ = writeln!(p, "5. Keep each answer under {MAX_ANSWER_CHARS} Korean characters");
    p.push_str("6. Make each question unique and different from typical MBTI questions\n\n");

    p.push_str("[QUESTION DISTRIBUTION]\n");
    for axis in Axis::ALL {
        let slots: Vec<String> = (1..=FULL_SET_SIZE)
            .filter(|&n| Axis::for_slot(n) == axis)
            .map(|n| n.to_string())
            .collect();
        let [a, b] = axis.letters();
        let _ = writeln!(
            p,
            "- Questions {}: {a} vs {b} ({})",
            slots.join(", "),
            axis_description_for(axis)
        );
    }

    p.push_str("\nResponse Format (in Korean, one question per line):\n");
    for n in 1..=4 {
        let _ = writeln!(p, "{}", format_line(n, Axis::for_slot(n), "[question]", "[answer]", "[answer]"));
    }
    let _ = writeln!(p, "... (continue to {QUESTION_MARKER}{FULL_SET_SIZE})");

    p.push_str("\nExample:\n");
    for slot in 1..=2 {
        let axis = Axis::for_slot(slot);
        let (question, answer_a, answer_b) = worked_example(axis);
        let _ = writeln!(p, "{}", format_line(slot, axis, question, answer_a, answer_b));
    }
    p
}

/// Prompt asking for one question on a fixed topic and axis.
pub fn single_question_prompt(slot: usize, axis: Axis) -> String {
    let topic = topic_for(slot, axis);
    let [a, b] = axis.letters();

    let mut p = String::new();
    p.push_str("You are an MBTI test expert creating one question for a personality test.\n\n");
    p.push_str("[CRITICAL] You MUST respond ONLY in Korean.\n\n");

    p.push_str("[REQUIREMENTS]\n");
    let _ = writeln!(p, "1. This is question number {slot}.");
    let _ = writeln!(p, "2. The question MUST be about this topic: {}", topic.topic);
    let _ = writeln!(p, "3. It must distinguish {a} from {b}: {}", topic.axis_description);
    let _ = writeln!(p, "4. Keep the question under {MAX_QUESTION_CHARS} Korean characters");
    let _ = writeln!(p, "5. Keep each answer under {MAX_ANSWER_CHARS} Korean characters");
    let _ = writeln!(p, "6. Answer A must reflect {a}, answer B must reflect {b}\n");

    p.push_str("Response Format (exactly three lines):\n");
    let _ = writeln!(p, "{QUESTION_MARKER}: [question]");
    let _ = writeln!(p, "{ANSWER_A_LABEL}: [answer] {DELIMITER} {TYPE_LABEL}: {a}");
    let _ = writeln!(p, "{ANSWER_B_LABEL}: [answer] {DELIMITER} {TYPE_LABEL}: {b}\n");

    let (question, answer_a, answer_b) = worked_example(axis);
    p.push_str("Example:\n");
    let _ = writeln!(p, "{QUESTION_MARKER}: {question}");
    let _ = writeln!(p, "{ANSWER_A_LABEL}: {answer_a} {DELIMITER} {TYPE_LABEL}: {a}");
    let _ = writeln!(p, "{ANSWER_B_LABEL}: {answer_b} {DELIMITER} {TYPE_LABEL}: {b}");
    p
}

/// A sample question for each axis, first-letter answer first.
fn worked_example(axis: Axis) -> (&'static str, &'static str, &'static str) {
    match axis {
        Axis::EI => (
            "주말에 에너지를 충전하는 방법은?",
            "친구들을 만나거나 사람들과 어울린다",
            "집에서 혼자만의 시간을 보낸다",
        ),
        Axis::SN => (
            "대화할 때 주로",
            "구체적인 사실과 경험을 이야기한다",
            "추상적인 개념이나 가능성을 이야기한다",
        ),
        Axis::TF => (
            "친구가 고민을 털어놓을 때",
            "현실적인 해결책을 제시한다",
            "먼저 마음을 공감해 준다",
        ),
        Axis::JP => (
            "여행을 준비할 때",
            "일정을 미리 꼼꼼히 계획한다",
            "그때그때 즉흥적으로 정한다",
        ),
    }
}

fn format_line(slot: usize, axis: Axis, question: &str, answer_a: &str, answer_b: &str) -> String {
    let [a, b] = axis.letters();
    format!(
        "{QUESTION_MARKER}{slot}: {question} {DELIMITER} {ANSWER_A_LABEL}: {answer_a} {DELIMITER} {TYPE_LABEL}: {a} {DELIMITER} {ANSWER_B_LABEL}: {answer_b} {DELIMITER} {TYPE_LABEL}: {b}"
    )
}
