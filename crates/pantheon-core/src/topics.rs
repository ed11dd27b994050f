//! Fixed topic and axis-description tables for question slots.

use crate::model::{Axis, SINGLE_FLOW_SIZE};

/// Situations assigned to the twelve slots of the one-question-at-a-time
/// flow. No two slots share a scenario.
const SLOT_TOPICS: [&str; SINGLE_FLOW_SIZE] = [
    "spending a free weekend after a long, busy week",
    "learning to use a new gadget or app for the first time",
    "a close friend asks for feedback on a plan you think is flawed",
    "preparing for a trip that starts in two weeks",
    "the first day on a new team at work or school",
    "reading instructions versus imagining how a product could be improved",
    "splitting a shared bill when one person ordered much more",
    "a deadline that is still a month away",
    "an invitation to a party where you only know the host",
    "describing a movie you just watched to someone else",
    "choosing between a stable offer and an exciting but uncertain one",
    "organising a desk, room, or digital files",
];

/// Used for any slot outside the hand-assigned range.
const FALLBACK_TOPIC: &str = "an ordinary situation from everyday life, work, or relationships";

/// The topic and axis guidance used to steer a single generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub topic: &'static str,
    pub axis_description: &'static str,
}

/// Topic for a 1-based slot, plus the description of the requested axis.
pub fn topic_for(slot: usize, axis: Axis) -> Topic {
    let topic = slot
        .checked_sub(1)
        .and_then(|i| SLOT_TOPICS.get(i))
        .copied()
        .unwrap_or(FALLBACK_TOPIC);

    Topic {
        topic,
        axis_description: axis_description_for(axis),
    }
}

pub fn axis_description_for(axis: Axis) -> &'static str {
    match axis {
        Axis::EI => "energy source: external engagement (E) vs. internal reflection (I)",
        Axis::SN => "information intake: concrete facts and experience (S) vs. patterns and possibilities (N)",
        Axis::TF => "decision making: objective logic (T) vs. personal values and harmony (F)",
        Axis::JP => "lifestyle: planned and decided (J) vs. flexible and spontaneous (P)",
    }
}
