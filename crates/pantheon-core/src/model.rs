//! Core data model types for pantheon.
//!
//! These are the fundamental types shared by the parser, the scorer, and
//! the HTTP surface: axes, trait letters, question records, and tallies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Number of questions in a full quiz set.
pub const FULL_SET_SIZE: usize = 20;

/// Number of questions in the one-question-at-a-time flow.
pub const SINGLE_FLOW_SIZE: usize = 12;

/// One of the four opposing-pair dimensions of a type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    EI,
    SN,
    TF,
    JP,
}

impl Axis {
    /// All axes in type-code order.
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// The axis assigned to a 1-based question slot. Slots cycle
    /// `EI, SN, TF, JP`; slot 0 is treated like slot 1.
    pub fn for_slot(slot: usize) -> Axis {
        Self::ALL[slot.saturating_sub(1) % Self::ALL.len()]
    }

    /// The two trait letters of this axis, first letter first.
    pub fn letters(self) -> [TraitLetter; 2] {
        [self.first(), self.second()]
    }

    pub fn first(self) -> TraitLetter {
        match self {
            Axis::EI => TraitLetter::E,
            Axis::SN => TraitLetter::S,
            Axis::TF => TraitLetter::T,
            Axis::JP => TraitLetter::J,
        }
    }

    pub fn second(self) -> TraitLetter {
        match self {
            Axis::EI => TraitLetter::I,
            Axis::SN => TraitLetter::N,
            Axis::TF => TraitLetter::F,
            Axis::JP => TraitLetter::P,
        }
    }

    /// Whether `letter` belongs to this axis.
    pub fn contains(self, letter: TraitLetter) -> bool {
        letter.axis() == self
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::EI => write!(f, "EI"),
            Axis::SN => write!(f, "SN"),
            Axis::TF => write!(f, "TF"),
            Axis::JP => write!(f, "JP"),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EI" => Ok(Axis::EI),
            "SN" => Ok(Axis::SN),
            "TF" => Ok(Axis::TF),
            "JP" => Ok(Axis::JP),
            other => Err(format!("unknown axis: {other}")),
        }
    }
}

/// A single trait letter. Serialized as the bare letter (`"E"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraitLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl TraitLetter {
    pub const ALL: [TraitLetter; 8] = [
        TraitLetter::E,
        TraitLetter::I,
        TraitLetter::S,
        TraitLetter::N,
        TraitLetter::T,
        TraitLetter::F,
        TraitLetter::J,
        TraitLetter::P,
    ];

    pub fn axis(self) -> Axis {
        match self {
            TraitLetter::E | TraitLetter::I => Axis::EI,
            TraitLetter::S | TraitLetter::N => Axis::SN,
            TraitLetter::T | TraitLetter::F => Axis::TF,
            TraitLetter::J | TraitLetter::P => Axis::JP,
        }
    }

    /// The other letter of the same axis.
    pub fn opposite(self) -> TraitLetter {
        let axis = self.axis();
        if axis.first() == self {
            axis.second()
        } else {
            axis.first()
        }
    }

    /// Exact match on one of the eight upper-case letters, as used for
    /// tally keys.
    pub fn from_key(key: &str) -> Option<TraitLetter> {
        Self::ALL.into_iter().find(|l| l.as_str() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraitLetter::E => "E",
            TraitLetter::I => "I",
            TraitLetter::S => "S",
            TraitLetter::N => "N",
            TraitLetter::T => "T",
            TraitLetter::F => "F",
            TraitLetter::J => "J",
            TraitLetter::P => "P",
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TraitLetter::E => 'E',
            TraitLetter::I => 'I',
            TraitLetter::S => 'S',
            TraitLetter::N => 'N',
            TraitLetter::T => 'T',
            TraitLetter::F => 'F',
            TraitLetter::J => 'J',
            TraitLetter::P => 'P',
        }
    }
}

impl fmt::Display for TraitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for TraitLetter {
    type Err = String;

    /// Case-insensitive; tolerates whitespace and wrapping brackets such as
    /// `"[E]"`, which generators tend to copy from format templates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s
            .trim()
            .trim_matches(|c: char| matches!(c, '[' | ']' | '(' | ')' | '*' | '`'))
            .trim();
        match cleaned.to_uppercase().as_str() {
            "E" => Ok(TraitLetter::E),
            "I" => Ok(TraitLetter::I),
            "S" => Ok(TraitLetter::S),
            "N" => Ok(TraitLetter::N),
            "T" => Ok(TraitLetter::T),
            "F" => Ok(TraitLetter::F),
            "J" => Ok(TraitLetter::J),
            "P" => Ok(TraitLetter::P),
            _ => Err(format!("unknown trait letter: {s}")),
        }
    }
}

/// One selectable answer and the trait letter it counts toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub text: String,
    #[serde(rename = "type")]
    pub trait_letter: TraitLetter,
}

impl AnswerChoice {
    pub fn new(text: impl Into<String>, trait_letter: TraitLetter) -> Self {
        Self {
            text: text.into(),
            trait_letter,
        }
    }
}

/// A question with exactly two answers drawn from opposite sides of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answers: [AnswerChoice; 2],
}

impl QuestionRecord {
    /// The axis both answers belong to.
    pub fn axis(&self) -> Axis {
        self.answers[0].trait_letter.axis()
    }
}

/// The ordered questions of one full test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSet {
    pub questions: Vec<QuestionRecord>,
}

/// Per-letter answer counts accumulated by the caller.
///
/// Deserializes from a JSON object keyed by letter. Keys must be one of the
/// eight upper-case letters exactly; anything else (`"e"`, `"[E]"`) is
/// dropped. Absent letters count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, u32>", into = "HashMap<String, u32>")]
pub struct AnswerTally {
    counts: HashMap<TraitLetter, u32>,
}

impl AnswerTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: TraitLetter) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    pub fn set(&mut self, letter: TraitLetter, count: u32) {
        self.counts.insert(letter, count);
    }

    /// Count one answer toward `letter`.
    pub fn record(&mut self, letter: TraitLetter) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}

impl From<HashMap<String, u32>> for AnswerTally {
    fn from(raw: HashMap<String, u32>) -> Self {
        let mut tally = AnswerTally::new();
        for (key, count) in raw {
            match TraitLetter::from_key(&key) {
                Some(letter) => tally.set(letter, count),
                None => tracing::debug!("ignoring unknown tally key {key:?}"),
            }
        }
        tally
    }
}

impl From<AnswerTally> for HashMap<String, u32> {
    fn from(tally: AnswerTally) -> Self {
        TraitLetter::ALL
            .iter()
            .map(|l| (l.to_string(), tally.get(*l)))
            .collect()
    }
}

impl FromStr for AnswerTally {
    type Err = String;

    /// Parse the compact `E=3,I=1,N=4` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tally = AnswerTally::new();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected LETTER=COUNT, got: {pair}"))?;
            let letter: TraitLetter = key.parse()?;
            let count: u32 = value
                .trim()
                .parse()
                .map_err(|_| format!("invalid count for {letter}: {}", value.trim()))?;
            tally.set(letter, count);
        }
        Ok(tally)
    }
}
