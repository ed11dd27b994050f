//! Tally scoring into a four-letter type code.

use crate::model::{AnswerTally, Axis};
use crate::persona::TypeCode;

/// Score a tally into a type code.
///
/// For each axis the first letter wins only with a strictly greater count;
/// ties go to the second letter (I, N, F, P).
pub fn score(tally: &AnswerTally) -> TypeCode {
    let [ei, sn, tf, jp] = Axis::ALL.map(|axis| {
        if tally.get(axis.first()) > tally.get(axis.second()) {
            axis.first()
        } else {
            axis.second()
        }
    });
    TypeCode::from_letters(ei, sn, tf, jp)
}
