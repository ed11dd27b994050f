//! The `pantheon prompt` command.

use anyhow::Result;

use pantheon_core::model::Axis;
use pantheon_core::prompt::{full_set_prompt, single_question_prompt};

pub fn execute(number: Option<usize>, category: Option<Axis>) -> Result<()> {
    let prompt = match (number, category) {
        (Some(number), Some(axis)) => single_question_prompt(number, axis),
        _ => full_set_prompt(),
    };
    println!("{prompt}");
    Ok(())
}
