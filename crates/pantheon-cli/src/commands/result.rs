//! The `pantheon result` command.

use anyhow::Result;

use pantheon_core::model::{AnswerTally, Axis};
use pantheon_core::persona::resolve;
use pantheon_core::scoring::score;

use super::OutputFormat;

pub fn execute(tally: &AnswerTally, format: OutputFormat) -> Result<()> {
    let code = score(tally);
    let persona = resolve(code.as_str());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(persona)?),
        OutputFormat::Text => {
            let counts: Vec<String> = Axis::ALL
                .iter()
                .map(|axis| {
                    let [a, b] = axis.letters();
                    format!("{a}={} {b}={}", tally.get(a), tally.get(b))
                })
                .collect();
            println!("Tally: {}", counts.join(", "));
            println!("{} {}: {}", persona.emoji, persona.type_code, persona.display_name);
            println!("{}", persona.description);
            println!("Traits: {}", persona.traits.join(", "));
            if let Some(url) = persona.image_url {
                println!("Image: {url}");
            }
        }
    }

    Ok(())
}
