//! The `pantheon personas` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use pantheon_core::persona::all_personas;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Type", "", "Persona", "Traits"]);

    for persona in all_personas() {
        table.add_row(vec![
            Cell::new(persona.type_code),
            Cell::new(persona.emoji),
            Cell::new(persona.display_name),
            Cell::new(persona.traits.join(", ")),
        ]);
    }

    println!("{table}");
    Ok(())
}
