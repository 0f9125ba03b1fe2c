//! Interactive loot shell: pick a container, then loot and list in a loop.
//!
//! The shell is generic over its input/output streams so sessions can be
//! scripted in tests; `main` wires it to stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::Result;
use stowage_inventory::{Container, ContainerRegistry, ItemCatalog};

pub fn run(
    catalog: &ItemCatalog,
    registry: &ContainerRegistry,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    print_summary(catalog, registry, output)?;
    writeln!(output)?;

    // The session works on its own deep copy straight from the registry.
    let Some(mut session) = select_container(registry, input, output)? else {
        return Ok(());
    };
    menu_loop(catalog, &mut session, input, output)
}

fn print_summary(
    catalog: &ItemCatalog,
    registry: &ContainerRegistry,
    output: &mut impl Write,
) -> Result<()> {
    writeln!(
        output,
        "Initialised {} items including {} containers.\n",
        catalog.len() + registry.len(),
        registry.len()
    )?;
    writeln!(output, "Items:")?;
    write!(output, "{}", catalog.render())?;
    writeln!(output)?;
    writeln!(output, "Containers:")?;
    write!(output, "{}", registry.render_all())?;
    Ok(())
}

/// Read one trimmed line; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buf.trim().to_string()))
    }
}

fn select_container(
    registry: &ContainerRegistry,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Container>> {
    loop {
        write!(output, "Enter the name of the container: ")?;
        output.flush()?;
        let Some(name) = read_line(input)? else {
            return Ok(None);
        };
        match registry.find(&name) {
            Some(container) => return Ok(Some(container)),
            None => writeln!(output, "\"{name}\" not found. Try again.")?,
        }
    }
}

fn menu_loop(
    catalog: &ItemCatalog,
    session: &mut Container,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        writeln!(output, "==================================")?;
        writeln!(output, "Enter your choice:")?;
        writeln!(output, "1. Loot item.")?;
        writeln!(output, "2. List looted items.")?;
        writeln!(output, "0. Quit.")?;
        writeln!(output, "==================================")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => loot_item(catalog, session, input, output)?,
            "2" => write!(output, "{}", session.list_items())?,
            "0" => {
                writeln!(output, "Exiting.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Try again.")?,
        }
    }
}

fn loot_item(
    catalog: &ItemCatalog,
    session: &mut Container,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        write!(output, "Enter the name of the item: ")?;
        output.flush()?;
        let Some(name) = read_line(input)? else {
            return Ok(());
        };
        let Some(item) = catalog.find(&name) else {
            writeln!(output, "\"{name}\" not found. Try again.")?;
            continue;
        };

        // Rejection is a normal outcome: report it and return to the menu.
        match session.add_item(item) {
            Ok(placement) => writeln!(
                output,
                "Success! Item \"{}\" stored in container \"{}\".",
                placement.item, placement.container
            )?,
            Err(err) => writeln!(output, "Failure! {err}.")?,
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stowage_inventory::{
        CatalogConfig, ContainerSpec, ItemSpec, RegistryConfig,
    };

    fn catalog() -> ItemCatalog {
        ItemCatalog::build(CatalogConfig {
            items: vec![
                ItemSpec {
                    name: "Rope".to_string(),
                    weight: 5,
                },
                ItemSpec {
                    name: "Anvil".to_string(),
                    weight: 8,
                },
            ],
        })
    }

    fn registry() -> ContainerRegistry {
        ContainerRegistry::build(RegistryConfig {
            containers: vec![ContainerSpec {
                name: "Backpack".to_string(),
                tare_weight: 2,
                capacity: 10,
            }],
            ..RegistryConfig::default()
        })
    }

    fn run_script(script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&catalog(), &registry(), &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn loot_then_list_then_quit() {
        let transcript = run_script("Backpack\n1\nRope\n2\n0\n");

        assert!(transcript.contains("Initialised 3 items including 1 containers."));
        assert!(
            transcript.contains("Success! Item \"Rope\" stored in container \"Backpack\".")
        );
        assert!(transcript.contains(
            "Backpack (total weight: 7, empty weight: 2, capacity: 5/10)"
        ));
    }

    #[test]
    fn rejected_loot_is_reported_not_fatal() {
        let transcript = run_script("Backpack\n1\nRope\n1\nAnvil\n0\n");
        assert!(transcript
            .contains("Failure! item \"Anvil\" does not fit in container \"Backpack\"."));
    }

    #[test]
    fn unknown_names_reprompt() {
        let transcript = run_script("Satchel\nBackpack\n1\nCandle\nRope\n0\n");
        assert!(transcript.contains("\"Satchel\" not found. Try again."));
        assert!(transcript.contains("\"Candle\" not found. Try again."));
        assert!(transcript.contains("Success! Item \"Rope\""));
    }

    #[test]
    fn end_of_input_ends_the_session_cleanly() {
        let transcript = run_script("Backpack\n");
        assert!(transcript.contains("Enter your choice:"));
    }
}
