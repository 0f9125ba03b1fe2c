//! Tabular catalog files: comma-separated fields, first row is a header.
//!
//! Loading favours partial success: a malformed row is skipped with a
//! warning and the rest of the file still loads.

use stowage_inventory::{CompositeSpec, ContainerSpec, ItemSpec, MagicSpec};

/// Data rows of a table: header and blank lines dropped, fields split on
/// commas and trimmed.
fn data_rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line.split(',').map(str::trim).collect()))
}

fn parse_weight(raw: &str, line: usize, file_kind: &str) -> Option<u32> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(line, value = %raw, "skipping {file_kind} row: not a weight");
            None
        }
    }
}

/// `name,weight` rows.
pub fn items_from_table(text: &str) -> Vec<ItemSpec> {
    data_rows(text)
        .filter_map(|(line, fields)| match fields.as_slice() {
            [name, weight] => Some(ItemSpec {
                name: (*name).to_string(),
                weight: parse_weight(weight, line, "item")?,
            }),
            _ => {
                tracing::warn!(line, "skipping item row: expected name,weight");
                None
            }
        })
        .collect()
}

/// `name,empty_weight,capacity` rows.
pub fn containers_from_table(text: &str) -> Vec<ContainerSpec> {
    data_rows(text)
        .filter_map(|(line, fields)| match fields.as_slice() {
            [name, tare, capacity] => Some(ContainerSpec {
                name: (*name).to_string(),
                tare_weight: parse_weight(tare, line, "container")?,
                capacity: parse_weight(capacity, line, "container")?,
            }),
            _ => {
                tracing::warn!(line, "skipping container row: expected name,empty,capacity");
                None
            }
        })
        .collect()
}

/// `mother,member,member,...` rows.
pub fn composites_from_table(text: &str) -> Vec<CompositeSpec> {
    data_rows(text)
        .filter_map(|(line, fields)| match fields.as_slice() {
            [mother, members @ ..] if !members.is_empty() => Some(CompositeSpec {
                name: (*mother).to_string(),
                members: members.iter().map(|m| (*m).to_string()).collect(),
            }),
            _ => {
                tracing::warn!(line, "skipping composite row: expected mother,member,...");
                None
            }
        })
        .collect()
}

/// `magic_name,source_name` rows.
pub fn magic_from_table(text: &str) -> Vec<MagicSpec> {
    data_rows(text)
        .filter_map(|(line, fields)| match fields.as_slice() {
            [name, source] => Some(MagicSpec {
                name: (*name).to_string(),
                source: (*source).to_string(),
            }),
            _ => {
                tracing::warn!(line, "skipping magic row: expected magic_name,source_name");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_blank_lines_are_skipped() {
        let items = items_from_table("Name,Weight\nRope,5\n\nAnvil,8\n");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Rope");
        assert_eq!(items[1].weight, 8);
    }

    #[test]
    fn fields_are_trimmed() {
        let items = items_from_table("Name,Weight\n  Rope , 5 \n");
        assert_eq!(items[0].name, "Rope");
        assert_eq!(items[0].weight, 5);
    }

    #[test]
    fn malformed_rows_are_dropped_and_the_rest_load() {
        let containers =
            containers_from_table("Name,Empty,Capacity\nBackpack,2,10\nBroken,heavy,10\nPouch,1,3\n");
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[1].name, "Pouch");
    }

    #[test]
    fn composite_rows_take_a_variable_member_list() {
        let composites = composites_from_table("Mother,Members\nRig,Backpack,Pouch\nLonely\n");
        assert_eq!(composites.len(), 1);
        assert_eq!(composites[0].members, vec!["Backpack", "Pouch"]);
    }

    #[test]
    fn magic_rows_pair_new_name_with_source() {
        let magic = magic_from_table("Magic,Source\nEnchanted Backpack,Backpack\n");
        assert_eq!(magic[0].name, "Enchanted Backpack");
        assert_eq!(magic[0].source, "Backpack");
    }
}
