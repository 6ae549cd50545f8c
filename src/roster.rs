//! Roster CSV and target JSON files.
//!
//! The CSV dialect is deliberately small: a header row naming the columns,
//! comma-separated cells, no quoting. Required columns are
//! `species,hp,atk,def,spa,spd,spe,nature,ability`; `language` (default `en`)
//! and `item` (default none) are optional.

use crate::breeding::{Item, Nature, Parent, Stat, StatBlock, Target, NUM_STATS};
use crate::error::{DataError, DataResult};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

/// Header written for roster files.
pub const ROSTER_HEADER: &str = "species,hp,atk,def,spa,spd,spe,nature,ability,language";

/// Language assumed when a roster row has none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Column positions resolved from a header row.
struct Columns {
    species: usize,
    stats: [usize; NUM_STATS],
    nature: usize,
    ability: usize,
    language: Option<usize>,
    item: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> DataResult<Self> {
        let names: Vec<String> = header.split(',').map(|c| c.trim().to_ascii_lowercase()).collect();
        let find = |name: &str| names.iter().position(|n| n == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| DataError::Csv {
                line: 1,
                reason: format!("missing column {name:?}"),
            })
        };

        let mut stats = [0usize; NUM_STATS];
        for stat in Stat::ALL {
            stats[stat.index()] = require(stat.name())?;
        }
        Ok(Self {
            species: require("species")?,
            stats,
            nature: require("nature")?,
            ability: require("ability")?,
            language: find("language"),
            item: find("item"),
        })
    }
}

/// Parse a roster from CSV text.
///
/// # Errors
///
/// Returns [`DataError::Csv`] with the line number of the first bad row.
pub fn parse_roster(text: &str) -> DataResult<Vec<Parent>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, header)) = lines.next() else {
        return Ok(Vec::new());
    };
    let columns = Columns::from_header(header)?;

    lines
        .map(|(line_no, line)| {
            parse_row(&columns, line).map_err(|e| match e {
                DataError::Csv { reason, .. } => DataError::Csv {
                    line: line_no,
                    reason,
                },
                other => DataError::Csv {
                    line: line_no,
                    reason: other.to_string(),
                },
            })
        })
        .collect()
}

fn parse_row(columns: &Columns, line: &str) -> DataResult<Parent> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    let cell = |idx: usize| {
        cells.get(idx).copied().ok_or_else(|| DataError::Csv {
            line: 0,
            reason: format!("expected at least {} cells, found {}", idx + 1, cells.len()),
        })
    };

    let mut values = [0u8; NUM_STATS];
    for stat in Stat::ALL {
        let raw = cell(columns.stats[stat.index()])?;
        let value: u32 = raw.parse().map_err(|_| DataError::Csv {
            line: 0,
            reason: format!("{stat} is not a number: {raw:?}"),
        })?;
        values[stat.index()] = u8::try_from(value).map_err(|_| DataError::StatOutOfRange { value })?;
    }

    let language = match columns.language.and_then(|idx| cells.get(idx)) {
        Some(lang) if !lang.is_empty() => (*lang).to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    };
    let item = match columns.item.and_then(|idx| cells.get(idx)) {
        Some(raw) => raw.parse::<Item>()?,
        None => Item::None,
    };

    let parent = Parent::new(
        cell(columns.species)?,
        StatBlock::new(values)?,
        cell(columns.nature)?.parse::<Nature>()?,
        cell(columns.ability)?,
    )
    .with_language(language);
    Ok(parent.with_item(item))
}

/// Read a roster CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any row is malformed.
pub fn read_roster(path: &Path) -> DataResult<Vec<Parent>> {
    parse_roster(&fs::read_to_string(path)?)
}

/// Render parents as roster CSV rows (no header, no trailing newline).
#[must_use]
pub fn format_roster_rows(parents: &[Parent]) -> String {
    parents
        .iter()
        .map(|p| {
            let ivs = p.ivs.to_array();
            format!(
                "{},{},{},{},{},{},{},{},{},{}",
                p.species,
                ivs[0],
                ivs[1],
                ivs[2],
                ivs[3],
                ivs[4],
                ivs[5],
                p.nature,
                p.ability,
                p.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write parents to a roster CSV.
///
/// With `append`, rows go to the end of an existing file and the header is
/// only written when the file is missing or empty.
///
/// # Errors
///
/// Returns an error on any I/O failure.
pub fn write_roster(path: &Path, parents: &[Parent], append: bool) -> DataResult<()> {
    let existing_len = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let needs_header = !append || existing_len == 0;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    if append && existing_len > 0 && !ends_with_newline(path)? {
        file.write_all(b"\n")?;
    }
    if needs_header {
        writeln!(file, "{ROSTER_HEADER}")?;
    }
    if !parents.is_empty() {
        writeln!(file, "{}", format_roster_rows(parents))?;
    }
    Ok(())
}

fn ends_with_newline(path: &Path) -> DataResult<bool> {
    let contents = fs::read(path)?;
    Ok(contents.last().is_none_or(|&b| b == b'\n'))
}

/// Parse a target from JSON and validate its thresholds.
///
/// # Errors
///
/// Returns an error for malformed JSON or a threshold above 31.
pub fn parse_target<R: Read>(reader: R) -> DataResult<Target> {
    let target: Target = serde_json::from_reader(reader)?;
    target.validate()?;
    Ok(target)
}

/// Read a target JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid target.
pub fn read_target(path: &Path) -> DataResult<Target> {
    parse_target(fs::File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
species,hp,atk,def,spa,spd,spe,nature,ability,language
Eevee,31,0,5,10,20,31,Timid,Run Away,en

Arcanine,1,2,3,4,5,6,adamant,Intimidate,
";

    #[test]
    fn test_parse_sample() {
        let roster = parse_roster(SAMPLE).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].species, "Eevee");
        assert_eq!(roster[0].ivs.to_array(), [31, 0, 5, 10, 20, 31]);
        assert_eq!(roster[0].nature, Nature::Timid);
        assert_eq!(roster[0].ability, "Run Away");
        assert_eq!(roster[1].nature, Nature::Adamant);
        // Empty language cell falls back to the default
        assert_eq!(roster[1].language.as_deref(), Some(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_columns_can_be_reordered() {
        let text = "nature,ability,species,spe,spd,spa,def,atk,hp,item\nBold,Limber,Ditto,6,5,4,3,2,1,Power Anklet\n";
        let roster = parse_roster(text).unwrap();
        assert_eq!(roster[0].ivs.to_array(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(roster[0].item, Item::Power(Stat::Spe));
        assert_eq!(roster[0].language.as_deref(), Some(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_missing_column_is_error() {
        let err = parse_roster("species,hp,atk\nEevee,1,2\n").unwrap_err();
        assert!(matches!(err, DataError::Csv { line: 1, .. }));
    }

    #[test]
    fn test_bad_rows_report_line() {
        let text = "species,hp,atk,def,spa,spd,spe,nature,ability\nEevee,1,2,3,4,5,6,Timid,Run Away\nEevee,1,2,3,4,5,40,Timid,Run Away\n";
        let err = parse_roster(text).unwrap_err();
        assert!(matches!(err, DataError::Csv { line: 3, .. }), "{err}");

        let text = "species,hp,atk,def,spa,spd,spe,nature,ability\nEevee,1,2,3,4,5,6,Grumpy,Run Away\n";
        let err = parse_roster(text).unwrap_err();
        assert!(err.to_string().contains("Grumpy"));

        let text = "species,hp,atk,def,spa,spd,spe,nature,ability\nEevee,1,2\n";
        assert!(parse_roster(text).is_err());
    }

    #[test]
    fn test_empty_text_is_empty_roster() {
        assert!(parse_roster("").unwrap().is_empty());
        assert!(parse_roster("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_format_rows_round_trip() {
        let roster = parse_roster(SAMPLE).unwrap();
        let text = format!("{ROSTER_HEADER}\n{}\n", format_roster_rows(&roster));
        assert_eq!(parse_roster(&text).unwrap(), roster);
    }

    #[test]
    fn test_parse_target() {
        let target = parse_target(r#"{"ivs":{"hp":25,"spe":31},"ability":"Static"}"#.as_bytes()).unwrap();
        assert_eq!(target.ivs.len(), 2);
        assert_eq!(target.ability.as_deref(), Some("Static"));
        assert!(parse_target(r#"{"ivs":{"hp":99}}"#.as_bytes()).is_err());
        assert!(parse_target("{}".as_bytes()).unwrap().ivs.is_empty());
    }
}
