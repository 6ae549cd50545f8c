//! Ingest command implementation.

use super::CliError;
use hgss_breed::ingest::ingest_save;
use hgss_breed::roster::write_roster;
use std::fs;
use std::path::Path;

/// Split a comma-separated species list, dropping blanks.
fn species_filter(species: Option<&str>) -> Vec<String> {
    species
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Execute the ingest command.
///
/// # Errors
///
/// Returns an error if the save cannot be read or the roster cannot be
/// written.
pub(crate) fn execute(save: &Path, species: Option<&str>, out: &Path) -> Result<(), CliError> {
    let bytes = fs::read(save)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", save.display())))?;

    let parents = ingest_save(&bytes, &species_filter(species));
    write_roster(out, &parents, out.exists())?;

    println!("Added {} parents to {}", parents.len(), out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_filter() {
        assert_eq!(species_filter(Some("Eevee, ditto,,")), ["Eevee", "ditto"]);
        assert!(species_filter(None).is_empty());
    }
}
