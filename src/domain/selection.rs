//! Selection resolution — shared by the CLI flags, the interactive chooser,
//! and the programmatic JSON request, so dedup/order/validation semantics
//! are identical regardless of caller.

use crate::domain::catalog::Catalog;
use crate::domain::error::InstallError;

/// Parse a comma-separated list of 1-based menu indices.
///
/// Tokens are trimmed; empty tokens are skipped. Duplicates are dropped
/// while preserving first-seen order.
///
/// # Errors
///
/// Returns [`InstallError::InvalidToken`] if a token is not a non-negative
/// integer literal, or [`InstallError::OutOfRange`] if an index falls
/// outside `[1, option_count]`.
pub fn resolve_by_index(raw: &str, option_count: usize) -> Result<Vec<usize>, InstallError> {
    let mut picked = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(InstallError::InvalidToken(token.to_string()));
        }
        let index: usize = token
            .parse()
            .map_err(|_| InstallError::InvalidToken(token.to_string()))?;
        if index < 1 || index > option_count {
            return Err(InstallError::OutOfRange {
                index,
                max: option_count,
            });
        }
        if !picked.contains(&index) {
            picked.push(index);
        }
    }
    Ok(picked)
}

/// Validate software display names against the catalog.
///
/// Accepts any iterator of raw entries (a split comma string from the CLI,
/// or a JSON array from the programmatic caller). Entries are trimmed and
/// empty ones dropped; duplicates are removed preserving first-occurrence
/// order.
///
/// # Errors
///
/// Returns [`InstallError::UnknownSoftware`] listing every entry absent from
/// the catalog, or [`InstallError::EmptySelection`] if nothing remains after
/// trimming.
pub fn resolve_by_name<'a, I>(entries: I, catalog: &Catalog) -> Result<Vec<String>, InstallError>
where
    I: IntoIterator<Item = &'a str>,
{
    let requested: Vec<&str> = entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    let unknown: Vec<String> = requested
        .iter()
        .filter(|name| catalog.lookup(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(InstallError::UnknownSoftware {
            names: unknown,
            valid: catalog.valid_names(),
        });
    }

    let mut unique: Vec<String> = Vec::new();
    for name in requested {
        if !unique.iter().any(|seen| seen.as_str() == name) {
            unique.push(name.to_string());
        }
    }
    if unique.is_empty() {
        return Err(InstallError::EmptySelection);
    }
    Ok(unique)
}
