use crate::{Error, Result};

/// Resolve a user-supplied ordinal against a 1-based list of `count`
/// workspaces. Returns the zero-based index on success.
///
/// Pure input resolution; the prompt/response exchange lives in the CLI.
pub fn resolve_choice(input: &str, count: usize) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Selection("no input provided".to_string()));
    }

    let choice: usize = trimmed
        .parse()
        .map_err(|_| Error::Selection(format!("'{}' is not a number", trimmed)))?;

    if choice < 1 || choice > count {
        return Err(Error::Selection(format!(
            "choice must be between 1 and {}",
            count
        )));
    }
    Ok(choice - 1)
}
