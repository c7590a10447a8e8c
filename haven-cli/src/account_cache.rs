//! Account cache file
//!
//! Signed-in accounts are kept in a JSON file between invocations. A missing
//! file is an empty cache.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use haven_core::auth::AccountCache;

pub fn load(path: &Path) -> Result<AccountCache> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AccountCache::default()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read account cache: {}", path.display()));
        }
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Account cache is not valid JSON: {}", path.display()))
}

pub fn save(path: &Path, cache: &AccountCache) -> Result<()> {
    let content = serde_json::to_string_pretty(cache)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write account cache: {}", path.display()))
}
