//! Cache management command implementations

use colored::Colorize;

use crate::cache::CacheStorage;
use crate::error::Result;
use crate::output::formatters::format_bytes;

/// Run the cache status command
pub fn status() -> Result<()> {
    let storage = CacheStorage::open()?;
    let stats = storage.stats()?;

    println!("{}\n", "Response Cache".bold());
    println!("  Entries: {} ({} expired)", stats.total_entries, stats.expired_entries);
    println!("  Valid:   {}", stats.valid_entries);
    println!("  Size:    {}", format_bytes(stats.total_size_bytes as u64));

    Ok(())
}

/// Run the cache clear command
pub fn clear() -> Result<()> {
    let storage = CacheStorage::open()?;
    let removed = storage.clear_all()?;

    println!("{} Cleared {} cache entries.", "✓".green(), removed);
    Ok(())
}

/// Run the cache path command
pub fn path() -> Result<()> {
    println!("{}", CacheStorage::cache_dir()?.display());
    Ok(())
}
