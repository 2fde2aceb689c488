//! JSON import/export module for curricula and study progress.
//! Curricula are the ordered content lists items are created from; progress
//! snapshots are plain dumps of review item state.

use crate::error::Result;
use crate::models::{Curriculum, ReviewItem};
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports a curriculum to a JSON file at the specified path.
pub fn export_curriculum<P: AsRef<Path>>(curriculum: &Curriculum, path: P) -> Result<()> {
    let json_string = serde_json::to_string_pretty(curriculum)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a curriculum from a JSON file. Entry order in the file is the
/// curriculum order.
pub fn import_curriculum<P: AsRef<Path>>(path: P) -> Result<Curriculum> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let curriculum: Curriculum = serde_json::from_str(&contents)?;

    info!(
        "Curriculum '{}' ({} items) imported from '{}'",
        curriculum.name,
        curriculum.items.len(),
        path.as_ref().display()
    );
    Ok(curriculum)
}

/// Writes a snapshot of item states, e.g. for backup or a dashboard.
pub fn export_progress<P: AsRef<Path>>(items: &[ReviewItem], path: P) -> Result<()> {
    let json_string = serde_json::to_string_pretty(items)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}
