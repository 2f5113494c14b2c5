use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::grid::Grid;

/// Reads a grid from a plain-text wall file.
pub fn load_text(path: impl AsRef<Path>) -> Result<Grid, GridError> {
    Grid::parse(&fs::read_to_string(path)?)
}

/// Writes the text rendition, without any solution overlay, so
/// [`load_text`] reads it back unchanged.
pub fn save_text(grid: &Grid, path: impl AsRef<Path>) -> Result<(), GridError> {
    fs::write(path, grid.render(None))?;
    Ok(())
}

/// Reads a grid from its JSON form.
pub fn load_json(path: impl AsRef<Path>) -> Result<Grid, GridError> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Writes the grid as pretty-printed JSON.
pub fn save_json(grid: &Grid, path: impl AsRef<Path>) -> Result<(), GridError> {
    fs::write(path, serde_json::to_string_pretty(grid)?)?;
    Ok(())
}
