//! Grid file formats.
//!
//! Two formats are supported: a human-editable ascii layout and a packed
//! bit layout. Both carry the grid dimensions in a header.

pub mod ascii;
pub mod binary;

use crate::grid::Grid;
use life_core::Result;
use std::path::Path;

/// On-disk grid format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    Ascii,
    Binary,
}

impl GridFormat {
    /// `.bgol` files are binary, everything else is ascii
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bgol") => GridFormat::Binary,
            _ => GridFormat::Ascii,
        }
    }
}

/// Load a grid, picking the format from the file extension
pub fn load(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    match GridFormat::from_path(path) {
        GridFormat::Ascii => ascii::load(path),
        GridFormat::Binary => binary::load(path),
    }
}

/// Save a grid, picking the format from the file extension
pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    match GridFormat::from_path(path) {
        GridFormat::Ascii => ascii::save(path, grid),
        GridFormat::Binary => binary::save(path, grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoo;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("life-world-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(GridFormat::from_path(Path::new("glider.gol")), GridFormat::Ascii);
        assert_eq!(GridFormat::from_path(Path::new("glider.bgol")), GridFormat::Binary);
        assert_eq!(GridFormat::from_path(Path::new("GLIDER.BGOL")), GridFormat::Binary);
        assert_eq!(GridFormat::from_path(Path::new("glider")), GridFormat::Ascii);
    }

    #[test]
    fn test_load_save_by_extension() {
        let grid = zoo::light_weight_spaceship().unwrap();

        for name in ["lwss.gol", "lwss.bgol"] {
            let path = temp_path(name);
            save(&path, &grid).unwrap();
            let loaded = load(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(loaded, grid);
        }
    }
}
