//! Packed bit grid format.
//!
//! Bytes 0-3 hold the width and bytes 4-7 the height, both native-endian
//! `u32`. The cells follow row-major, eight per byte, least significant bit
//! first. Padding bits in the final byte are zero.

use crate::grid::Grid;
use life_core::{Cell, Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

const HEADER_LEN: usize = 8;

pub fn read<R: Read>(mut reader: R) -> Result<Grid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() < HEADER_LEN {
        return Err(Error::format(format!(
            "truncated header: expected {} bytes, got {}",
            HEADER_LEN,
            bytes.len()
        )));
    }

    let width = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let height = u32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let payload = &bytes[HEADER_LEN..];

    let total = u64::from(width) * u64::from(height);
    let needed = total.div_ceil(8);
    if (payload.len() as u64) < needed {
        return Err(Error::format(format!(
            "truncated payload: {}x{} grid needs {} bytes, got {}",
            width,
            height,
            needed,
            payload.len()
        )));
    }

    let cells = (0..total as usize)
        .map(|i| Cell::from((payload[i / 8] >> (i % 8)) & 1 == 1))
        .collect();

    Grid::from_cells(width, height, cells)
}

pub fn write<W: Write>(mut writer: W, grid: &Grid) -> Result<()> {
    writer.write_all(&grid.width().to_ne_bytes())?;
    writer.write_all(&grid.height().to_ne_bytes())?;

    let packed: Vec<u8> = grid
        .cells()
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .fold(0u8, |byte, (bit, _)| byte | (1 << bit))
        })
        .collect();
    writer.write_all(&packed)?;
    writer.flush()?;
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let grid = read(BufReader::new(File::open(path)?))?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded binary grid"
    );
    Ok(grid)
}

pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    write(BufWriter::new(File::create(path)?), grid)?;
    debug!(path = %path.display(), "Saved binary grid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoo;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = width.to_ne_bytes().to_vec();
        bytes.extend_from_slice(&height.to_ne_bytes());
        bytes
    }

    #[test]
    fn test_write_glider_layout() {
        let mut out = Vec::new();
        write(&mut out, &zoo::glider().unwrap()).unwrap();

        // Cells .#. ..# ### in row-major order, least significant bit first
        let mut expected = header(3, 3);
        expected.extend_from_slice(&[0b1110_0010, 0b0000_0001]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_read_ignores_padding_and_trailing_bytes() {
        let mut bytes = header(3, 1);
        bytes.extend_from_slice(&[0b1111_1101, 0xAB]);
        let grid = read(Cursor::new(bytes)).unwrap();
        assert_eq!(grid, Grid::from_alive(3, 1, &[(0, 0), (2, 0)]).unwrap());
    }

    #[test]
    fn test_empty_grid() {
        let mut out = Vec::new();
        write(&mut out, &Grid::new(0, 5)).unwrap();
        assert_eq!(out.len(), HEADER_LEN);
        assert_eq!(read(Cursor::new(out)).unwrap(), Grid::new(0, 5));
    }

    #[test]
    fn test_truncated_header() {
        let result = read(Cursor::new(vec![3, 0, 0]));
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_truncated_payload() {
        let mut bytes = header(4, 4);
        bytes.push(0xFF);
        assert!(matches!(read(Cursor::new(bytes)), Err(Error::Format(_))));

        // A huge header with no payload must not try to allocate the grid
        let bytes = header(u32::MAX, u32::MAX);
        assert!(matches!(read(Cursor::new(bytes)), Err(Error::Format(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(load("/nonexistent/grid.bgol"), Err(Error::Io(_))));
    }

    proptest! {
        #[test]
        fn prop_round_trip(w in 0u32..20, h in 0u32..20, seed in any::<u64>()) {
            let grid = Grid::random(w, h, 0.5, &mut ChaCha8Rng::seed_from_u64(seed));

            let mut buffer = Vec::new();
            write(&mut buffer, &grid).unwrap();
            let expected_len = HEADER_LEN + ((w * h) as usize).div_ceil(8);
            prop_assert_eq!(buffer.len(), expected_len);
            prop_assert_eq!(read(Cursor::new(buffer)).unwrap(), grid);
        }
    }
}
