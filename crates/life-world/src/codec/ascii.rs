//! Ascii grid format.
//!
//! ```text
//! <width> <height>\n
//! <width chars of ' ' or '#'>\n   (repeated height times)
//! ```

use crate::grid::Grid;
use life_core::{Cell, Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

pub fn read<R: Read>(mut reader: R) -> Result<Grid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let header_end = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| Error::format("missing header line"))?;
    let (width, height) = parse_header(&bytes[..header_end])?;

    let mut body = bytes[header_end + 1..].iter();
    let total = width as usize * height as usize;
    let mut cells = Vec::with_capacity(total.min(bytes.len()));

    for y in 0..height {
        let line = y as usize + 2;
        for x in 0..width {
            let byte = body.next().ok_or_else(|| {
                Error::format(format!("unexpected end of file on line {}", line))
            })?;
            let cell = Cell::from_char(char::from(*byte)).ok_or_else(|| {
                Error::format(format!(
                    "unexpected character {:?} on line {}, column {}",
                    char::from(*byte),
                    line,
                    x + 1
                ))
            })?;
            cells.push(cell);
        }

        match body.next() {
            Some(b'\n') => {}
            _ => {
                return Err(Error::format(format!(
                    "expected newline after {} cells on line {}",
                    width, line
                )))
            }
        }
    }

    Grid::from_cells(width, height, cells)
}

fn parse_header(header: &[u8]) -> Result<(u32, u32)> {
    let header = std::str::from_utf8(header)
        .map_err(|_| Error::format("header is not valid UTF-8"))?;

    let Some((width, height)) = header.split_once(' ') else {
        return Err(Error::format(format!(
            "header must be '<width> <height>', got {:?}",
            header
        )));
    };

    Ok((parse_dimension("width", width)?, parse_dimension("height", height)?))
}

/// Plain decimal digits only: no sign, padding or other whitespace
fn parse_dimension(name: &str, field: &str) -> Result<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::format(format!(
            "{} {:?} is not a non-negative decimal number",
            name, field
        )));
    }

    field
        .parse()
        .map_err(|_| Error::format(format!("{} {} is too large", name, field)))
}

pub fn write<W: Write>(mut writer: W, grid: &Grid) -> Result<()> {
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    for row in grid.rows() {
        let line: String = row.iter().map(|cell| cell.to_char()).collect();
        writeln!(writer, "{}", line)?;
    }
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
        "Loaded ascii grid"
    );
    Ok(grid)
}

pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    write(BufWriter::new(File::create(path)?), grid)?;
    debug!(path = %path.display(), "Saved ascii grid");
    Ok(())
}
