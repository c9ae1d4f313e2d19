//! Caller-side export of an extraction result: pad the three sequences to a
//! common length and write them as `Name,Price,Rating` CSV. The core never
//! touches the file system; only this layer and the binary do.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::domain::ExtractionResult;

/// Rows padded to the longest sequence. Absent cells are `None`; the three
/// columns at one index are not guaranteed to describe the same product.
pub fn padded_rows(result: &ExtractionResult) -> Vec<[Option<&str>; 3]> {
    let len = result
        .names
        .len()
        .max(result.prices.len())
        .max(result.ratings.len());

    (0..len)
        .map(|i| {
            [
                result.names.get(i).map(String::as_str),
                result.prices.get(i).map(String::as_str),
                result.ratings.get(i).map(String::as_str),
            ]
        })
        .collect()
}

pub fn write_csv<W: Write>(mut w: W, result: &ExtractionResult) -> io::Result<()> {
    writeln!(w, "Name,Price,Rating")?;
    for row in padded_rows(result) {
        let cells: Vec<&str> = row.iter().map(|cell| cell.unwrap_or("")).collect();
        write_row(&mut w, &cells)?;
    }
    Ok(())
}

pub fn export_csv(path: &Path, result: &ExtractionResult) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_csv(&mut file, result)?;
    file.flush()
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(w: &mut W, cells: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in cells {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
