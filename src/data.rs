//! Loading labeled rating grids from comma-separated text.
//!
//! The expected layout matches the classic rating-matrix export: the first
//! line is a header whose first cell is ignored and whose remaining cells
//! are item labels; every following line is one user, with the user label
//! in the first cell and one numeric rating per item after it (`0` means
//! unrated). The loader is a swappable collaborator: the core only ever
//! sees the resulting [`RatingMatrix`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{RecomendarError, Result};
use crate::ratings::RatingMatrix;

/// Reads a labeled rating grid from any reader.
///
/// # Examples
///
/// ```
/// use recomendar::data;
///
/// let csv = "user,Alien,Brazil\nada,5,0\ngrace,3,4\n";
/// let matrix = data::load_ratings(csv.as_bytes()).expect("well-formed grid");
///
/// assert_eq!(matrix.shape(), (2, 2));
/// assert_eq!(matrix.user_label(1), "grace");
/// assert_eq!(matrix.item_label(1), "Brazil");
/// assert!(!matrix.is_rated(0, 1));
/// ```
///
/// # Errors
///
/// Returns an error on I/O failure, on a missing or item-less header, on a
/// row whose width differs from the header's item count (never silently
/// truncated or padded), on an unparseable rating cell, or when no user
/// rows follow the header.
pub fn load_ratings<R: Read>(reader: R) -> Result<RatingMatrix> {
    let mut lines = BufReader::new(reader).lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(RecomendarError::empty_input("rating data without a header line")),
    };
    let item_labels: Vec<String> = header
        .trim_end_matches('\r')
        .split(',')
        .skip(1) // corner cell above the user-label column
        .map(str::to_string)
        .collect();
    if item_labels.is_empty() {
        return Err(RecomendarError::empty_input("header without item columns"));
    }

    let mut user_labels = Vec::new();
    let mut rows = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let line_number = offset + 2; // 1-based, counting the header

        let mut cells = line.split(',');
        let label = cells.next().unwrap_or("").to_string();

        let mut row = Vec::with_capacity(item_labels.len());
        for cell in cells {
            let value: f32 = cell.trim().parse().map_err(|_| RecomendarError::Parse {
                line: line_number,
                message: format!("invalid rating value {cell:?}"),
            })?;
            row.push(value);
        }
        if row.len() != item_labels.len() {
            return Err(RecomendarError::shape_mismatch(
                &format!("ratings on line {line_number}"),
                item_labels.len(),
                row.len(),
            ));
        }

        user_labels.push(label);
        rows.push(row);
    }

    RatingMatrix::from_rows(rows)?.with_labels(user_labels, item_labels)
}

/// Reads a labeled rating grid from a file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its content is not a
/// well-formed rating grid (see [`load_ratings`]).
pub fn load_ratings_path<P: AsRef<Path>>(path: P) -> Result<RatingMatrix> {
    let file = File::open(path)?;
    load_ratings(file)
}
