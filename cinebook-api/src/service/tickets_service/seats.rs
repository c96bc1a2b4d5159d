//!
//! Seat ids have form `<row letter><column number>`, e.g. `A1` or `C12`.
//! Rows are counted from `A`, columns from 1.
//!

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub rows: i32,
    pub cols: i32,
}

fn parse_seat_id(seat_id: &str) -> Option<(i32, i32)> {
    let mut chars = seat_id.chars();
    let row = chars.next()?.to_ascii_uppercase();
    if !row.is_ascii_uppercase() {
        return None;
    }

    let col = chars.as_str();
    if col.is_empty() || !col.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let col = col.parse::<i32>().ok().filter(|col| *col >= 1)?;

    Some((row as i32 - 'A' as i32, col))
}

///
/// Validates seat ids and removes repeated ones.
/// Seats are checked against the layout when it is known.
///
/// ### Returns
/// seat ids in canonical form, in the order of first occurrence
///
/// ### Errors
/// - [Error::Validation] when
///     - there are no seats
///     - seat id is malformed
///     - seat is outside of the layout
///
pub fn normalize_seat_ids(
    seat_ids: &[String],
    layout: Option<Layout>,
) -> Result<Vec<String>, Error> {
    if seat_ids.is_empty() {
        return Err(Error::Validation("at least one seat is required".to_string()));
    }

    let mut normalized = Vec::with_capacity(seat_ids.len());
    for seat_id in seat_ids {
        let (row, col) = parse_seat_id(seat_id.trim())
            .ok_or_else(|| Error::Validation(format!("invalid seat id '{seat_id}'")))?;

        if let Some(layout) = layout {
            if row >= layout.rows || col > layout.cols {
                return Err(Error::Validation(format!(
                    "seat '{seat_id}' is outside of the theatre"
                )));
            }
        }

        let row = char::from(b'A' + row as u8);
        let seat_id = format!("{row}{col}");
        if !normalized.contains(&seat_id) {
            normalized.push(seat_id);
        }
    }

    Ok(normalized)
}
