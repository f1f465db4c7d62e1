//! A1-notation addresses and the grid rectangles the API works in.
//!
//! A1 endpoints are 1-based and may be a full cell (`B7`), a bare column
//! (`C`), or a bare row (`12`); the API's [`GridRange`] and
//! [`DimensionRange`] are 0-based half-open. The translators here convert
//! between the two, failing fast on anything malformed instead of
//! guessing.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::component::FormatComponent;

/// Errors that can occur when parsing one A1 endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum A1ParseError {
    Empty,
    InvalidColumn,
    InvalidRow,
    TrailingCharacters,
}

impl fmt::Display for A1ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            A1ParseError::Empty => "empty A1 address",
            A1ParseError::InvalidColumn => "invalid column in A1 address",
            A1ParseError::InvalidRow => "invalid row in A1 address",
            A1ParseError::TrailingCharacters => "trailing characters in A1 address",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for A1ParseError {}

/// Errors that can occur when translating an A1 range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeParseError {
    /// More than one `:` separator.
    TooManyParts,
    /// Start bound below or right of the end bound.
    Inverted,
    /// A dimension range mixed row and column endpoints.
    MixedDimensions,
    Endpoint(A1ParseError),
}

impl fmt::Display for RangeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeParseError::TooManyParts => f.write_str("too many ':' separators in range"),
            RangeParseError::Inverted => f.write_str("range start lies past its end"),
            RangeParseError::MixedDimensions => {
                f.write_str("range must be all rows or all columns")
            }
            RangeParseError::Endpoint(e) => write!(f, "invalid endpoint in range: {}", e),
        }
    }
}

impl std::error::Error for RangeParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RangeParseError::Endpoint(e) => Some(e),
            _ => None,
        }
    }
}

impl From<A1ParseError> for RangeParseError {
    fn from(err: A1ParseError) -> RangeParseError {
        RangeParseError::Endpoint(err)
    }
}

/// One A1 endpoint: column letters, row number, or both, each 1-based.
/// `$` anchors are accepted and ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// 1-based row, absent for bare-column endpoints.
    pub row: Option<u32>,
    /// 1-based column, absent for bare-row endpoints.
    pub col: Option<u32>,
}

impl CellAddress {
    /// Full cell endpoint, e.g. `B7`.
    pub const fn cell(row: u32, col: u32) -> CellAddress {
        CellAddress {
            row: Some(row),
            col: Some(col),
        }
    }

    /// Bare row endpoint, e.g. `7`.
    pub const fn row(row: u32) -> CellAddress {
        CellAddress {
            row: Some(row),
            col: None,
        }
    }

    /// Bare column endpoint, e.g. `B`.
    pub const fn column(col: u32) -> CellAddress {
        CellAddress {
            row: None,
            col: Some(col),
        }
    }

    /// The label form, `B7`-style.
    pub fn to_a1(&self) -> String {
        self.to_string()
    }
}

impl FromStr for CellAddress {
    type Err = A1ParseError;

    fn from_str(a1: &str) -> Result<CellAddress, A1ParseError> {
        let s = a1.trim();
        if s.is_empty() {
            return Err(A1ParseError::Empty);
        }

        let bytes = s.as_bytes();
        let mut idx = 0usize;
        if bytes.get(idx) == Some(&b'$') {
            idx += 1;
        }

        let col_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_alphabetic() {
            idx += 1;
        }
        let col = if idx > col_start {
            let letters = &s[col_start..idx];
            Some(column_letter_to_number(letters).map_err(|_| A1ParseError::InvalidColumn)?)
        } else {
            None
        };

        // A second `$` only anchors a row that follows column letters.
        let row_anchored = col.is_some() && bytes.get(idx) == Some(&b'$');
        if row_anchored {
            idx += 1;
        }

        let row_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if row_anchored && idx == row_start {
            return Err(A1ParseError::InvalidRow);
        }
        let row = if idx > row_start {
            let row: u32 = s[row_start..idx]
                .parse()
                .map_err(|_| A1ParseError::InvalidRow)?;
            if row == 0 {
                return Err(A1ParseError::InvalidRow);
            }
            Some(row)
        } else {
            None
        };

        if idx != bytes.len() {
            return Err(A1ParseError::TrailingCharacters);
        }
        if row.is_none() && col.is_none() {
            return Err(A1ParseError::Empty);
        }

        Ok(CellAddress { row, col })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(col) = self.col {
            f.write_str(&number_to_column_letter(col))?;
        }
        if let Some(row) = self.row {
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Converts `"A"`-style column letters to the 1-based column number.
pub fn column_letter_to_number(letters: &str) -> Result<u32, RangeParseError> {
    if letters.is_empty() {
        return Err(RangeParseError::Endpoint(A1ParseError::InvalidColumn));
    }
    let mut col: u32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return Err(RangeParseError::Endpoint(A1ParseError::InvalidColumn));
        }
        let digit = (b.to_ascii_uppercase() - b'A') as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(digit))
            .ok_or(RangeParseError::Endpoint(A1ParseError::InvalidColumn))?;
    }
    Ok(col)
}

/// Converts a 1-based column number to `"A"`-style letters.
pub fn number_to_column_letter(col: u32) -> String {
    let mut n = col;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).expect("column letters are always valid UTF-8")
}

/// Rectangle on one sheet, 0-based with exclusive ends, mirroring the
/// API's `GridRange`. Absent bounds leave that side open.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GridRangeWire")]
pub struct GridRange {
    pub sheet_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

impl FormatComponent for GridRange {
    const ALIAS: &'static str = "gridRange";
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GridRangeWire {
    #[serde(default)]
    sheet_id: i64,
    #[serde(default)]
    start_row_index: Option<u32>,
    #[serde(default)]
    end_row_index: Option<u32>,
    #[serde(default)]
    start_column_index: Option<u32>,
    #[serde(default)]
    end_column_index: Option<u32>,
}

impl TryFrom<GridRangeWire> for GridRange {
    type Error = String;

    fn try_from(wire: GridRangeWire) -> Result<GridRange, String> {
        for (axis, start, end) in [
            ("row", wire.start_row_index, wire.end_row_index),
            ("column", wire.start_column_index, wire.end_column_index),
        ] {
            if let (Some(start), Some(end)) = (start, end) {
                if start > end {
                    return Err(format!(
                        "start {} index {} exceeds end index {}",
                        axis, start, end
                    ));
                }
            }
        }
        Ok(GridRange {
            sheet_id: wire.sheet_id,
            start_row_index: wire.start_row_index,
            end_row_index: wire.end_row_index,
            start_column_index: wire.start_column_index,
            end_column_index: wire.end_column_index,
        })
    }
}

/// Row or column orientation of a [`DimensionRange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Rows,
    Columns,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Rows => "ROWS",
            Dimension::Columns => "COLUMNS",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Span of whole rows or whole columns on one sheet, 0-based with an
/// exclusive end, mirroring the API's `DimensionRange`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DimensionRange {
    pub sheet_id: i64,
    pub dimension: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<u32>,
}

fn split_range(range: &str) -> Result<(&str, Option<&str>), RangeParseError> {
    let mut parts = range.trim().split(':');
    let start = parts.next().expect("split yields at least one part");
    let end = parts.next();
    if parts.next().is_some() {
        return Err(RangeParseError::TooManyParts);
    }
    Ok((start, end))
}

/// Translates an A1 range (`"A1:D6"`, `"A1"`, `"B:D"`, `"2:7"`) into the
/// [`GridRange`] covering it. A missing end endpoint repeats the start;
/// absent endpoint components leave the matching bounds open; a start
/// past its end is an error rather than silently swapped.
pub fn range_to_grid_range(range: &str, sheet_id: i64) -> Result<GridRange, RangeParseError> {
    let (start_label, end_label) = split_range(range)?;
    let start: CellAddress = start_label.parse()?;
    let end: CellAddress = match end_label {
        Some(label) => label.parse()?,
        None => start,
    };

    if let (Some(start_row), Some(end_row)) = (start.row, end.row) {
        if start_row > end_row {
            return Err(RangeParseError::Inverted);
        }
    }
    if let (Some(start_col), Some(end_col)) = (start.col, end.col) {
        if start_col > end_col {
            return Err(RangeParseError::Inverted);
        }
    }

    Ok(GridRange {
        sheet_id,
        start_row_index: start.row.map(|row| row - 1),
        end_row_index: end.row,
        start_column_index: start.col.map(|col| col - 1),
        end_column_index: end.col,
    })
}

/// Translates a pure row range (`"2:5"`, `"7"`) or pure column range
/// (`"B:D"`, `"C"`) into the [`DimensionRange`] covering it. Endpoints
/// carrying both a row and a column, or endpoints of different kinds,
/// are rejected.
pub fn range_to_dimension_range(
    range: &str,
    sheet_id: i64,
) -> Result<DimensionRange, RangeParseError> {
    let (start_label, end_label) = split_range(range)?;
    let start: CellAddress = start_label.parse()?;
    let end: CellAddress = match end_label {
        Some(label) => label.parse()?,
        None => start,
    };

    let (dimension, start_n, end_n) = match (start.row, start.col, end.row, end.col) {
        (Some(start_row), None, Some(end_row), None) => (Dimension::Rows, start_row, end_row),
        (None, Some(start_col), None, Some(end_col)) => (Dimension::Columns, start_col, end_col),
        _ => return Err(RangeParseError::MixedDimensions),
    };
    if start_n > end_n {
        return Err(RangeParseError::Inverted);
    }

    Ok(DimensionRange {
        sheet_id,
        dimension,
        start_index: Some(start_n - 1),
        end_index: Some(end_n),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_full_cell_addresses() {
        assert_eq!("B7".parse::<CellAddress>().unwrap(), CellAddress::cell(7, 2));
        assert_eq!("$B$7".parse::<CellAddress>().unwrap(), CellAddress::cell(7, 2));
        assert_eq!("B$7".parse::<CellAddress>().unwrap(), CellAddress::cell(7, 2));
        assert_eq!("bc32".parse::<CellAddress>().unwrap(), CellAddress::cell(32, 55));
    }

    #[test]
    fn parses_bare_rows_and_columns() {
        assert_eq!("C".parse::<CellAddress>().unwrap(), CellAddress::column(3));
        assert_eq!("12".parse::<CellAddress>().unwrap(), CellAddress::row(12));
        assert_eq!("$12".parse::<CellAddress>().unwrap(), CellAddress::row(12));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!("".parse::<CellAddress>(), Err(A1ParseError::Empty));
        assert_eq!("A0".parse::<CellAddress>(), Err(A1ParseError::InvalidRow));
        assert_eq!("A$".parse::<CellAddress>(), Err(A1ParseError::InvalidRow));
        assert_eq!("$A$".parse::<CellAddress>(), Err(A1ParseError::InvalidRow));
        assert_eq!("A1B".parse::<CellAddress>(), Err(A1ParseError::TrailingCharacters));
        assert_eq!("1A".parse::<CellAddress>(), Err(A1ParseError::TrailingCharacters));
        assert_eq!("$$5".parse::<CellAddress>(), Err(A1ParseError::TrailingCharacters));
    }

    #[test]
    fn address_labels_round_trip() {
        for label in ["A1", "BC32", "C", "12"] {
            assert_eq!(label.parse::<CellAddress>().unwrap().to_a1(), label);
        }
    }

    #[test]
    fn column_letters_are_bijective_base_26() {
        assert_eq!(column_letter_to_number("A").unwrap(), 1);
        assert_eq!(column_letter_to_number("Z").unwrap(), 26);
        assert_eq!(column_letter_to_number("AA").unwrap(), 27);
        assert_eq!(column_letter_to_number("AZ").unwrap(), 52);
        assert_eq!(column_letter_to_number("aa").unwrap(), 27);

        for col in [1u32, 2, 25, 26, 27, 52, 53, 701, 702, 703, 18278] {
            let letters = number_to_column_letter(col);
            assert_eq!(column_letter_to_number(&letters).unwrap(), col);
        }
        assert_eq!(number_to_column_letter(703), "AAA");
    }

    #[test]
    fn grid_range_translation_is_half_open() {
        assert_eq!(
            range_to_grid_range("A1:D6", 7).unwrap(),
            GridRange {
                sheet_id: 7,
                start_row_index: Some(0),
                end_row_index: Some(6),
                start_column_index: Some(0),
                end_column_index: Some(4),
            }
        );
    }

    #[test]
    fn single_cell_ranges_repeat_the_endpoint() {
        assert_eq!(
            range_to_grid_range("B7", 0).unwrap(),
            GridRange {
                sheet_id: 0,
                start_row_index: Some(6),
                end_row_index: Some(7),
                start_column_index: Some(1),
                end_column_index: Some(2),
            }
        );
    }

    #[test]
    fn open_bounds_stay_open() {
        assert_eq!(
            range_to_grid_range("B:D", 3).unwrap(),
            GridRange {
                sheet_id: 3,
                start_row_index: None,
                end_row_index: None,
                start_column_index: Some(1),
                end_column_index: Some(4),
            }
        );
        assert_eq!(
            range_to_grid_range("A1:D", 3).unwrap(),
            GridRange {
                sheet_id: 3,
                start_row_index: Some(0),
                end_row_index: None,
                start_column_index: Some(0),
                end_column_index: Some(4),
            }
        );
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        assert_eq!(range_to_grid_range("B:A", 0), Err(RangeParseError::Inverted));
        assert_eq!(range_to_grid_range("9:3", 0), Err(RangeParseError::Inverted));
        assert_eq!(range_to_grid_range("D6:A1", 0), Err(RangeParseError::Inverted));
    }

    #[test]
    fn extra_separators_are_rejected() {
        assert_eq!(range_to_grid_range("A1:B2:C3", 0), Err(RangeParseError::TooManyParts));
    }

    #[test]
    fn dimension_ranges_translate_per_kind() {
        assert_eq!(
            range_to_dimension_range("2:5", 4).unwrap(),
            DimensionRange {
                sheet_id: 4,
                dimension: Dimension::Rows,
                start_index: Some(1),
                end_index: Some(5),
            }
        );
        assert_eq!(
            range_to_dimension_range("B:D", 4).unwrap(),
            DimensionRange {
                sheet_id: 4,
                dimension: Dimension::Columns,
                start_index: Some(1),
                end_index: Some(4),
            }
        );
        assert_eq!(
            range_to_dimension_range("C", 4).unwrap(),
            DimensionRange {
                sheet_id: 4,
                dimension: Dimension::Columns,
                start_index: Some(2),
                end_index: Some(3),
            }
        );
    }

    #[test]
    fn mixed_dimension_ranges_are_rejected() {
        assert_eq!(range_to_dimension_range("A5:B", 0), Err(RangeParseError::MixedDimensions));
        assert_eq!(range_to_dimension_range("A5:B10", 0), Err(RangeParseError::MixedDimensions));
        assert_eq!(range_to_dimension_range("3:B", 0), Err(RangeParseError::MixedDimensions));
    }
}
