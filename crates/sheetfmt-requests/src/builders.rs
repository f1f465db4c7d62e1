//! Builders that turn A1 ranges and format components into requests.
//!
//! Each builder does request construction only; dispatching the batch is
//! the caller's concern. Builders validate their inputs up front, so a
//! returned request is always well formed.

use thiserror::Error;

use sheetfmt_model::{
    range_to_dimension_range, range_to_grid_range, CellFormat, DataValidationRule, Dimension,
    FormatComponent, FormatError, RangeParseError,
};

use crate::requests::{
    CellData, DimensionProperties, GridProperties, RepeatCellRequest, Request, SheetProperties,
    UpdateDimensionPropertiesRequest, UpdateSheetPropertiesRequest,
};

/// Errors from request builders.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error(transparent)]
    Range(#[from] RangeParseError),
    #[error(transparent)]
    Component(#[from] FormatError),
    #[error("must specify at least one of rows and cols")]
    NothingFrozen,
    #[error("range '{range}' selects {actual}, expected {expected}")]
    WrongDimension {
        expected: Dimension,
        actual: Dimension,
        range: String,
    },
}

/// `repeatCell` applying `format` to every cell of `range`, masked to
/// exactly the fields the format carries.
pub fn format_cell_range(
    sheet_id: i64,
    range: &str,
    format: &CellFormat,
) -> Result<Request, RequestError> {
    let grid_range = range_to_grid_range(range, sheet_id)?;
    Ok(Request::RepeatCell(RepeatCellRequest {
        range: grid_range,
        cell: CellData {
            user_entered_format: Some(format.to_wire()),
            ..Default::default()
        },
        fields: format.affected_fields("userEnteredFormat").join(","),
    }))
}

/// One `repeatCell` per `(range, format)` pair, in order.
pub fn format_cell_ranges(
    sheet_id: i64,
    formats: &[(&str, &CellFormat)],
) -> Result<Vec<Request>, RequestError> {
    formats
        .iter()
        .map(|(range, format)| format_cell_range(sheet_id, range, format))
        .collect()
}

/// `repeatCell` setting or, with `None`, clearing the validation rule on
/// every cell of `range`. A set rule is masked to exactly the fields it
/// carries; clearing masks the whole `dataValidation` so the rule really
/// is removed rather than left untouched.
pub fn set_data_validation_for_cell_range(
    sheet_id: i64,
    range: &str,
    rule: Option<&DataValidationRule>,
) -> Result<Request, RequestError> {
    let grid_range = range_to_grid_range(range, sheet_id)?;
    let (cell, fields) = match rule {
        Some(rule) => (
            CellData {
                data_validation: Some(rule.to_wire()),
                ..Default::default()
            },
            rule.affected_fields("dataValidation").join(","),
        ),
        None => (CellData::default(), "dataValidation".to_string()),
    };
    Ok(Request::RepeatCell(RepeatCellRequest {
        range: grid_range,
        cell,
        fields,
    }))
}

/// One validation `repeatCell` per `(range, rule)` pair, in order.
pub fn set_data_validation_for_cell_ranges(
    sheet_id: i64,
    rules: &[(&str, Option<&DataValidationRule>)],
) -> Result<Vec<Request>, RequestError> {
    rules
        .iter()
        .map(|(range, rule)| set_data_validation_for_cell_range(sheet_id, range, *rule))
        .collect()
}

fn dimension_pixel_size(
    sheet_id: i64,
    range: &str,
    expected: Dimension,
    pixel_size: u32,
) -> Result<Request, RequestError> {
    let dimension_range = range_to_dimension_range(range, sheet_id)?;
    if dimension_range.dimension != expected {
        return Err(RequestError::WrongDimension {
            expected,
            actual: dimension_range.dimension,
            range: range.to_string(),
        });
    }
    Ok(Request::UpdateDimensionProperties(
        UpdateDimensionPropertiesRequest {
            range: dimension_range,
            properties: DimensionProperties { pixel_size },
            fields: "pixelSize".to_string(),
        },
    ))
}

/// `updateDimensionProperties` resizing the rows of `range`, e.g. `"2:5"`.
pub fn set_row_height(sheet_id: i64, range: &str, height: u32) -> Result<Request, RequestError> {
    dimension_pixel_size(sheet_id, range, Dimension::Rows, height)
}

/// One resize per `(range, height)` pair, in order.
pub fn set_row_heights(
    sheet_id: i64,
    heights: &[(&str, u32)],
) -> Result<Vec<Request>, RequestError> {
    heights
        .iter()
        .map(|(range, height)| set_row_height(sheet_id, range, *height))
        .collect()
}

/// `updateDimensionProperties` resizing the columns of `range`, e.g. `"B:D"`.
pub fn set_column_width(sheet_id: i64, range: &str, width: u32) -> Result<Request, RequestError> {
    dimension_pixel_size(sheet_id, range, Dimension::Columns, width)
}

/// One resize per `(range, width)` pair, in order.
pub fn set_column_widths(
    sheet_id: i64,
    widths: &[(&str, u32)],
) -> Result<Vec<Request>, RequestError> {
    widths
        .iter()
        .map(|(range, width)| set_column_width(sheet_id, range, *width))
        .collect()
}

/// `updateSheetProperties` freezing the first `rows` rows and `cols`
/// columns. `Some(0)` unfreezes a dimension; at least one must be given.
pub fn set_frozen(
    sheet_id: i64,
    rows: Option<u32>,
    cols: Option<u32>,
) -> Result<Request, RequestError> {
    if rows.is_none() && cols.is_none() {
        return Err(RequestError::NothingFrozen);
    }
    let mut fields = Vec::with_capacity(2);
    if rows.is_some() {
        fields.push("gridProperties.frozenRowCount");
    }
    if cols.is_some() {
        fields.push("gridProperties.frozenColumnCount");
    }
    Ok(Request::UpdateSheetProperties(UpdateSheetPropertiesRequest {
        properties: SheetProperties {
            sheet_id,
            grid_properties: Some(GridProperties {
                frozen_row_count: rows,
                frozen_column_count: cols,
            }),
        },
        fields: fields.join(","),
    }))
}
