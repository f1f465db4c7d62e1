//! Request construction for the spreadsheet `batchUpdate` endpoint.
//!
//! Builders translate an A1 range plus a formatting component from
//! `sheetfmt-model` into the matching typed request, and a
//! [`BatchBuilder`] collects requests into the `{"requests": [...]}`
//! body the endpoint takes. Nothing here performs HTTP; the produced
//! bodies are handed to whatever transport the caller uses.

pub mod batch;
pub mod builders;
pub mod requests;

pub use batch::BatchBuilder;
pub use builders::{
    format_cell_range, format_cell_ranges, set_column_width, set_column_widths,
    set_data_validation_for_cell_range, set_data_validation_for_cell_ranges, set_frozen,
    set_row_height, set_row_heights, RequestError,
};
pub use requests::{
    CellData, DimensionProperties, GridProperties, RepeatCellRequest, Request, SheetProperties,
    UpdateDimensionPropertiesRequest, UpdateSheetPropertiesRequest,
};
