//! Typed `batchUpdate` request envelopes.
//!
//! Serde's external enum tagging gives each request its API shape, a
//! one-key map named after the request kind wrapping the request body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sheetfmt_model::rules::{AddConditionalFormatRuleRequest, DeleteConditionalFormatRuleRequest};
use sheetfmt_model::{DimensionRange, GridRange, RuleRequest};

/// One spreadsheet `batchUpdate` request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    RepeatCell(RepeatCellRequest),
    UpdateDimensionProperties(UpdateDimensionPropertiesRequest),
    UpdateSheetProperties(UpdateSheetPropertiesRequest),
    DeleteConditionalFormatRule(DeleteConditionalFormatRuleRequest),
    AddConditionalFormatRule(AddConditionalFormatRuleRequest),
}

impl From<RuleRequest> for Request {
    fn from(request: RuleRequest) -> Request {
        match request {
            RuleRequest::DeleteConditionalFormatRule(request) => {
                Request::DeleteConditionalFormatRule(request)
            }
            RuleRequest::AddConditionalFormatRule(request) => {
                Request::AddConditionalFormatRule(request)
            }
        }
    }
}

/// Writes the same cell payload into every cell of a range. The `fields`
/// mask names the paths the write touches; everything outside the mask
/// is left alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    pub fields: String,
}

/// The slice of a cell a [`RepeatCellRequest`] repeats. Payloads are
/// carried in wire form, defaults already applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_validation: Option<Value>,
}

/// Resizes whole rows or columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDimensionPropertiesRequest {
    pub range: DimensionRange,
    pub properties: DimensionProperties,
    pub fields: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProperties {
    pub pixel_size: u32,
}

/// Updates sheet-level properties under a field mask.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSheetPropertiesRequest {
    pub properties: SheetProperties,
    pub fields: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_properties: Option<GridProperties>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_row_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_column_count: Option<u32>,
}
