//! Typed formatting model for the Google Sheets v4 API.
//!
//! The crate mirrors the API's formatting schema one component at a
//! time: every type serializes to exactly the JSON the API speaks, field
//! masks are derived from the fields a value actually carries, and
//! partially specified formats compose through overlay arithmetic. A
//! field registry describes each component's wire schema, A1 notation
//! translates to the API's zero-based half-open rectangles, and the
//! conditional rule list tracks local edits against a baseline and emits
//! the batch that reconciles the two.

mod algebra;

pub mod color;
pub mod component;
pub mod conditionals;
pub mod error;
pub mod format;
pub mod range;
pub mod rules;
pub mod schema;

pub use color::{Color, ColorStyle, ThemeColorType};
pub use component::{AnyComponent, FormatComponent};
pub use conditionals::{
    BooleanCondition, BooleanRule, ConditionType, ConditionValue, ConditionalFormatRule,
    DataValidationRule, GradientRule, InterpolationPoint, InterpolationPointType, RelativeDate,
    RuleKind, ValueCount,
};
pub use error::FormatError;
pub use format::{
    Border, BorderStyle, Borders, CellFormat, HorizontalAlignment, HyperlinkDisplayType, Link,
    NumberFormat, NumberFormatType, Padding, TextDirection, TextFormat, TextRotation,
    VerticalAlignment, WrapStrategy,
};
pub use range::{
    column_letter_to_number, number_to_column_letter, range_to_dimension_range,
    range_to_grid_range, A1ParseError, CellAddress, Dimension, DimensionRange, GridRange,
    RangeParseError,
};
pub use rules::{
    AddConditionalFormatRuleRequest, ConditionalFormatRules, DeleteConditionalFormatRuleRequest,
    RuleBatchTarget, RuleRequest,
};
pub use schema::{component_spec, ComponentSpec, FieldKind, FieldSpec, COMPONENTS};
