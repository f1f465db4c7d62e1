use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::algebra;
use crate::color::{Color, ColorStyle};
use crate::conditionals::{
    BooleanCondition, BooleanRule, ConditionValue, ConditionalFormatRule, DataValidationRule,
    GradientRule, InterpolationPoint,
};
use crate::error::FormatError;
use crate::format::{
    Border, Borders, CellFormat, Link, NumberFormat, Padding, TextFormat, TextRotation,
};
use crate::range::GridRange;
use crate::schema::{component_spec, ComponentSpec};

fn to_raw<C: Serialize>(component: &C) -> Value {
    serde_json::to_value(component).expect("component serializes to a JSON map")
}

/// Uniform contract implemented by every registered component type.
///
/// Implementors supply only their registered alias; serialization,
/// affected-field masks, and the overlay arithmetic are inherited from
/// the field table registered under that alias.
///
/// Equality is structural with the API's documented fallbacks applied, so
/// a [`Color`] with no channels set equals opaque black. The overlay
/// operations instead work on raw field presence: an unset channel is
/// "unspecified" there, never zero.
pub trait FormatComponent:
    Serialize + DeserializeOwned + Clone + PartialEq + Sized
{
    /// Alias the component type is registered under.
    const ALIAS: &'static str;

    /// Field table registered under [`Self::ALIAS`].
    fn spec() -> &'static ComponentSpec {
        component_spec(Self::ALIAS).expect("component alias registered in schema tables")
    }

    /// Serializes to the nested wire map: declared fallbacks filled in,
    /// deprecated fields dropped, absent fields omitted.
    fn to_wire(&self) -> Value {
        algebra::apply_defaults(Self::spec(), &to_raw(self))
    }

    /// Parses a wire map, rejecting unknown fields, out-of-vocabulary
    /// tokens, and shape violations.
    fn from_wire(value: &Value) -> Result<Self, FormatError> {
        serde_json::from_value(value.clone()).map_err(|err| FormatError::Invalid {
            component: Self::ALIAS,
            message: err.to_string(),
        })
    }

    /// Dotted field paths of every present (or defaulted) field, under
    /// `prefix`, in field-table order. The joined list is the `fields`
    /// mask of a partial-update request.
    fn affected_fields(&self, prefix: &str) -> Vec<String> {
        algebra::affected_paths(Self::spec(), &to_raw(self), prefix)
    }

    /// Field-wise overlay: `other` wins scalar conflicts and nested
    /// components merge recursively. Fails when the merged field set
    /// violates a shape invariant, such as a text rotation ending up with
    /// both an angle and the vertical flag.
    fn add(&self, other: &Self) -> Result<Self, FormatError> {
        let merged = algebra::add(Self::spec(), &to_raw(self), &to_raw(other));
        Self::from_wire(&merged)
    }

    /// Fields carried identically by both sides, or `None` when nothing
    /// survives. Fails when the surviving set drops a required field.
    fn intersection(&self, other: &Self) -> Result<Option<Self>, FormatError> {
        match algebra::intersection(Self::spec(), &to_raw(self), &to_raw(other)) {
            Some(kept) => Self::from_wire(&kept).map(Some),
            None => Ok(None),
        }
    }

    /// `self`'s fields that `other` lacks or contradicts, or `None` when
    /// nothing differs. Fails when the surviving set drops a required
    /// field.
    fn difference(&self, other: &Self) -> Result<Option<Self>, FormatError> {
        match algebra::difference(Self::spec(), &to_raw(self), &to_raw(other)) {
            Some(kept) => Self::from_wire(&kept).map(Some),
            None => Ok(None),
        }
    }
}

/// A parsed component of any registered type, for callers that only know
/// the wire alias at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyComponent {
    CellFormat(CellFormat),
    Color(Color),
    ColorStyle(ColorStyle),
    Border(Border),
    Borders(Borders),
    Padding(Padding),
    TextFormat(TextFormat),
    TextRotation(TextRotation),
    NumberFormat(NumberFormat),
    Link(Link),
    GridRange(GridRange),
    BooleanCondition(BooleanCondition),
    ConditionValue(ConditionValue),
    InterpolationPoint(InterpolationPoint),
    GradientRule(GradientRule),
    BooleanRule(BooleanRule),
    ConditionalFormatRule(ConditionalFormatRule),
    DataValidationRule(DataValidationRule),
}

impl AnyComponent {
    /// Parses `value` as the component type registered under `alias`.
    pub fn from_wire(alias: &str, value: &Value) -> Result<AnyComponent, FormatError> {
        Ok(match alias {
            "cellFormat" => AnyComponent::CellFormat(CellFormat::from_wire(value)?),
            "color" => AnyComponent::Color(Color::from_wire(value)?),
            "colorStyle" => AnyComponent::ColorStyle(ColorStyle::from_wire(value)?),
            "border" => AnyComponent::Border(Border::from_wire(value)?),
            "borders" => AnyComponent::Borders(Borders::from_wire(value)?),
            "padding" => AnyComponent::Padding(Padding::from_wire(value)?),
            "textFormat" => AnyComponent::TextFormat(TextFormat::from_wire(value)?),
            "textRotation" => AnyComponent::TextRotation(TextRotation::from_wire(value)?),
            "numberFormat" => AnyComponent::NumberFormat(NumberFormat::from_wire(value)?),
            "link" => AnyComponent::Link(Link::from_wire(value)?),
            "gridRange" => AnyComponent::GridRange(GridRange::from_wire(value)?),
            "booleanCondition" => {
                AnyComponent::BooleanCondition(BooleanCondition::from_wire(value)?)
            }
            "conditionValue" => AnyComponent::ConditionValue(ConditionValue::from_wire(value)?),
            "interpolationPoint" => {
                AnyComponent::InterpolationPoint(InterpolationPoint::from_wire(value)?)
            }
            "gradientRule" => AnyComponent::GradientRule(GradientRule::from_wire(value)?),
            "booleanRule" => AnyComponent::BooleanRule(BooleanRule::from_wire(value)?),
            "conditionalFormatRule" => {
                AnyComponent::ConditionalFormatRule(ConditionalFormatRule::from_wire(value)?)
            }
            "dataValidationRule" => {
                AnyComponent::DataValidationRule(DataValidationRule::from_wire(value)?)
            }
            _ => return Err(FormatError::UnknownComponent(alias.to_string())),
        })
    }

    /// Alias of the contained component type.
    pub fn alias(&self) -> &'static str {
        match self {
            AnyComponent::CellFormat(_) => CellFormat::ALIAS,
            AnyComponent::Color(_) => Color::ALIAS,
            AnyComponent::ColorStyle(_) => ColorStyle::ALIAS,
            AnyComponent::Border(_) => Border::ALIAS,
            AnyComponent::Borders(_) => Borders::ALIAS,
            AnyComponent::Padding(_) => Padding::ALIAS,
            AnyComponent::TextFormat(_) => TextFormat::ALIAS,
            AnyComponent::TextRotation(_) => TextRotation::ALIAS,
            AnyComponent::NumberFormat(_) => NumberFormat::ALIAS,
            AnyComponent::Link(_) => Link::ALIAS,
            AnyComponent::GridRange(_) => GridRange::ALIAS,
            AnyComponent::BooleanCondition(_) => BooleanCondition::ALIAS,
            AnyComponent::ConditionValue(_) => ConditionValue::ALIAS,
            AnyComponent::InterpolationPoint(_) => InterpolationPoint::ALIAS,
            AnyComponent::GradientRule(_) => GradientRule::ALIAS,
            AnyComponent::BooleanRule(_) => BooleanRule::ALIAS,
            AnyComponent::ConditionalFormatRule(_) => ConditionalFormatRule::ALIAS,
            AnyComponent::DataValidationRule(_) => DataValidationRule::ALIAS,
        }
    }

    /// Serializes the contained component to its wire map.
    pub fn to_wire(&self) -> Value {
        match self {
            AnyComponent::CellFormat(c) => c.to_wire(),
            AnyComponent::Color(c) => c.to_wire(),
            AnyComponent::ColorStyle(c) => c.to_wire(),
            AnyComponent::Border(c) => c.to_wire(),
            AnyComponent::Borders(c) => c.to_wire(),
            AnyComponent::Padding(c) => c.to_wire(),
            AnyComponent::TextFormat(c) => c.to_wire(),
            AnyComponent::TextRotation(c) => c.to_wire(),
            AnyComponent::NumberFormat(c) => c.to_wire(),
            AnyComponent::Link(c) => c.to_wire(),
            AnyComponent::GridRange(c) => c.to_wire(),
            AnyComponent::BooleanCondition(c) => c.to_wire(),
            AnyComponent::ConditionValue(c) => c.to_wire(),
            AnyComponent::InterpolationPoint(c) => c.to_wire(),
            AnyComponent::GradientRule(c) => c.to_wire(),
            AnyComponent::BooleanRule(c) => c.to_wire(),
            AnyComponent::ConditionalFormatRule(c) => c.to_wire(),
            AnyComponent::DataValidationRule(c) => c.to_wire(),
        }
    }
}
