//! Conditions and the rules built from them.
//!
//! A [`BooleanCondition`] pairs an operator with its operand values; how
//! many values the operator takes, and whether it may be used for
//! conditional formatting or data validation, is fixed vocabulary checked
//! at construction time rather than left for the server to reject.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::component::FormatComponent;
use crate::error::FormatError;
use crate::format::CellFormat;
use crate::range::GridRange;

/// Condition operator vocabulary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    NumberGreater,
    NumberGreaterThanEq,
    NumberLess,
    NumberLessThanEq,
    NumberEq,
    NumberNotEq,
    NumberBetween,
    NumberNotBetween,
    TextContains,
    TextNotContains,
    TextStartsWith,
    TextEndsWith,
    TextEq,
    TextIsEmail,
    TextIsUrl,
    DateEq,
    DateBefore,
    DateAfter,
    DateOnOrBefore,
    DateOnOrAfter,
    DateBetween,
    DateNotBetween,
    DateIsValid,
    OneOfRange,
    OneOfList,
    Blank,
    NotBlank,
    CustomFormula,
    Boolean,
}

/// Wire tokens in the same order as [`ConditionType::ALL`].
const CONDITION_TYPE_TOKENS: &[&str] = &[
    "NUMBER_GREATER",
    "NUMBER_GREATER_THAN_EQ",
    "NUMBER_LESS",
    "NUMBER_LESS_THAN_EQ",
    "NUMBER_EQ",
    "NUMBER_NOT_EQ",
    "NUMBER_BETWEEN",
    "NUMBER_NOT_BETWEEN",
    "TEXT_CONTAINS",
    "TEXT_NOT_CONTAINS",
    "TEXT_STARTS_WITH",
    "TEXT_ENDS_WITH",
    "TEXT_EQ",
    "TEXT_IS_EMAIL",
    "TEXT_IS_URL",
    "DATE_EQ",
    "DATE_BEFORE",
    "DATE_AFTER",
    "DATE_ON_OR_BEFORE",
    "DATE_ON_OR_AFTER",
    "DATE_BETWEEN",
    "DATE_NOT_BETWEEN",
    "DATE_IS_VALID",
    "ONE_OF_RANGE",
    "ONE_OF_LIST",
    "BLANK",
    "NOT_BLANK",
    "CUSTOM_FORMULA",
    "BOOLEAN",
];

impl ConditionType {
    pub const ALL: [ConditionType; 29] = [
        ConditionType::NumberGreater,
        ConditionType::NumberGreaterThanEq,
        ConditionType::NumberLess,
        ConditionType::NumberLessThanEq,
        ConditionType::NumberEq,
        ConditionType::NumberNotEq,
        ConditionType::NumberBetween,
        ConditionType::NumberNotBetween,
        ConditionType::TextContains,
        ConditionType::TextNotContains,
        ConditionType::TextStartsWith,
        ConditionType::TextEndsWith,
        ConditionType::TextEq,
        ConditionType::TextIsEmail,
        ConditionType::TextIsUrl,
        ConditionType::DateEq,
        ConditionType::DateBefore,
        ConditionType::DateAfter,
        ConditionType::DateOnOrBefore,
        ConditionType::DateOnOrAfter,
        ConditionType::DateBetween,
        ConditionType::DateNotBetween,
        ConditionType::DateIsValid,
        ConditionType::OneOfRange,
        ConditionType::OneOfList,
        ConditionType::Blank,
        ConditionType::NotBlank,
        ConditionType::CustomFormula,
        ConditionType::Boolean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::NumberGreater => "NUMBER_GREATER",
            ConditionType::NumberGreaterThanEq => "NUMBER_GREATER_THAN_EQ",
            ConditionType::NumberLess => "NUMBER_LESS",
            ConditionType::NumberLessThanEq => "NUMBER_LESS_THAN_EQ",
            ConditionType::NumberEq => "NUMBER_EQ",
            ConditionType::NumberNotEq => "NUMBER_NOT_EQ",
            ConditionType::NumberBetween => "NUMBER_BETWEEN",
            ConditionType::NumberNotBetween => "NUMBER_NOT_BETWEEN",
            ConditionType::TextContains => "TEXT_CONTAINS",
            ConditionType::TextNotContains => "TEXT_NOT_CONTAINS",
            ConditionType::TextStartsWith => "TEXT_STARTS_WITH",
            ConditionType::TextEndsWith => "TEXT_ENDS_WITH",
            ConditionType::TextEq => "TEXT_EQ",
            ConditionType::TextIsEmail => "TEXT_IS_EMAIL",
            ConditionType::TextIsUrl => "TEXT_IS_URL",
            ConditionType::DateEq => "DATE_EQ",
            ConditionType::DateBefore => "DATE_BEFORE",
            ConditionType::DateAfter => "DATE_AFTER",
            ConditionType::DateOnOrBefore => "DATE_ON_OR_BEFORE",
            ConditionType::DateOnOrAfter => "DATE_ON_OR_AFTER",
            ConditionType::DateBetween => "DATE_BETWEEN",
            ConditionType::DateNotBetween => "DATE_NOT_BETWEEN",
            ConditionType::DateIsValid => "DATE_IS_VALID",
            ConditionType::OneOfRange => "ONE_OF_RANGE",
            ConditionType::OneOfList => "ONE_OF_LIST",
            ConditionType::Blank => "BLANK",
            ConditionType::NotBlank => "NOT_BLANK",
            ConditionType::CustomFormula => "CUSTOM_FORMULA",
            ConditionType::Boolean => "BOOLEAN",
        }
    }

    /// How many operand values the operator takes.
    pub fn value_count(&self) -> ValueCount {
        match self {
            ConditionType::TextIsEmail
            | ConditionType::TextIsUrl
            | ConditionType::DateIsValid
            | ConditionType::Blank
            | ConditionType::NotBlank => ValueCount::Exactly(0),
            ConditionType::NumberBetween
            | ConditionType::NumberNotBetween
            | ConditionType::DateBetween
            | ConditionType::DateNotBetween => ValueCount::Exactly(2),
            ConditionType::OneOfList => ValueCount::AtLeast(1),
            ConditionType::Boolean => ValueCount::AtMost(2),
            _ => ValueCount::Exactly(1),
        }
    }

    /// Whether the operator may drive a [`DataValidationRule`].
    pub fn supports_data_validation(&self) -> bool {
        !matches!(
            self,
            ConditionType::TextStartsWith
                | ConditionType::TextEndsWith
                | ConditionType::Blank
                | ConditionType::NotBlank
        )
    }

    /// Whether the operator may drive a [`BooleanRule`].
    pub fn supports_conditional_format(&self) -> bool {
        !matches!(
            self,
            ConditionType::OneOfRange
                | ConditionType::OneOfList
                | ConditionType::Boolean
                | ConditionType::TextIsEmail
                | ConditionType::TextIsUrl
                | ConditionType::DateIsValid
                | ConditionType::DateOnOrBefore
                | ConditionType::DateOnOrAfter
                | ConditionType::DateBetween
                | ConditionType::DateNotBetween
        )
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<ConditionType, FormatError> {
        ConditionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError::UnknownToken {
                field: "type",
                value: s.to_string(),
                allowed: CONDITION_TYPE_TOKENS,
            })
    }
}

/// Operand count an operator accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueCount {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl ValueCount {
    pub fn matches(&self, count: usize) -> bool {
        match self {
            ValueCount::Exactly(n) => count == *n,
            ValueCount::AtLeast(n) => count >= *n,
            ValueCount::AtMost(n) => count <= *n,
        }
    }
}

impl fmt::Display for ValueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueCount::Exactly(n) => write!(f, "exactly {}", n),
            ValueCount::AtLeast(n) => write!(f, "at least {}", n),
            ValueCount::AtMost(n) => write!(f, "at most {}", n),
        }
    }
}

/// Date resolved relative to rule evaluation time, for date operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeDate {
    PastYear,
    PastMonth,
    PastWeek,
    Yesterday,
    Today,
    Tomorrow,
}

impl RelativeDate {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeDate::PastYear => "PAST_YEAR",
            RelativeDate::PastMonth => "PAST_MONTH",
            RelativeDate::PastWeek => "PAST_WEEK",
            RelativeDate::Yesterday => "YESTERDAY",
            RelativeDate::Today => "TODAY",
            RelativeDate::Tomorrow => "TOMORROW",
        }
    }
}

impl fmt::Display for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelativeDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<RelativeDate, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "PAST_YEAR" => Ok(RelativeDate::PastYear),
            "PAST_MONTH" => Ok(RelativeDate::PastMonth),
            "PAST_WEEK" => Ok(RelativeDate::PastWeek),
            "YESTERDAY" => Ok(RelativeDate::Yesterday),
            "TODAY" => Ok(RelativeDate::Today),
            "TOMORROW" => Ok(RelativeDate::Tomorrow),
            _ => Err(FormatError::UnknownToken {
                field: "relativeDate",
                value: s.to_string(),
                allowed: &[
                    "PAST_YEAR",
                    "PAST_MONTH",
                    "PAST_WEEK",
                    "YESTERDAY",
                    "TODAY",
                    "TOMORROW",
                ],
            }),
        }
    }
}

/// One operand of a [`BooleanCondition`]: a literal the user entered or a
/// relative date, never both. Serializes as a one-key map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConditionValueWire")]
pub enum ConditionValue {
    #[serde(rename = "relativeDate")]
    RelativeDate(RelativeDate),
    #[serde(rename = "userEnteredValue")]
    UserEnteredValue(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConditionValueWire {
    #[serde(default)]
    relative_date: Option<RelativeDate>,
    #[serde(default)]
    user_entered_value: Option<String>,
}

impl TryFrom<ConditionValueWire> for ConditionValue {
    type Error = String;

    fn try_from(wire: ConditionValueWire) -> Result<ConditionValue, String> {
        match (wire.relative_date, wire.user_entered_value) {
            (Some(date), None) => Ok(ConditionValue::RelativeDate(date)),
            (None, Some(value)) => Ok(ConditionValue::UserEnteredValue(value)),
            _ => Err(
                "either relativeDate or userEnteredValue must be specified, not both or neither"
                    .to_string(),
            ),
        }
    }
}

impl From<RelativeDate> for ConditionValue {
    fn from(date: RelativeDate) -> ConditionValue {
        ConditionValue::RelativeDate(date)
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> ConditionValue {
        ConditionValue::UserEnteredValue(value)
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> ConditionValue {
        ConditionValue::UserEnteredValue(value.to_string())
    }
}

impl FormatComponent for ConditionValue {
    const ALIAS: &'static str = "conditionValue";
}

/// Operator plus operands. [`BooleanCondition::new`] checks the operand
/// count against the operator's arity; the wire parser applies the same
/// check to fetched data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BooleanConditionWire")]
pub struct BooleanCondition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    pub values: Vec<ConditionValue>,
}

impl BooleanCondition {
    pub fn new(
        condition_type: ConditionType,
        values: Vec<ConditionValue>,
    ) -> Result<BooleanCondition, FormatError> {
        let expected = condition_type.value_count();
        if !expected.matches(values.len()) {
            return Err(FormatError::ConditionValues {
                condition_type: condition_type.as_str(),
                expected,
                got: values.len(),
            });
        }
        Ok(BooleanCondition {
            condition_type,
            values,
        })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BooleanConditionWire {
    #[serde(rename = "type")]
    condition_type: ConditionType,
    #[serde(default)]
    values: Vec<ConditionValue>,
}

impl TryFrom<BooleanConditionWire> for BooleanCondition {
    type Error = String;

    fn try_from(wire: BooleanConditionWire) -> Result<BooleanCondition, String> {
        BooleanCondition::new(wire.condition_type, wire.values).map_err(|err| err.to_string())
    }
}

impl FormatComponent for BooleanCondition {
    const ALIAS: &'static str = "booleanCondition";
}

/// How a gradient interpolation point's value is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationPointType {
    Min,
    Max,
    Number,
    Percent,
    Percentile,
}

impl InterpolationPointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationPointType::Min => "MIN",
            InterpolationPointType::Max => "MAX",
            InterpolationPointType::Number => "NUMBER",
            InterpolationPointType::Percent => "PERCENT",
            InterpolationPointType::Percentile => "PERCENTILE",
        }
    }

    /// MIN and MAX take their value from the range itself.
    pub fn requires_value(&self) -> bool {
        !matches!(self, InterpolationPointType::Min | InterpolationPointType::Max)
    }
}

impl fmt::Display for InterpolationPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One anchor of a [`GradientRule`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "InterpolationPointWire")]
pub struct InterpolationPoint {
    pub color: Color,
    #[serde(rename = "type")]
    pub point_type: InterpolationPointType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl InterpolationPoint {
    pub fn new(
        color: Color,
        point_type: InterpolationPointType,
        value: Option<String>,
    ) -> Result<InterpolationPoint, FormatError> {
        if value.is_none() && point_type.requires_value() {
            return Err(FormatError::Invalid {
                component: "interpolationPoint",
                message: format!("type {} requires a value", point_type),
            });
        }
        Ok(InterpolationPoint {
            color,
            point_type,
            value,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct InterpolationPointWire {
    color: Color,
    #[serde(rename = "type")]
    point_type: InterpolationPointType,
    #[serde(default)]
    value: Option<String>,
}

impl TryFrom<InterpolationPointWire> for InterpolationPoint {
    type Error = String;

    fn try_from(wire: InterpolationPointWire) -> Result<InterpolationPoint, String> {
        InterpolationPoint::new(wire.color, wire.point_type, wire.value)
            .map_err(|err| err.to_string())
    }
}

impl FormatComponent for InterpolationPoint {
    const ALIAS: &'static str = "interpolationPoint";
}

/// Color scale over a range, anchored at up to three points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minpoint: Option<InterpolationPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midpoint: Option<InterpolationPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxpoint: Option<InterpolationPoint>,
}

impl FormatComponent for GradientRule {
    const ALIAS: &'static str = "gradientRule";
}

/// Condition plus the format applied where it holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BooleanRuleWire")]
pub struct BooleanRule {
    pub condition: BooleanCondition,
    pub format: CellFormat,
}

impl BooleanRule {
    pub fn new(
        condition: BooleanCondition,
        format: CellFormat,
    ) -> Result<BooleanRule, FormatError> {
        if !condition.condition_type.supports_conditional_format() {
            return Err(FormatError::ConditionContext {
                condition_type: condition.condition_type.as_str(),
                feature: "conditional formatting",
            });
        }
        Ok(BooleanRule { condition, format })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BooleanRuleWire {
    condition: BooleanCondition,
    format: CellFormat,
}

impl TryFrom<BooleanRuleWire> for BooleanRule {
    type Error = String;

    fn try_from(wire: BooleanRuleWire) -> Result<BooleanRule, String> {
        BooleanRule::new(wire.condition, wire.format).map_err(|err| err.to_string())
    }
}

impl FormatComponent for BooleanRule {
    const ALIAS: &'static str = "booleanRule";
}

/// Boolean or gradient body of a [`ConditionalFormatRule`].
#[derive(Clone, Debug, PartialEq)]
pub enum RuleKind {
    Boolean(BooleanRule),
    Gradient(GradientRule),
}

/// One conditional format rule: the ranges it covers and its body. The
/// wire form carries exactly one of `booleanRule` and `gradientRule`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "ConditionalFormatRuleWire")]
pub struct ConditionalFormatRule {
    pub ranges: Vec<GridRange>,
    pub kind: RuleKind,
}

impl ConditionalFormatRule {
    pub fn boolean(ranges: Vec<GridRange>, rule: BooleanRule) -> ConditionalFormatRule {
        ConditionalFormatRule {
            ranges,
            kind: RuleKind::Boolean(rule),
        }
    }

    pub fn gradient(ranges: Vec<GridRange>, rule: GradientRule) -> ConditionalFormatRule {
        ConditionalFormatRule {
            ranges,
            kind: RuleKind::Gradient(rule),
        }
    }

    pub fn boolean_rule(&self) -> Option<&BooleanRule> {
        match &self.kind {
            RuleKind::Boolean(rule) => Some(rule),
            RuleKind::Gradient(_) => None,
        }
    }

    pub fn gradient_rule(&self) -> Option<&GradientRule> {
        match &self.kind {
            RuleKind::Boolean(_) => None,
            RuleKind::Gradient(rule) => Some(rule),
        }
    }
}

impl Serialize for ConditionalFormatRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("ranges", &self.ranges)?;
        match &self.kind {
            RuleKind::Boolean(rule) => map.serialize_entry("booleanRule", rule)?,
            RuleKind::Gradient(rule) => map.serialize_entry("gradientRule", rule)?,
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConditionalFormatRuleWire {
    ranges: Vec<GridRange>,
    #[serde(default)]
    boolean_rule: Option<BooleanRule>,
    #[serde(default)]
    gradient_rule: Option<GradientRule>,
}

impl TryFrom<ConditionalFormatRuleWire> for ConditionalFormatRule {
    type Error = String;

    fn try_from(wire: ConditionalFormatRuleWire) -> Result<ConditionalFormatRule, String> {
        let kind = match (wire.boolean_rule, wire.gradient_rule) {
            (Some(rule), None) => RuleKind::Boolean(rule),
            (None, Some(rule)) => RuleKind::Gradient(rule),
            _ => {
                return Err("exactly one of booleanRule or gradientRule must be set".to_string())
            }
        };
        Ok(ConditionalFormatRule {
            ranges: wire.ranges,
            kind,
        })
    }
}

impl FormatComponent for ConditionalFormatRule {
    const ALIAS: &'static str = "conditionalFormatRule";
}

/// Validation constraint on user-entered cell values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DataValidationRuleWire")]
pub struct DataValidationRule {
    pub condition: BooleanCondition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_custom_ui: Option<bool>,
}

impl DataValidationRule {
    pub fn new(condition: BooleanCondition) -> Result<DataValidationRule, FormatError> {
        if !condition.condition_type.supports_data_validation() {
            return Err(FormatError::ConditionContext {
                condition_type: condition.condition_type.as_str(),
                feature: "data validation",
            });
        }
        Ok(DataValidationRule {
            condition,
            input_message: None,
            strict: None,
            show_custom_ui: None,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DataValidationRuleWire {
    condition: BooleanCondition,
    #[serde(default)]
    input_message: Option<String>,
    #[serde(default)]
    strict: Option<bool>,
    #[serde(default)]
    show_custom_ui: Option<bool>,
}

impl TryFrom<DataValidationRuleWire> for DataValidationRule {
    type Error = String;

    fn try_from(wire: DataValidationRuleWire) -> Result<DataValidationRule, String> {
        let mut rule = DataValidationRule::new(wire.condition).map_err(|err| err.to_string())?;
        rule.input_message = wire.input_message;
        rule.strict = wire.strict;
        rule.show_custom_ui = wire.show_custom_ui;
        Ok(rule)
    }
}

impl FormatComponent for DataValidationRule {
    const ALIAS: &'static str = "dataValidationRule";
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn tokens_match_the_declared_order() {
        for (condition_type, token) in ConditionType::ALL.iter().zip(CONDITION_TYPE_TOKENS) {
            assert_eq!(condition_type.as_str(), *token);
            assert_eq!(token.parse::<ConditionType>().unwrap(), *condition_type);
        }
    }

    #[test]
    fn operand_counts_are_enforced() {
        assert!(BooleanCondition::new(ConditionType::Blank, vec![]).is_ok());
        assert!(BooleanCondition::new(
            ConditionType::NumberBetween,
            vec!["1".into(), "10".into()]
        )
        .is_ok());
        assert!(BooleanCondition::new(ConditionType::Boolean, vec![]).is_ok());
        assert!(
            BooleanCondition::new(ConditionType::Boolean, vec!["Y".into(), "N".into()]).is_ok()
        );

        let err = BooleanCondition::new(ConditionType::OneOfList, vec![]).unwrap_err();
        assert_eq!(
            err,
            FormatError::ConditionValues {
                condition_type: "ONE_OF_LIST",
                expected: ValueCount::AtLeast(1),
                got: 0,
            }
        );
        assert!(BooleanCondition::new(ConditionType::NumberBetween, vec!["1".into()]).is_err());
        assert!(BooleanCondition::new(ConditionType::TextIsEmail, vec!["x".into()]).is_err());
    }

    #[test]
    fn context_checks_gate_each_rule_kind() {
        let one_of_list =
            BooleanCondition::new(ConditionType::OneOfList, vec!["a".into()]).unwrap();
        let err = BooleanRule::new(one_of_list, CellFormat::default()).unwrap_err();
        assert_eq!(
            err,
            FormatError::ConditionContext {
                condition_type: "ONE_OF_LIST",
                feature: "conditional formatting",
            }
        );

        let blank = BooleanCondition::new(ConditionType::Blank, vec![]).unwrap();
        let err = DataValidationRule::new(blank).unwrap_err();
        assert_eq!(
            err,
            FormatError::ConditionContext {
                condition_type: "BLANK",
                feature: "data validation",
            }
        );
    }

    #[test]
    fn condition_values_serialize_as_one_key_maps() {
        assert_eq!(
            serde_json::to_value(ConditionValue::from(RelativeDate::Today)).unwrap(),
            json!({"relativeDate": "TODAY"})
        );
        assert_eq!(
            serde_json::to_value(ConditionValue::from("5")).unwrap(),
            json!({"userEnteredValue": "5"})
        );

        let parsed: ConditionValue =
            serde_json::from_value(json!({"userEnteredValue": "5"})).unwrap();
        assert_eq!(parsed, ConditionValue::from("5"));
        assert!(serde_json::from_value::<ConditionValue>(
            json!({"relativeDate": "TODAY", "userEnteredValue": "5"})
        )
        .is_err());
    }

    #[test]
    fn interpolation_points_need_values_except_at_the_extremes() {
        assert!(
            InterpolationPoint::new(Color::new(1.0, 1.0, 1.0), InterpolationPointType::Min, None)
                .is_ok()
        );
        let err = InterpolationPoint::new(
            Color::new(1.0, 1.0, 1.0),
            InterpolationPointType::Percentile,
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            FormatError::Invalid {
                component: "interpolationPoint",
                message: "type PERCENTILE requires a value".to_string(),
            }
        );
    }

    #[test]
    fn rules_carry_exactly_one_body() {
        let condition =
            BooleanCondition::new(ConditionType::NumberGreater, vec!["0".into()]).unwrap();
        let rule = ConditionalFormatRule::boolean(
            vec![GridRange::default()],
            BooleanRule::new(condition, CellFormat::default()).unwrap(),
        );
        let wire = serde_json::to_value(&rule).unwrap();
        assert!(wire.get("booleanRule").is_some());
        assert!(wire.get("gradientRule").is_none());

        let err = serde_json::from_value::<ConditionalFormatRule>(json!({
            "ranges": [{"sheetId": 0}],
        }))
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("exactly one of booleanRule or gradientRule"));
    }

    #[test]
    fn fetched_conditions_default_to_no_values() {
        let condition: BooleanCondition =
            serde_json::from_value(json!({"type": "NOT_BLANK"})).unwrap();
        assert_eq!(condition.values, vec![]);

        let wire = serde_json::to_value(&condition).unwrap();
        assert_eq!(wire, json!({"type": "NOT_BLANK", "values": []}));
    }
}
