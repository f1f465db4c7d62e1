//! Cell-level formatting components.
//!
//! Everything here mirrors the wire schema one field at a time: optional
//! fields stay optional so that partially specified formats compose
//! through the overlay arithmetic, and enum-valued fields are closed
//! vocabularies rather than free strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorStyle};
use crate::component::FormatComponent;
use crate::error::FormatError;

/// Cell formatting directives. An instance describes only the directives
/// it carries; fields left `None` are untouched by a partial update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CellFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Borders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_strategy: Option<WrapStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_direction: Option<TextDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_format: Option<TextFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink_display_type: Option<HyperlinkDisplayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<TextRotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color_style: Option<ColorStyle>,
}

impl FormatComponent for CellFormat {
    const ALIAS: &'static str = "cellFormat";
}

/// Number rendering directive. The API requires the type; the pattern
/// refines it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberFormat {
    #[serde(rename = "type")]
    pub format_type: NumberFormatType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl NumberFormat {
    pub fn new(format_type: NumberFormatType, pattern: Option<String>) -> NumberFormat {
        NumberFormat {
            format_type,
            pattern,
        }
    }
}

impl FormatComponent for NumberFormat {
    const ALIAS: &'static str = "numberFormat";
}

/// Run-level text styling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color_style: Option<ColorStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl FormatComponent for TextFormat {
    const ALIAS: &'static str = "textFormat";
}

/// Hyperlink target carried by [`TextFormat`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl FormatComponent for Link {
    const ALIAS: &'static str = "link";
}

/// One edge of a cell border.
///
/// The wire schema still sends a deprecated `width` field on old data;
/// parsing accepts it and drops it, and it is never re-emitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BorderWire")]
pub struct Border {
    pub style: BorderStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_style: Option<ColorStyle>,
}

impl Border {
    pub fn new(style: BorderStyle) -> Border {
        Border {
            style,
            color: None,
            color_style: None,
        }
    }
}

impl FormatComponent for Border {
    const ALIAS: &'static str = "border";
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct BorderWire {
    style: BorderStyle,
    #[serde(default)]
    color: Option<Color>,
    #[serde(default)]
    color_style: Option<ColorStyle>,
    // deprecated in the wire schema; tolerated and dropped
    #[serde(default)]
    #[allow(dead_code)]
    width: Option<f64>,
}

impl From<BorderWire> for Border {
    fn from(wire: BorderWire) -> Border {
        Border {
            style: wire.style,
            color: wire.color,
            color_style: wire.color_style,
        }
    }
}

/// Per-edge borders of a cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Borders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
}

impl FormatComponent for Borders {
    const ALIAS: &'static str = "borders";
}

/// Cell padding in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Padding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
}

impl FormatComponent for Padding {
    const ALIAS: &'static str = "padding";
}

/// Text orientation inside a cell: either a rotation angle in degrees or
/// vertical stacking, never both. The wire form is a one-key map, and
/// parsing rejects the both-set and neither-set shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TextRotationWire")]
pub enum TextRotation {
    /// Counterclockwise degrees between standard and desired orientation.
    Angle(i32),
    /// Stack text vertically instead of rotating it.
    Vertical(bool),
}

impl Serialize for TextRotation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            TextRotation::Angle(angle) => map.serialize_entry("angle", angle)?,
            TextRotation::Vertical(vertical) => map.serialize_entry("vertical", vertical)?,
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TextRotationWire {
    #[serde(default)]
    angle: Option<i32>,
    #[serde(default)]
    vertical: Option<bool>,
}

impl TryFrom<TextRotationWire> for TextRotation {
    type Error = String;

    fn try_from(wire: TextRotationWire) -> Result<TextRotation, String> {
        match (wire.angle, wire.vertical) {
            (Some(angle), None) => Ok(TextRotation::Angle(angle)),
            (None, Some(vertical)) => Ok(TextRotation::Vertical(vertical)),
            _ => Err("either angle or vertical must be specified, not both or neither".to_string()),
        }
    }
}

impl FormatComponent for TextRotation {
    const ALIAS: &'static str = "textRotation";
}

/// Horizontal alignment of cell content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "LEFT",
            HorizontalAlignment::Center => "CENTER",
            HorizontalAlignment::Right => "RIGHT",
        }
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalAlignment {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<HorizontalAlignment, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "LEFT" => Ok(HorizontalAlignment::Left),
            "CENTER" => Ok(HorizontalAlignment::Center),
            "RIGHT" => Ok(HorizontalAlignment::Right),
            _ => Err(FormatError::UnknownToken {
                field: "horizontalAlignment",
                value: s.to_string(),
                allowed: &["LEFT", "CENTER", "RIGHT"],
            }),
        }
    }
}

/// Vertical alignment of cell content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalAlignment {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "TOP",
            VerticalAlignment::Middle => "MIDDLE",
            VerticalAlignment::Bottom => "BOTTOM",
        }
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerticalAlignment {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<VerticalAlignment, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "TOP" => Ok(VerticalAlignment::Top),
            "MIDDLE" => Ok(VerticalAlignment::Middle),
            "BOTTOM" => Ok(VerticalAlignment::Bottom),
            _ => Err(FormatError::UnknownToken {
                field: "verticalAlignment",
                value: s.to_string(),
                allowed: &["TOP", "MIDDLE", "BOTTOM"],
            }),
        }
    }
}

/// How content wider than its cell is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapStrategy {
    OverflowCell,
    LegacyWrap,
    Clip,
    Wrap,
}

impl WrapStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapStrategy::OverflowCell => "OVERFLOW_CELL",
            WrapStrategy::LegacyWrap => "LEGACY_WRAP",
            WrapStrategy::Clip => "CLIP",
            WrapStrategy::Wrap => "WRAP",
        }
    }
}

impl fmt::Display for WrapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WrapStrategy {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<WrapStrategy, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "OVERFLOW_CELL" => Ok(WrapStrategy::OverflowCell),
            "LEGACY_WRAP" => Ok(WrapStrategy::LegacyWrap),
            "CLIP" => Ok(WrapStrategy::Clip),
            "WRAP" => Ok(WrapStrategy::Wrap),
            _ => Err(FormatError::UnknownToken {
                field: "wrapStrategy",
                value: s.to_string(),
                allowed: &["OVERFLOW_CELL", "LEGACY_WRAP", "CLIP", "WRAP"],
            }),
        }
    }
}

/// Reading direction of cell text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "LEFT_TO_RIGHT",
            TextDirection::RightToLeft => "RIGHT_TO_LEFT",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDirection {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<TextDirection, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "LEFT_TO_RIGHT" => Ok(TextDirection::LeftToRight),
            "RIGHT_TO_LEFT" => Ok(TextDirection::RightToLeft),
            _ => Err(FormatError::UnknownToken {
                field: "textDirection",
                value: s.to_string(),
                allowed: &["LEFT_TO_RIGHT", "RIGHT_TO_LEFT"],
            }),
        }
    }
}

/// How an explicit hyperlink is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HyperlinkDisplayType {
    Linked,
    PlainText,
}

impl HyperlinkDisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HyperlinkDisplayType::Linked => "LINKED",
            HyperlinkDisplayType::PlainText => "PLAIN_TEXT",
        }
    }
}

impl fmt::Display for HyperlinkDisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HyperlinkDisplayType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<HyperlinkDisplayType, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "LINKED" => Ok(HyperlinkDisplayType::Linked),
            "PLAIN_TEXT" => Ok(HyperlinkDisplayType::PlainText),
            _ => Err(FormatError::UnknownToken {
                field: "hyperlinkDisplayType",
                value: s.to_string(),
                allowed: &["LINKED", "PLAIN_TEXT"],
            }),
        }
    }
}

/// Category of a [`NumberFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberFormatType {
    Text,
    Number,
    Percent,
    Currency,
    Date,
    Time,
    DateTime,
    Scientific,
}

impl NumberFormatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberFormatType::Text => "TEXT",
            NumberFormatType::Number => "NUMBER",
            NumberFormatType::Percent => "PERCENT",
            NumberFormatType::Currency => "CURRENCY",
            NumberFormatType::Date => "DATE",
            NumberFormatType::Time => "TIME",
            NumberFormatType::DateTime => "DATE_TIME",
            NumberFormatType::Scientific => "SCIENTIFIC",
        }
    }
}

impl fmt::Display for NumberFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberFormatType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<NumberFormatType, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "TEXT" => Ok(NumberFormatType::Text),
            "NUMBER" => Ok(NumberFormatType::Number),
            "PERCENT" => Ok(NumberFormatType::Percent),
            "CURRENCY" => Ok(NumberFormatType::Currency),
            "DATE" => Ok(NumberFormatType::Date),
            "TIME" => Ok(NumberFormatType::Time),
            "DATE_TIME" => Ok(NumberFormatType::DateTime),
            "SCIENTIFIC" => Ok(NumberFormatType::Scientific),
            _ => Err(FormatError::UnknownToken {
                field: "type",
                value: s.to_string(),
                allowed: &[
                    "TEXT",
                    "NUMBER",
                    "PERCENT",
                    "CURRENCY",
                    "DATE",
                    "TIME",
                    "DATE_TIME",
                    "SCIENTIFIC",
                ],
            }),
        }
    }
}

/// Line style of a [`Border`] edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorderStyle {
    Dotted,
    Dashed,
    Solid,
    SolidMedium,
    SolidThick,
    None,
    Double,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Dotted => "DOTTED",
            BorderStyle::Dashed => "DASHED",
            BorderStyle::Solid => "SOLID",
            BorderStyle::SolidMedium => "SOLID_MEDIUM",
            BorderStyle::SolidThick => "SOLID_THICK",
            BorderStyle::None => "NONE",
            BorderStyle::Double => "DOUBLE",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<BorderStyle, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "DOTTED" => Ok(BorderStyle::Dotted),
            "DASHED" => Ok(BorderStyle::Dashed),
            "SOLID" => Ok(BorderStyle::Solid),
            "SOLID_MEDIUM" => Ok(BorderStyle::SolidMedium),
            "SOLID_THICK" => Ok(BorderStyle::SolidThick),
            "NONE" => Ok(BorderStyle::None),
            "DOUBLE" => Ok(BorderStyle::Double),
            _ => Err(FormatError::UnknownToken {
                field: "style",
                value: s.to_string(),
                allowed: &[
                    "DOTTED",
                    "DASHED",
                    "SOLID",
                    "SOLID_MEDIUM",
                    "SOLID_THICK",
                    "NONE",
                    "DOUBLE",
                ],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_parse_case_insensitively() {
        assert_eq!("center".parse::<HorizontalAlignment>().unwrap(), HorizontalAlignment::Center);
        assert_eq!("Date_Time".parse::<NumberFormatType>().unwrap(), NumberFormatType::DateTime);
        assert_eq!("solid_medium".parse::<BorderStyle>().unwrap(), BorderStyle::SolidMedium);
    }

    #[test]
    fn unknown_token_reports_the_vocabulary() {
        let err = "SIDEWAYS".parse::<HorizontalAlignment>().unwrap_err();
        assert_eq!(
            err,
            FormatError::UnknownToken {
                field: "horizontalAlignment",
                value: "SIDEWAYS".to_string(),
                allowed: &["LEFT", "CENTER", "RIGHT"],
            }
        );
    }

    #[test]
    fn display_matches_the_wire_token() {
        assert_eq!(WrapStrategy::OverflowCell.to_string(), "OVERFLOW_CELL");
        assert_eq!(TextDirection::RightToLeft.to_string(), "RIGHT_TO_LEFT");
        assert_eq!(HyperlinkDisplayType::PlainText.to_string(), "PLAIN_TEXT");
    }
}
