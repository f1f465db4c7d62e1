use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::component::FormatComponent;
use crate::error::FormatError;

/// RGBA color with channels in `[0, 1]`.
///
/// All four channels are optional because their absence is meaningful to
/// the overlay arithmetic. The API's fallbacks (black, fully opaque) are
/// applied by serialization and equality, so `Color::default()` compares
/// equal to an explicit opaque black.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Color {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Color {
    /// Fully specified color with the alpha channel left unset.
    pub fn new(red: f64, green: f64, blue: f64) -> Color {
        Color {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: None,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`, case-insensitively. The alpha
    /// channel stays unset for the six-digit form.
    pub fn from_hex(hex: &str) -> Result<Color, FormatError> {
        let invalid = || FormatError::InvalidHexColor {
            input: hex.to_string(),
        };
        let digits = match hex.strip_prefix('#') {
            Some(digits) if digits.len() == 6 || digits.len() == 8 => digits,
            _ => return Err(invalid()),
        };
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |index: usize| {
            let byte = u8::from_str_radix(&digits[2 * index..2 * index + 2], 16)
                .expect("hex digits validated above");
            f64::from(byte) / 255.0
        };
        Ok(Color {
            red: Some(channel(0)),
            green: Some(channel(1)),
            blue: Some(channel(2)),
            alpha: (digits.len() == 8).then(|| channel(3)),
        })
    }

    /// Formats as lowercase `#rrggbb`, appending the alpha pair only when
    /// the alpha channel is set. Unset channels print as zero.
    pub fn to_hex(&self) -> String {
        let byte =
            |channel: Option<f64>| (channel.unwrap_or(0.0).clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut hex = format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if self.alpha.is_some() {
            hex.push_str(&format!("{:02x}", byte(self.alpha)));
        }
        hex
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        // Fallbacks mirror the schema table for "color".
        self.red.unwrap_or(0.0) == other.red.unwrap_or(0.0)
            && self.green.unwrap_or(0.0) == other.green.unwrap_or(0.0)
            && self.blue.unwrap_or(0.0) == other.blue.unwrap_or(0.0)
            && self.alpha.unwrap_or(1.0) == other.alpha.unwrap_or(1.0)
    }
}

impl FormatComponent for Color {
    const ALIAS: &'static str = "color";
}

/// Either a concrete RGBA color or a reference to a theme slot. The API
/// accepts both fields, so neither is mandatory here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<ThemeColorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<Color>,
}

impl ColorStyle {
    /// Style resolving to a concrete color.
    pub fn rgb(color: Color) -> ColorStyle {
        ColorStyle {
            theme_color: None,
            rgb_color: Some(color),
        }
    }

    /// Style resolving through the spreadsheet theme.
    pub fn theme(slot: ThemeColorType) -> ColorStyle {
        ColorStyle {
            theme_color: Some(slot),
            rgb_color: None,
        }
    }
}

impl FormatComponent for ColorStyle {
    const ALIAS: &'static str = "colorStyle";
}

/// Theme slots a [`ColorStyle`] may reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeColorType {
    Text,
    Background,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Link,
}

impl ThemeColorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColorType::Text => "TEXT",
            ThemeColorType::Background => "BACKGROUND",
            ThemeColorType::Accent1 => "ACCENT1",
            ThemeColorType::Accent2 => "ACCENT2",
            ThemeColorType::Accent3 => "ACCENT3",
            ThemeColorType::Accent4 => "ACCENT4",
            ThemeColorType::Accent5 => "ACCENT5",
            ThemeColorType::Accent6 => "ACCENT6",
            ThemeColorType::Link => "LINK",
        }
    }
}

impl fmt::Display for ThemeColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeColorType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<ThemeColorType, FormatError> {
        match s.to_ascii_uppercase().as_str() {
            "TEXT" => Ok(ThemeColorType::Text),
            "BACKGROUND" => Ok(ThemeColorType::Background),
            "ACCENT1" => Ok(ThemeColorType::Accent1),
            "ACCENT2" => Ok(ThemeColorType::Accent2),
            "ACCENT3" => Ok(ThemeColorType::Accent3),
            "ACCENT4" => Ok(ThemeColorType::Accent4),
            "ACCENT5" => Ok(ThemeColorType::Accent5),
            "ACCENT6" => Ok(ThemeColorType::Accent6),
            "LINK" => Ok(ThemeColorType::Link),
            _ => Err(FormatError::UnknownToken {
                field: "themeColor",
                value: s.to_string(),
                allowed: &[
                    "TEXT",
                    "BACKGROUND",
                    "ACCENT1",
                    "ACCENT2",
                    "ACCENT3",
                    "ACCENT4",
                    "ACCENT5",
                    "ACCENT6",
                    "LINK",
                ],
            }),
        }
    }
}
