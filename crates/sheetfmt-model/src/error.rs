use thiserror::Error;

use crate::conditionals::ValueCount;

/// Errors raised while constructing, parsing, or combining formatting
/// components.
///
/// Parse failures always name the component type and the offending field
/// or token; an [`FormatError::UnknownComponent`] means the caller asked
/// for an alias that no component type is registered under.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No component type is registered under the given alias.
    #[error("no format component named '{0}'")]
    UnknownComponent(String),

    /// A component failed validation while being built or parsed.
    #[error("invalid {component}: {message}")]
    Invalid {
        component: &'static str,
        message: String,
    },

    /// A color string did not match the accepted hex forms.
    #[error("invalid color '{input}': must be of the form \"#RRGGBB\" or \"#RRGGBBAA\"")]
    InvalidHexColor { input: String },

    /// A string token is outside the allowed vocabulary for a field.
    #[error("{field} value must be one of {allowed:?}, got '{value}'")]
    UnknownToken {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A condition was built with the wrong number of values for its
    /// operator.
    #[error("condition type {condition_type} takes {expected} value(s), got {got}")]
    ConditionValues {
        condition_type: &'static str,
        expected: ValueCount,
        got: usize,
    },

    /// A condition operator was used by a feature that does not support
    /// it.
    #[error("condition type {condition_type} cannot be used for {feature}")]
    ConditionContext {
        condition_type: &'static str,
        feature: &'static str,
    },
}
