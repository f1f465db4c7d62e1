//! Static field tables for every registered component type.
//!
//! The tables drive the generic machinery in this crate: serialization
//! defaults, affected-field masks, and the overlay arithmetic all walk a
//! [`ComponentSpec`] rather than hard-coding per-type knowledge. Field
//! order is wire declaration order and fixes the order of affected-field
//! paths; nested fields name the alias their component type is registered
//! under, so nested lookups never miss.

/// How the generic walkers treat a field's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Primitive or enum token, carried through verbatim.
    Scalar,
    /// Nested component; the payload is its registered alias.
    Component(&'static str),
    /// Homogeneous list of components, compared and overlaid atomically.
    ComponentList(&'static str),
}

/// Declarative description of one wire field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Wire (lowerCamel) field name.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Whether the wire form must carry the field.
    pub required: bool,
    /// Value the API assumes when the field is absent. Applied during
    /// serialization, masks, and equality; never during overlay
    /// arithmetic, where absence stays meaningful.
    pub default: Option<f64>,
    /// Accepted when parsing wire data, never stored or emitted.
    pub deprecated: bool,
}

impl FieldSpec {
    const fn scalar(name: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            kind: FieldKind::Scalar,
            required: false,
            default: None,
            deprecated: false,
        }
    }

    const fn component(name: &'static str, alias: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            kind: FieldKind::Component(alias),
            required: false,
            default: None,
            deprecated: false,
        }
    }

    const fn list(name: &'static str, alias: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            kind: FieldKind::ComponentList(alias),
            required: false,
            default: None,
            deprecated: false,
        }
    }

    const fn required(mut self) -> FieldSpec {
        self.required = true;
        self
    }

    const fn with_default(mut self, default: f64) -> FieldSpec {
        self.default = Some(default);
        self
    }

    const fn deprecated(mut self) -> FieldSpec {
        self.deprecated = true;
        self
    }
}

/// Field table registered under one component alias.
#[derive(Clone, Copy, Debug)]
pub struct ComponentSpec {
    /// Wire alias, the lowerCamel form of the type name.
    pub alias: &'static str,
    /// Fields in wire declaration order.
    pub fields: &'static [FieldSpec],
}

pub const CELL_FORMAT: ComponentSpec = ComponentSpec {
    alias: "cellFormat",
    fields: &[
        FieldSpec::component("numberFormat", "numberFormat"),
        FieldSpec::component("backgroundColor", "color"),
        FieldSpec::component("borders", "borders"),
        FieldSpec::component("padding", "padding"),
        FieldSpec::scalar("horizontalAlignment"),
        FieldSpec::scalar("verticalAlignment"),
        FieldSpec::scalar("wrapStrategy"),
        FieldSpec::scalar("textDirection"),
        FieldSpec::component("textFormat", "textFormat"),
        FieldSpec::scalar("hyperlinkDisplayType"),
        FieldSpec::component("textRotation", "textRotation"),
        FieldSpec::component("backgroundColorStyle", "colorStyle"),
    ],
};

pub const COLOR: ComponentSpec = ComponentSpec {
    alias: "color",
    fields: &[
        FieldSpec::scalar("red").with_default(0.0),
        FieldSpec::scalar("green").with_default(0.0),
        FieldSpec::scalar("blue").with_default(0.0),
        FieldSpec::scalar("alpha").with_default(1.0),
    ],
};

pub const COLOR_STYLE: ComponentSpec = ComponentSpec {
    alias: "colorStyle",
    fields: &[
        FieldSpec::scalar("themeColor"),
        FieldSpec::component("rgbColor", "color"),
    ],
};

pub const BORDER: ComponentSpec = ComponentSpec {
    alias: "border",
    fields: &[
        FieldSpec::scalar("style").required(),
        FieldSpec::component("color", "color"),
        FieldSpec::component("colorStyle", "colorStyle"),
        FieldSpec::scalar("width").deprecated(),
    ],
};

pub const BORDERS: ComponentSpec = ComponentSpec {
    alias: "borders",
    fields: &[
        FieldSpec::component("top", "border"),
        FieldSpec::component("bottom", "border"),
        FieldSpec::component("left", "border"),
        FieldSpec::component("right", "border"),
    ],
};

pub const PADDING: ComponentSpec = ComponentSpec {
    alias: "padding",
    fields: &[
        FieldSpec::scalar("top"),
        FieldSpec::scalar("right"),
        FieldSpec::scalar("bottom"),
        FieldSpec::scalar("left"),
    ],
};

pub const TEXT_FORMAT: ComponentSpec = ComponentSpec {
    alias: "textFormat",
    fields: &[
        FieldSpec::component("foregroundColor", "color"),
        FieldSpec::scalar("fontFamily"),
        FieldSpec::scalar("fontSize"),
        FieldSpec::scalar("bold"),
        FieldSpec::scalar("italic"),
        FieldSpec::scalar("strikethrough"),
        FieldSpec::scalar("underline"),
        FieldSpec::component("foregroundColorStyle", "colorStyle"),
        FieldSpec::component("link", "link"),
    ],
};

pub const TEXT_ROTATION: ComponentSpec = ComponentSpec {
    alias: "textRotation",
    fields: &[FieldSpec::scalar("angle"), FieldSpec::scalar("vertical")],
};

pub const NUMBER_FORMAT: ComponentSpec = ComponentSpec {
    alias: "numberFormat",
    fields: &[
        FieldSpec::scalar("type").required(),
        FieldSpec::scalar("pattern"),
    ],
};

pub const LINK: ComponentSpec = ComponentSpec {
    alias: "link",
    fields: &[FieldSpec::scalar("uri")],
};

pub const GRID_RANGE: ComponentSpec = ComponentSpec {
    alias: "gridRange",
    fields: &[
        FieldSpec::scalar("sheetId"),
        FieldSpec::scalar("startRowIndex"),
        FieldSpec::scalar("endRowIndex"),
        FieldSpec::scalar("startColumnIndex"),
        FieldSpec::scalar("endColumnIndex"),
    ],
};

pub const BOOLEAN_CONDITION: ComponentSpec = ComponentSpec {
    alias: "booleanCondition",
    fields: &[
        FieldSpec::scalar("type").required(),
        FieldSpec::list("values", "conditionValue"),
    ],
};

pub const CONDITION_VALUE: ComponentSpec = ComponentSpec {
    alias: "conditionValue",
    fields: &[
        FieldSpec::scalar("relativeDate"),
        FieldSpec::scalar("userEnteredValue"),
    ],
};

pub const INTERPOLATION_POINT: ComponentSpec = ComponentSpec {
    alias: "interpolationPoint",
    fields: &[
        FieldSpec::component("color", "color").required(),
        FieldSpec::scalar("type").required(),
        FieldSpec::scalar("value"),
    ],
};

pub const GRADIENT_RULE: ComponentSpec = ComponentSpec {
    alias: "gradientRule",
    fields: &[
        FieldSpec::component("minpoint", "interpolationPoint"),
        FieldSpec::component("midpoint", "interpolationPoint"),
        FieldSpec::component("maxpoint", "interpolationPoint"),
    ],
};

pub const BOOLEAN_RULE: ComponentSpec = ComponentSpec {
    alias: "booleanRule",
    fields: &[
        FieldSpec::component("condition", "booleanCondition").required(),
        FieldSpec::component("format", "cellFormat").required(),
    ],
};

pub const CONDITIONAL_FORMAT_RULE: ComponentSpec = ComponentSpec {
    alias: "conditionalFormatRule",
    fields: &[
        FieldSpec::list("ranges", "gridRange").required(),
        FieldSpec::component("booleanRule", "booleanRule"),
        FieldSpec::component("gradientRule", "gradientRule"),
    ],
};

pub const DATA_VALIDATION_RULE: ComponentSpec = ComponentSpec {
    alias: "dataValidationRule",
    fields: &[
        FieldSpec::component("condition", "booleanCondition").required(),
        FieldSpec::scalar("inputMessage"),
        FieldSpec::scalar("strict"),
        FieldSpec::scalar("showCustomUi"),
    ],
};

/// Every registered component table.
pub const COMPONENTS: &[&ComponentSpec] = &[
    &CELL_FORMAT,
    &COLOR,
    &COLOR_STYLE,
    &BORDER,
    &BORDERS,
    &PADDING,
    &TEXT_FORMAT,
    &TEXT_ROTATION,
    &NUMBER_FORMAT,
    &LINK,
    &GRID_RANGE,
    &BOOLEAN_CONDITION,
    &CONDITION_VALUE,
    &INTERPOLATION_POINT,
    &GRADIENT_RULE,
    &BOOLEAN_RULE,
    &CONDITIONAL_FORMAT_RULE,
    &DATA_VALIDATION_RULE,
];

/// Looks up the field table registered under `alias`.
pub fn component_spec(alias: &str) -> Option<&'static ComponentSpec> {
    COMPONENTS.iter().copied().find(|spec| spec.alias == alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_unique() {
        for (i, spec) in COMPONENTS.iter().enumerate() {
            for other in &COMPONENTS[i + 1..] {
                assert_ne!(spec.alias, other.alias);
            }
        }
    }

    #[test]
    fn every_nested_alias_is_registered() {
        for spec in COMPONENTS {
            for field in spec.fields {
                if let FieldKind::Component(alias) | FieldKind::ComponentList(alias) = field.kind {
                    assert!(
                        component_spec(alias).is_some(),
                        "{}.{} names unregistered alias {}",
                        spec.alias,
                        field.name,
                        alias
                    );
                }
            }
        }
    }

    #[test]
    fn lookup_by_alias() {
        assert_eq!(component_spec("cellFormat").unwrap().alias, "cellFormat");
        assert_eq!(component_spec("color").unwrap().fields.len(), 4);
        assert!(component_spec("relativeDate").is_none());
        assert!(component_spec("CellFormat").is_none());
    }

    #[test]
    fn border_style_is_required_and_width_deprecated() {
        let border = component_spec("border").unwrap();
        let style = border.fields.iter().find(|f| f.name == "style").unwrap();
        assert!(style.required);
        let width = border.fields.iter().find(|f| f.name == "width").unwrap();
        assert!(width.deprecated);
    }

    #[test]
    fn only_color_declares_defaults() {
        for spec in COMPONENTS {
            for field in spec.fields {
                if field.default.is_some() {
                    assert_eq!(spec.alias, "color");
                }
            }
        }
    }
}
