use pretty_assertions::assert_eq;
use serde_json::json;
use sheetfmt_model::{
    AnyComponent, Border, BorderStyle, CellFormat, Color, ColorStyle, ConditionalFormatRule,
    DataValidationRule, FormatComponent, FormatError, GridRange, HorizontalAlignment,
    TextRotation, ThemeColorType,
};

#[test]
fn wire_data_fills_registered_color_defaults() {
    assert_eq!(
        Color::new(1.0, 0.25, 0.5).to_wire(),
        json!({"red": 1.0, "green": 0.25, "blue": 0.5, "alpha": 1.0})
    );
    assert_eq!(
        Color::default().to_wire(),
        json!({"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0})
    );
}

#[test]
fn unset_fields_never_reach_the_wire() {
    let format = CellFormat {
        horizontal_alignment: Some(HorizontalAlignment::Center),
        ..Default::default()
    };
    assert_eq!(format.to_wire(), json!({"horizontalAlignment": "CENTER"}));
}

#[test]
fn nested_components_keep_their_wire_names() {
    let format = CellFormat {
        background_color_style: Some(ColorStyle::theme(ThemeColorType::Accent1)),
        ..Default::default()
    };
    assert_eq!(format.to_wire(), json!({"backgroundColorStyle": {"themeColor": "ACCENT1"}}));
}

#[test]
fn deprecated_border_width_is_tolerated_and_dropped() {
    let border = Border::from_wire(&json!({
        "style": "SOLID",
        "width": 2,
        "color": {"red": 1.0},
    }))
    .unwrap();
    assert_eq!(border.style, BorderStyle::Solid);
    assert_eq!(border.color, Some(Color::new(1.0, 0.0, 0.0)));

    let wire = border.to_wire();
    assert!(wire.get("width").is_none());
}

#[test]
fn unknown_wire_fields_are_rejected() {
    let err = CellFormat::from_wire(&json!({"fontFamily": "Ubuntu"})).unwrap_err();
    assert!(err.to_string().starts_with("invalid cellFormat"));
}

#[test]
fn component_dispatch_knows_every_alias() {
    let wire = json!({"horizontalAlignment": "LEFT"});
    let parsed = AnyComponent::from_wire("cellFormat", &wire).unwrap();
    assert_eq!(parsed.alias(), "cellFormat");
    assert_eq!(parsed.to_wire(), wire);

    assert_eq!(
        AnyComponent::from_wire("bogus", &json!({})),
        Err(FormatError::UnknownComponent("bogus".to_string()))
    );
}

#[test]
fn text_rotation_is_a_one_key_map() {
    assert_eq!(TextRotation::Angle(45).to_wire(), json!({"angle": 45}));
    assert_eq!(TextRotation::Vertical(true).to_wire(), json!({"vertical": true}));

    let err = TextRotation::from_wire(&json!({"angle": 45, "vertical": true})).unwrap_err();
    assert!(err.to_string().contains("not both or neither"));
    let err = TextRotation::from_wire(&json!({})).unwrap_err();
    assert!(err.to_string().contains("not both or neither"));
}

#[test]
fn inverted_grid_ranges_do_not_parse() {
    let err = GridRange::from_wire(&json!({
        "sheetId": 0,
        "startRowIndex": 5,
        "endRowIndex": 2,
    }))
    .unwrap_err();
    assert!(err.to_string().contains("start row index 5 exceeds end index 2"));
}

#[test]
fn fetched_rules_round_trip_with_defaults_applied() {
    let wire = json!({
        "ranges": [{
            "sheetId": 0,
            "startRowIndex": 0,
            "endRowIndex": 5,
            "startColumnIndex": 0,
            "endColumnIndex": 1,
        }],
        "booleanRule": {
            "condition": {
                "type": "NUMBER_GREATER",
                "values": [{"userEnteredValue": "6"}],
            },
            "format": {"backgroundColor": {"red": 1.0}},
        },
    });

    let rule = ConditionalFormatRule::from_wire(&wire).unwrap();
    let condition = &rule.boolean_rule().unwrap().condition;
    assert_eq!(condition.values.len(), 1);

    let out = rule.to_wire();
    assert_eq!(
        out["booleanRule"]["format"]["backgroundColor"],
        json!({"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0})
    );
    assert_eq!(out["ranges"], wire["ranges"]);
}

#[test]
fn validation_rules_reject_format_only_operators() {
    let err = DataValidationRule::from_wire(&json!({
        "condition": {"type": "BLANK"},
    }))
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("condition type BLANK cannot be used for data validation"));
}

#[test]
fn null_valued_fields_parse_as_absent() {
    let format = CellFormat::from_wire(&json!({
        "horizontalAlignment": "LEFT",
        "textFormat": null,
    }))
    .unwrap();
    assert_eq!(format.text_format, None);
    assert_eq!(format.horizontal_alignment, Some(HorizontalAlignment::Left));
}
