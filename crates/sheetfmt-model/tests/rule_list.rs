use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sheetfmt_model::{
    BooleanCondition, BooleanRule, CellFormat, Color, ConditionType, ConditionalFormatRule,
    ConditionalFormatRules, FormatComponent, GridRange, RuleBatchTarget, RuleRequest,
};

fn fetched_rules() -> Vec<Value> {
    vec![
        json!({
            "ranges": [{"sheetId": 4, "startRowIndex": 0, "endRowIndex": 10,
                        "startColumnIndex": 0, "endColumnIndex": 1}],
            "booleanRule": {
                "condition": {"type": "NOT_BLANK", "values": []},
                "format": {
                    "backgroundColor": {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
                },
            },
        }),
        json!({
            "ranges": [{"sheetId": 4, "startRowIndex": 0, "endRowIndex": 10,
                        "startColumnIndex": 1, "endColumnIndex": 2}],
            "booleanRule": {
                "condition": {"type": "CUSTOM_FORMULA", "values": [{"userEnteredValue": "=B1>5"}]},
                "format": {"textFormat": {"bold": true}},
            },
        }),
    ]
}

fn highlight_rule(formula: &str) -> ConditionalFormatRule {
    let condition =
        BooleanCondition::new(ConditionType::CustomFormula, vec![formula.into()]).unwrap();
    ConditionalFormatRule::boolean(
        vec![GridRange {
            sheet_id: 4,
            start_row_index: Some(0),
            end_row_index: Some(10),
            start_column_index: Some(2),
            end_column_index: Some(3),
        }],
        BooleanRule::new(
            condition,
            CellFormat {
                background_color: Some(Color::from_hex("#fce8b2").unwrap()),
                ..Default::default()
            },
        )
        .unwrap(),
    )
}

struct Recorder {
    batches: Vec<Vec<RuleRequest>>,
}

impl RuleBatchTarget for Recorder {
    type Error = String;

    fn apply(&mut self, requests: &[RuleRequest]) -> Result<(), String> {
        self.batches.push(requests.to_vec());
        Ok(())
    }
}

#[test]
fn fetched_lists_start_clean() {
    let rules = ConditionalFormatRules::from_wire(4, &fetched_rules()).unwrap();
    assert_eq!(rules.len(), 2);
    assert!(!rules.dirty());
    assert_eq!(rules.sheet_id(), 4);
}

#[test]
fn saving_an_unchanged_list_still_rewrites_it() {
    let mut rules = ConditionalFormatRules::from_wire(4, &fetched_rules()).unwrap();
    let mut store = Recorder {
        batches: Vec::new(),
    };
    rules.save(&mut store).unwrap();

    // Two deletes and two adds; the rewrite never diffs.
    assert_eq!(store.batches.len(), 1);
    assert_eq!(store.batches[0].len(), 4);
}

#[test]
fn clearing_then_saving_empties_the_stored_list() {
    let mut rules = ConditionalFormatRules::from_wire(4, &fetched_rules()).unwrap();
    rules.clear();
    assert!(rules.is_empty());
    assert!(rules.dirty());

    let mut store = Recorder {
        batches: Vec::new(),
    };
    rules.save(&mut store).unwrap();
    assert!(!rules.dirty());
    assert_eq!(store.batches.len(), 1);

    // Nothing to add back, so the batch is the two deletes, highest first.
    let body = serde_json::to_value(&store.batches[0]).unwrap();
    assert_eq!(
        body,
        json!([
            {"deleteConditionalFormatRule": {"sheetId": 4, "index": 1}},
            {"deleteConditionalFormatRule": {"sheetId": 4, "index": 0}},
        ])
    );

    let mut stored = fetched_rules();
    for request in &store.batches[0] {
        match request {
            RuleRequest::DeleteConditionalFormatRule(delete) => {
                stored.remove(delete.index);
            }
            RuleRequest::AddConditionalFormatRule(add) => {
                stored.insert(add.index, add.rule.to_wire());
            }
        }
    }
    assert_eq!(stored, Vec::<Value>::new());
}

#[test]
fn a_bad_fetched_rule_fails_the_whole_parse() {
    let mut wire = fetched_rules();
    wire.push(json!({"ranges": [{"sheetId": 4}]}));
    let err = ConditionalFormatRules::from_wire(4, &wire).unwrap_err();
    assert!(err
        .to_string()
        .contains("exactly one of booleanRule or gradientRule"));
}

#[test]
fn saving_rewrites_the_stored_list() {
    let mut rules = ConditionalFormatRules::from_wire(4, &fetched_rules()).unwrap();
    rules.push(highlight_rule("=C1<0"));

    let mut store = Recorder {
        batches: Vec::new(),
    };
    rules.save(&mut store).unwrap();
    assert!(!rules.dirty());
    assert_eq!(store.batches.len(), 1);

    let body = serde_json::to_value(&store.batches[0]).unwrap();
    assert_eq!(body[0], json!({"deleteConditionalFormatRule": {"sheetId": 4, "index": 1}}));
    assert_eq!(body[1], json!({"deleteConditionalFormatRule": {"sheetId": 4, "index": 0}}));
    assert_eq!(body[2]["addConditionalFormatRule"]["index"], json!(0));
    assert_eq!(body[4]["addConditionalFormatRule"]["index"], json!(2));
    assert_eq!(
        body[4]["addConditionalFormatRule"]["rule"]["booleanRule"]["format"]["backgroundColor"],
        json!({
            "red": 252.0 / 255.0,
            "green": 232.0 / 255.0,
            "blue": 178.0 / 255.0,
            "alpha": 1.0,
        })
    );
}

#[test]
fn saved_rules_carry_their_wire_form() {
    let mut rules = ConditionalFormatRules::new(4);
    rules.push(highlight_rule("=C1<0"));
    let body = serde_json::to_value(rules.pending_requests()).unwrap();

    let added = &body[0]["addConditionalFormatRule"]["rule"];
    assert_eq!(
        added["booleanRule"]["condition"],
        json!({"type": "CUSTOM_FORMULA", "values": [{"userEnteredValue": "=C1<0"}]})
    );
    assert_eq!(added["ranges"][0]["sheetId"], json!(4));
}

#[test]
fn replaying_the_requests_rebuilds_the_working_list() {
    let mut rules = ConditionalFormatRules::from_wire(4, &fetched_rules()).unwrap();
    rules.set(0, highlight_rule("=A1>0"));
    rules.extend([highlight_rule("=C1<0")]);

    let mut stored = fetched_rules();
    for request in rules.pending_requests() {
        match request {
            RuleRequest::DeleteConditionalFormatRule(delete) => {
                assert_eq!(delete.sheet_id, 4);
                stored.remove(delete.index);
            }
            RuleRequest::AddConditionalFormatRule(add) => {
                stored.insert(add.index, add.rule.to_wire());
            }
        }
    }

    let rewritten: Vec<Value> = rules.iter().map(ConditionalFormatRule::to_wire).collect();
    assert_eq!(stored, rewritten);
}

#[test]
fn failed_saves_leave_the_list_dirty() {
    struct Offline;

    impl RuleBatchTarget for Offline {
        type Error = String;

        fn apply(&mut self, _requests: &[RuleRequest]) -> Result<(), String> {
            Err("connection reset".to_string())
        }
    }

    let mut rules = ConditionalFormatRules::new(4);
    rules.push(highlight_rule("=C1<0"));
    assert_eq!(rules.save(&mut Offline), Err("connection reset".to_string()));
    assert!(rules.dirty());

    let mut store = Recorder {
        batches: Vec::new(),
    };
    rules.save(&mut store).unwrap();
    assert!(!rules.dirty());
}
