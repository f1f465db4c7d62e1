//! The conditional format rule list for one sheet.
//!
//! Fetched rules form a baseline snapshot and edits accumulate in a
//! working copy. Synchronizing rewrites the whole list: every baseline
//! index is deleted highest first, then every working rule is added
//! lowest first. The rewrite is not a minimal diff, but it stays correct
//! under reordering without tracking individual moves.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::FormatComponent;
use crate::conditionals::ConditionalFormatRule;
use crate::error::FormatError;

/// Deletes the rule at `index` on one sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteConditionalFormatRuleRequest {
    pub sheet_id: i64,
    pub index: usize,
}

/// Inserts `rule` at `index`, shifting later rules down.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddConditionalFormatRuleRequest {
    pub rule: ConditionalFormatRule,
    pub index: usize,
}

// The rule goes out in wire form so registered defaults are filled in.
impl Serialize for AddConditionalFormatRuleRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("rule", &self.rule.to_wire())?;
        map.serialize_entry("index", &self.index)?;
        map.end()
    }
}

/// One entry in the batch that rewrites a sheet's rule list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleRequest {
    DeleteConditionalFormatRule(DeleteConditionalFormatRuleRequest),
    AddConditionalFormatRule(AddConditionalFormatRuleRequest),
}

/// Where a rewrite batch is applied, typically a spreadsheet `batchUpdate`
/// transport. The whole batch must be applied in order or fail as a unit.
pub trait RuleBatchTarget {
    type Error;

    fn apply(&mut self, requests: &[RuleRequest]) -> Result<(), Self::Error>;
}

/// Ordered rule list bound to one sheet, with a baseline snapshot of the
/// last fetched or saved state.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionalFormatRules {
    sheet_id: i64,
    working: Vec<ConditionalFormatRule>,
    baseline: Vec<ConditionalFormatRule>,
}

impl ConditionalFormatRules {
    /// An empty list for a sheet with no rules yet.
    pub fn new(sheet_id: i64) -> ConditionalFormatRules {
        ConditionalFormatRules {
            sheet_id,
            working: Vec::new(),
            baseline: Vec::new(),
        }
    }

    /// Parses a sheet's `conditionalFormats` array. The parsed rules form
    /// both the working copy and the baseline.
    pub fn from_wire(sheet_id: i64, rules: &[Value]) -> Result<Self, FormatError> {
        let working = rules
            .iter()
            .map(ConditionalFormatRule::from_wire)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ConditionalFormatRules {
            sheet_id,
            baseline: working.clone(),
            working,
        })
    }

    pub fn sheet_id(&self) -> i64 {
        self.sheet_id
    }

    /// The working rules in order.
    pub fn rules(&self) -> &[ConditionalFormatRule] {
        &self.working
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConditionalFormatRule> {
        self.working.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ConditionalFormatRule> {
        self.working.get_mut(index)
    }

    /// Replaces the rule at `index`. Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, rule: ConditionalFormatRule) {
        self.working[index] = rule;
    }

    /// Inserts at `index`, shifting later rules down. Panics if `index`
    /// is past the end.
    pub fn insert(&mut self, index: usize, rule: ConditionalFormatRule) {
        self.working.insert(index, rule);
    }

    /// Removes and returns the rule at `index`. Panics if `index` is out
    /// of bounds.
    pub fn remove(&mut self, index: usize) -> ConditionalFormatRule {
        self.working.remove(index)
    }

    pub fn push(&mut self, rule: ConditionalFormatRule) {
        self.working.push(rule);
    }

    pub fn extend<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = ConditionalFormatRule>,
    {
        self.working.extend(rules);
    }

    pub fn clear(&mut self) {
        self.working.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionalFormatRule> {
        self.working.iter()
    }

    /// Whether the working copy differs from the baseline.
    pub fn dirty(&self) -> bool {
        self.working != self.baseline
    }

    /// The batch that brings the stored list in line with the working
    /// copy: delete every baseline index highest first, then add every
    /// working rule lowest first. Empty only when both lists are empty.
    pub fn pending_requests(&self) -> Vec<RuleRequest> {
        let mut requests = Vec::with_capacity(self.baseline.len() + self.working.len());
        for index in (0..self.baseline.len()).rev() {
            requests.push(RuleRequest::DeleteConditionalFormatRule(
                DeleteConditionalFormatRuleRequest {
                    sheet_id: self.sheet_id,
                    index,
                },
            ));
        }
        for (index, rule) in self.working.iter().enumerate() {
            requests.push(RuleRequest::AddConditionalFormatRule(
                AddConditionalFormatRuleRequest {
                    rule: rule.clone(),
                    index,
                },
            ));
        }
        requests
    }

    /// Writes the pending batch to `store`. Does not call the store at
    /// all when there is nothing to write; on success the baseline
    /// becomes the working copy.
    pub fn save<S: RuleBatchTarget>(&mut self, store: &mut S) -> Result<(), S::Error> {
        let requests = self.pending_requests();
        if requests.is_empty() {
            return Ok(());
        }
        store.apply(&requests)?;
        self.baseline = self.working.clone();
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ConditionalFormatRules {
    type Item = &'a ConditionalFormatRule;
    type IntoIter = std::slice::Iter<'a, ConditionalFormatRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.working.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::conditionals::{BooleanCondition, BooleanRule, ConditionType};
    use crate::format::CellFormat;
    use crate::range::GridRange;

    fn formula_rule(formula: &str) -> ConditionalFormatRule {
        let condition =
            BooleanCondition::new(ConditionType::CustomFormula, vec![formula.into()]).unwrap();
        ConditionalFormatRule::boolean(
            vec![GridRange {
                sheet_id: 9,
                start_row_index: Some(0),
                end_row_index: Some(5),
                start_column_index: Some(0),
                end_column_index: Some(2),
            }],
            BooleanRule::new(condition, CellFormat::default()).unwrap(),
        )
    }

    struct Recorder {
        batches: Vec<Vec<RuleRequest>>,
    }

    impl Recorder {
        fn new() -> Recorder {
            Recorder {
                batches: Vec::new(),
            }
        }
    }

    impl RuleBatchTarget for Recorder {
        type Error = ();

        fn apply(&mut self, requests: &[RuleRequest]) -> Result<(), ()> {
            self.batches.push(requests.to_vec());
            Ok(())
        }
    }

    #[test]
    fn rewrite_deletes_high_to_low_then_adds_low_to_high() {
        let mut rules = ConditionalFormatRules::new(9);
        rules.push(formula_rule("=A1>1"));
        rules.push(formula_rule("=A1>2"));
        let mut store = Recorder::new();
        rules.save(&mut store).unwrap();

        rules.remove(0);
        rules.push(formula_rule("=A1>3"));

        let requests = rules.pending_requests();
        assert_eq!(
            requests,
            vec![
                RuleRequest::DeleteConditionalFormatRule(DeleteConditionalFormatRuleRequest {
                    sheet_id: 9,
                    index: 1,
                }),
                RuleRequest::DeleteConditionalFormatRule(DeleteConditionalFormatRuleRequest {
                    sheet_id: 9,
                    index: 0,
                }),
                RuleRequest::AddConditionalFormatRule(AddConditionalFormatRuleRequest {
                    rule: formula_rule("=A1>2"),
                    index: 0,
                }),
                RuleRequest::AddConditionalFormatRule(AddConditionalFormatRuleRequest {
                    rule: formula_rule("=A1>3"),
                    index: 1,
                }),
            ]
        );
    }

    #[test]
    fn save_skips_the_store_when_there_is_nothing_to_write() {
        let mut rules = ConditionalFormatRules::new(0);
        let mut store = Recorder::new();
        rules.save(&mut store).unwrap();
        assert_eq!(store.batches.len(), 0);
    }

    #[test]
    fn successful_save_resets_the_baseline() {
        let mut rules = ConditionalFormatRules::new(3);
        rules.push(formula_rule("=B2=0"));
        assert!(rules.dirty());

        let mut store = Recorder::new();
        rules.save(&mut store).unwrap();
        assert!(!rules.dirty());
        assert_eq!(store.batches.len(), 1);

        rules.set(0, formula_rule("=B2=1"));
        assert!(rules.dirty());
    }

    #[test]
    fn failed_save_keeps_the_baseline() {
        struct Failing;

        impl RuleBatchTarget for Failing {
            type Error = &'static str;

            fn apply(&mut self, _requests: &[RuleRequest]) -> Result<(), &'static str> {
                Err("offline")
            }
        }

        let mut rules = ConditionalFormatRules::new(3);
        rules.push(formula_rule("=B2=0"));
        assert_eq!(rules.save(&mut Failing), Err("offline"));
        assert!(rules.dirty());
    }
}
