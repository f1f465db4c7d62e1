//! Generic field arithmetic over serialized component maps.
//!
//! Every operation walks a [`ComponentSpec`] field table in declaration
//! order and treats JSON maps as partial field sets: an absent key means
//! "unspecified", which is not the same thing as the API's fallback value.
//! Overlay arithmetic therefore works on raw presence, while
//! [`apply_defaults`] fills declared fallbacks for serialization, masks,
//! and equality.

use serde_json::{Map, Value};

use crate::schema::{component_spec, ComponentSpec, FieldKind};

fn child_spec(alias: &str) -> &'static ComponentSpec {
    component_spec(alias).expect("nested alias registered in schema tables")
}

/// Present, non-null field value.
fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.as_object()?.get(name).filter(|v| !v.is_null())
}

/// Returns `value` with every declared fallback filled in, recursively,
/// and deprecated fields dropped.
pub(crate) fn apply_defaults(spec: &ComponentSpec, value: &Value) -> Value {
    let mut out = Map::new();
    for field_spec in spec.fields.iter().filter(|f| !f.deprecated) {
        match field(value, field_spec.name) {
            Some(present) => {
                let filled = match field_spec.kind {
                    FieldKind::Component(alias) => apply_defaults(child_spec(alias), present),
                    FieldKind::ComponentList(alias) => match present.as_array() {
                        Some(items) => Value::Array(
                            items
                                .iter()
                                .map(|item| apply_defaults(child_spec(alias), item))
                                .collect(),
                        ),
                        None => present.clone(),
                    },
                    FieldKind::Scalar => present.clone(),
                };
                out.insert(field_spec.name.to_string(), filled);
            }
            None => {
                if let Some(default) = field_spec.default {
                    out.insert(field_spec.name.to_string(), Value::from(default));
                }
            }
        }
    }
    Value::Object(out)
}

/// Dotted paths of every present (or defaulted) field, in table order,
/// recursing into nested components.
pub(crate) fn affected_paths(spec: &ComponentSpec, value: &Value, prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(spec, value, prefix, &mut paths);
    paths
}

fn collect_paths(spec: &ComponentSpec, value: &Value, prefix: &str, paths: &mut Vec<String>) {
    for field_spec in spec.fields.iter().filter(|f| !f.deprecated) {
        let dotted = format!("{}.{}", prefix, field_spec.name);
        match (field(value, field_spec.name), field_spec.kind) {
            (Some(child), FieldKind::Component(alias)) => {
                collect_paths(child_spec(alias), child, &dotted, paths);
            }
            (Some(_), _) => paths.push(dotted),
            (None, _) => {
                if field_spec.default.is_some() {
                    paths.push(dotted);
                }
            }
        }
    }
}

/// Field-wise overlay of `b` onto `a`: `b` wins scalar conflicts, nested
/// components merge recursively, lists replace atomically.
pub(crate) fn add(spec: &ComponentSpec, a: &Value, b: &Value) -> Value {
    let mut out = Map::new();
    for field_spec in spec.fields.iter().filter(|f| !f.deprecated) {
        let left = field(a, field_spec.name);
        let right = field(b, field_spec.name);
        let merged = match field_spec.kind {
            FieldKind::Component(alias) => match (left, right) {
                (Some(x), Some(y)) => Some(add(child_spec(alias), x, y)),
                (Some(x), None) => Some(x.clone()),
                (None, Some(y)) => Some(y.clone()),
                (None, None) => None,
            },
            _ => right.or(left).cloned(),
        };
        if let Some(value) = merged {
            out.insert(field_spec.name.to_string(), value);
        }
    }
    Value::Object(out)
}

/// Fields carried identically by both sides; `None` when nothing
/// survives.
pub(crate) fn intersection(spec: &ComponentSpec, a: &Value, b: &Value) -> Option<Value> {
    let mut out = Map::new();
    for field_spec in spec.fields.iter().filter(|f| !f.deprecated) {
        let left = field(a, field_spec.name);
        let right = field(b, field_spec.name);
        let kept = match field_spec.kind {
            FieldKind::Component(alias) => match (left, right) {
                (Some(x), Some(y)) => intersection(child_spec(alias), x, y),
                _ => None,
            },
            _ => match (left, right) {
                (Some(x), Some(y)) if x == y => Some(x.clone()),
                _ => None,
            },
        };
        if let Some(value) = kept {
            out.insert(field_spec.name.to_string(), value);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(Value::Object(out))
    }
}

/// Fields of `a` that `b` lacks or contradicts; `None` when nothing
/// differs.
pub(crate) fn difference(spec: &ComponentSpec, a: &Value, b: &Value) -> Option<Value> {
    let mut out = Map::new();
    for field_spec in spec.fields.iter().filter(|f| !f.deprecated) {
        let left = field(a, field_spec.name);
        let right = field(b, field_spec.name);
        let kept = match field_spec.kind {
            FieldKind::Component(alias) => match (left, right) {
                (Some(x), Some(y)) => difference(child_spec(alias), x, y),
                (Some(x), None) => Some(x.clone()),
                _ => None,
            },
            _ => match (left, right) {
                (Some(x), Some(y)) if x != y => Some(x.clone()),
                (Some(x), None) => Some(x.clone()),
                _ => None,
            },
        };
        if let Some(value) = kept {
            out.insert(field_spec.name.to_string(), value);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(Value::Object(out))
    }
}
