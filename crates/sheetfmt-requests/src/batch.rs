//! Accumulator for one `batchUpdate` call.

use serde_json::{json, Value};

use crate::requests::Request;

/// Collects requests so that many edits go out as a single `batchUpdate`
/// body instead of one call each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchBuilder {
    requests: Vec<Request>,
}

impl BatchBuilder {
    pub fn new() -> BatchBuilder {
        BatchBuilder::default()
    }

    pub fn push(&mut self, request: impl Into<Request>) {
        self.requests.push(request.into());
    }

    pub fn extend<I>(&mut self, requests: I)
    where
        I: IntoIterator,
        I::Item: Into<Request>,
    {
        self.requests.extend(requests.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// The accumulated requests in submission order.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Drains the accumulated requests into a `batchUpdate` body. The
    /// builder is empty afterwards and can be reused.
    pub fn body(&mut self) -> Value {
        let requests: Vec<Request> = self.requests.drain(..).collect();
        json!({ "requests": requests })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::builders::set_frozen;

    #[test]
    fn body_drains_the_builder() {
        let mut batch = BatchBuilder::new();
        batch.push(set_frozen(0, Some(1), None).unwrap());
        assert_eq!(batch.len(), 1);

        let body = batch.body();
        assert!(batch.is_empty());
        assert_eq!(body["requests"].as_array().map(Vec::len), Some(1));

        assert_eq!(batch.body(), json!({"requests": []}));
    }
}
