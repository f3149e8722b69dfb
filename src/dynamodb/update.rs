use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// A partial mutation to apply atomically to one item.
///
/// Wraps a DynamoDB update expression together with its placeholder
/// bindings: `:value` placeholders bind to attribute values, and optional
/// `#name` placeholders stand in for attribute names that collide with
/// reserved words.
///
/// # Example
///
/// ```
/// use flexapi::dynamodb::UpdateSpec;
///
/// let spec = UpdateSpec::new("SET #name = :value")
///     .name("#name", "name")
///     .string_value(":value", "updated");
/// ```
#[derive(Debug, Clone)]
pub struct UpdateSpec {
    expression: String,
    values: HashMap<String, AttributeValue>,
    names: HashMap<String, String>,
}

impl UpdateSpec {
    /// Creates a spec from an update expression, e.g. `"SET price = :p"`.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            values: HashMap::new(),
            names: HashMap::new(),
        }
    }

    /// Binds a value placeholder (`:placeholder`) to an attribute value.
    pub fn value(mut self, placeholder: impl Into<String>, value: AttributeValue) -> Self {
        self.values.insert(placeholder.into(), value);
        self
    }

    /// Binds a value placeholder to a string value.
    pub fn string_value(self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(placeholder, AttributeValue::S(value.into()))
    }

    /// Binds a value placeholder to a number value.
    pub fn number_value(self, placeholder: impl Into<String>, value: impl Into<f64>) -> Self {
        self.value(placeholder, AttributeValue::N(value.into().to_string()))
    }

    /// Binds a name placeholder (`#placeholder`) to a real attribute name.
    pub fn name(mut self, placeholder: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.names.insert(placeholder.into(), attribute.into());
        self
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        String,
        HashMap<String, AttributeValue>,
        HashMap<String, String>,
    ) {
        (self.expression, self.values, self.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_expression_and_bindings() {
        let spec = UpdateSpec::new("SET #name = :value, price = :price")
            .name("#name", "name")
            .string_value(":value", "updated")
            .number_value(":price", 9.9);

        let (expression, values, names) = spec.into_parts();
        assert_eq!(expression, "SET #name = :value, price = :price");
        assert_eq!(
            values.get(":value"),
            Some(&AttributeValue::S("updated".to_string()))
        );
        assert_eq!(
            values.get(":price"),
            Some(&AttributeValue::N("9.9".to_string()))
        );
        assert_eq!(names.get("#name"), Some(&"name".to_string()));
    }

    #[test]
    fn names_are_optional() {
        let spec = UpdateSpec::new("REMOVE obsolete");
        let (expression, values, names) = spec.into_parts();
        assert_eq!(expression, "REMOVE obsolete");
        assert!(values.is_empty());
        assert!(names.is_empty());
    }
}
