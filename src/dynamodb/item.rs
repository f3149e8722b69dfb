use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// A DynamoDB item: a collection of named attributes.
///
/// Items are schemaless; the store only enforces the types of the key
/// attributes at write time. The same type doubles as a key when it holds
/// just the partition key (and sort key, for composite-key tables).
///
/// # Example
///
/// ```
/// use flexapi::dynamodb::Item;
///
/// let item = Item::new()
///     .set_string("id", "123")
///     .set_string("name", "Produto Teste")
///     .set_number("price", 10.5);
/// assert_eq!(item.get_string("name"), Some(&"Produto Teste".to_string()));
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string attribute.
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    /// Sets a number attribute.
    ///
    /// DynamoDB transports numbers as strings with high precision.
    pub fn set_number(mut self, key: impl Into<String>, value: impl Into<f64>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::N(value.into().to_string()));
        self
    }

    /// Sets a boolean attribute.
    pub fn set_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::Bool(value));
        self
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }

    /// Gets the value of an attribute as a number (f64).
    ///
    /// Returns `None` if the attribute doesn't exist, is not a number, or
    /// can't be parsed as f64.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.attributes
            .get(key)
            .and_then(|av| av.as_n().ok())
            .and_then(|n| n.parse().ok())
    }

    /// Gets the value of an attribute as a boolean.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.attributes
            .get(key)
            .and_then(|av| av.as_bool().ok())
            .copied()
    }

    /// Returns `true` if the item has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Builds an `Item` from any serializable value via serde_dynamo.
    pub fn from_struct<T: Serialize>(value: T) -> Result<Self, serde_dynamo::Error> {
        let attributes = serde_dynamo::aws_sdk_dynamodb_1::to_item(value)?;
        Ok(Self { attributes })
    }

    /// Deserializes the item into a concrete type via serde_dynamo.
    pub fn into_struct<T: DeserializeOwned>(self) -> Result<T, serde_dynamo::Error> {
        serde_dynamo::aws_sdk_dynamodb_1::from_item(self.attributes)
    }

    pub(crate) fn into_attributes(self) -> HashMap<String, AttributeValue> {
        self.attributes
    }
}

impl From<HashMap<String, AttributeValue>> for Item {
    fn from(attributes: HashMap<String, AttributeValue>) -> Self {
        Self { attributes }
    }
}
