//! Value - A property value that is either a literal or an intrinsic function
//!
//! Any property in a CloudFormation template may hold an intrinsic function
//! expression (`Ref`, `Fn::GetAtt`, ...) in place of the literal value, from a
//! single string up to a whole list or nested object. `Value<T>` carries
//! either form.

use std::collections::BTreeMap;

use log::warn;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IntrinsicError;
use crate::intrinsic::Intrinsic;

/// Arbitrary JSON (CloudFormation `Json` primitive type)
pub type Json = serde_json::Value;

/// Argument of an intrinsic function: any JSON literal or a nested intrinsic
pub type Expr = Value<Json>;

/// Literal value of type `T`, or an intrinsic function evaluated at deploy time
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Literal(T),
    Intrinsic(Intrinsic),
}

impl<T> Value<T> {
    pub fn literal(value: impl Into<T>) -> Self {
        Value::Literal(value.into())
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }

    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Value::Literal(value) => Some(value),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Literal(_) => None,
            Value::Intrinsic(intrinsic) => Some(intrinsic),
        }
    }

    /// Transform the literal, leaving intrinsics untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Value::Literal(value) => Value::Literal(f(value)),
            Value::Intrinsic(intrinsic) => Value::Intrinsic(intrinsic),
        }
    }
}

impl<T> From<Intrinsic> for Value<T> {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(intrinsic)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(value: String) -> Self {
        Value::Literal(value)
    }
}

impl From<bool> for Value<bool> {
    fn from(value: bool) -> Self {
        Value::Literal(value)
    }
}

impl From<i64> for Value<i64> {
    fn from(value: i64) -> Self {
        Value::Literal(value)
    }
}

impl From<f64> for Value<f64> {
    fn from(value: f64) -> Self {
        Value::Literal(value)
    }
}

/// Reads intrinsic functions out of the JSON. An object that looks like an
/// intrinsic but is malformed (`{"Fn::Bogus": 1}`) stays a literal and is
/// logged; use [`Value::parse`] to reject it instead.
impl From<Json> for Value<Json> {
    fn from(value: Json) -> Self {
        match Intrinsic::from_json(&value) {
            Ok(Some(intrinsic)) => Value::Intrinsic(intrinsic),
            Ok(None) => Value::Literal(value),
            Err(e) => {
                warn!("keeping {} as a literal: {}", value, e);
                Value::Literal(value)
            }
        }
    }
}

impl<T> From<Vec<T>> for Value<Vec<T>> {
    fn from(values: Vec<T>) -> Self {
        Value::Literal(values)
    }
}

impl<V> From<BTreeMap<String, V>> for Value<BTreeMap<String, V>> {
    fn from(values: BTreeMap<String, V>) -> Self {
        Value::Literal(values)
    }
}

impl Value<Json> {
    /// Expression from JSON, failing on malformed or unknown intrinsics
    /// the same way deserialization does
    pub fn parse(json: Json) -> Result<Self, IntrinsicError> {
        Ok(match Intrinsic::from_json(&json)? {
            Some(intrinsic) => Value::Intrinsic(intrinsic),
            None => Value::Literal(json),
        })
    }

    /// JSON form of this expression
    pub fn to_json(&self) -> Json {
        match self {
            Value::Literal(json) => json.clone(),
            Value::Intrinsic(intrinsic) => intrinsic.to_json(),
        }
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(value) => value.serialize(serializer),
            Value::Intrinsic(intrinsic) => intrinsic.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        match Intrinsic::from_json(&json).map_err(D::Error::custom)? {
            Some(intrinsic) => Ok(Value::Intrinsic(intrinsic)),
            None => T::deserialize(json)
                .map(Value::Literal)
                .map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_string_round_trips() {
        let value: Value<String> = serde_json::from_value(json!("example.com")).unwrap();
        assert_eq!(value, Value::Literal("example.com".to_string()));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("example.com"));
    }

    #[test]
    fn ref_is_read_as_intrinsic() {
        let value: Value<String> = serde_json::from_value(json!({"Ref": "DomainName"})).unwrap();
        assert_eq!(value, Value::Intrinsic(Intrinsic::reference("DomainName")));
        assert!(value.is_intrinsic());
        assert!(value.as_literal().is_none());
    }

    #[test]
    fn intrinsic_accepted_for_numbers_and_booleans() {
        let port: Value<i64> = serde_json::from_value(json!({"Ref": "Port"})).unwrap();
        assert!(port.is_intrinsic());

        let enabled: Value<bool> =
            serde_json::from_value(json!({"Fn::Equals": [{"Ref": "Env"}, "prod"]})).unwrap();
        assert!(enabled.is_intrinsic());
    }

    #[test]
    fn numeric_strings_are_not_numbers() {
        assert!(serde_json::from_value::<Value<i64>>(json!("80")).is_err());
        assert!(serde_json::from_value::<Value<bool>>(json!("true")).is_err());
    }

    #[test]
    fn double_accepts_integer_json() {
        let rate: Value<f64> = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(rate, Value::Literal(5.0));
    }

    #[test]
    fn unknown_function_is_an_error() {
        let result = serde_json::from_value::<Value<String>>(json!({"Fn::Frobnicate": "x"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Fn::Frobnicate"), "{err}");
    }

    #[test]
    fn malformed_intrinsic_is_not_a_literal() {
        assert!(serde_json::from_value::<Value<Json>>(json!({"Ref": ["a", "b"]})).is_err());
    }

    #[test]
    fn objects_with_several_keys_are_literals() {
        let value: Value<Json> =
            serde_json::from_value(json!({"Ref": "A", "Other": 1})).unwrap();
        assert!(!value.is_intrinsic());
    }

    #[test]
    fn map_keeps_intrinsics() {
        let value: Value<i64> = Intrinsic::reference("Port").into();
        let mapped = value.map(|n| n.to_string());
        assert_eq!(mapped.as_intrinsic(), Some(&Intrinsic::reference("Port")));

        let literal = Value::Literal(8080i64).map(|n| n.to_string());
        assert_eq!(literal.as_literal().map(String::as_str), Some("8080"));
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from("a"), Value::Literal("a".to_string()));
        assert_eq!(Value::from(true), Value::Literal(true));
        assert_eq!(Value::from(3i64), Value::Literal(3));
        assert_eq!(
            Value::<String>::literal("b"),
            Value::Literal("b".to_string())
        );
        assert!(Value::from(json!({"Ref": "X"})).is_intrinsic());
        assert_eq!(
            Value::from(vec![Value::from("a")]),
            Value::Literal(vec![Value::Literal("a".to_string())])
        );
    }

    #[test]
    fn malformed_json_expression_is_kept_literal_or_rejected() {
        let bogus = json!({"Fn::Bogus": 1});
        assert_eq!(Value::from(bogus.clone()), Value::Literal(bogus.clone()));
        assert!(Expr::parse(bogus.clone()).is_err());
        assert!(serde_json::from_value::<Expr>(bogus).is_err());

        assert!(Expr::parse(json!({"Ref": "X"})).unwrap().is_intrinsic());
        assert_eq!(
            Expr::parse(json!([1, 2])).unwrap(),
            Value::Literal(json!([1, 2]))
        );
    }

    #[test]
    fn whole_list_may_be_an_intrinsic() {
        let aliases: Value<Vec<Value<String>>> =
            serde_json::from_value(json!({"Fn::Split": [",", {"Ref": "Aliases"}]})).unwrap();
        assert!(aliases.is_intrinsic());

        let aliases: Value<Vec<Value<String>>> =
            serde_json::from_value(json!(["a.example.com", {"Ref": "Alias"}])).unwrap();
        let items = aliases.as_literal().unwrap();
        assert!(!items[0].is_intrinsic());
        assert!(items[1].is_intrinsic());
    }
}
