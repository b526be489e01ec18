//! CMS field shapes.
//!
//! With live preview enabled, the CMS wraps each field as
//! `{"value": ..., "$": {"data-cslp": "<location>"}}` so the visual editor can
//! map rendered elements back to their source. Without it, the same field is
//! just the bare value. [`Field`] accepts either and is unwrapped exactly once,
//! at ingestion, via [`Field::into_parts`].

use serde::Deserialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Source location of an editable field, e.g. `mobile_phone.blt01.en-us.title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct EditTag {
    #[serde(rename = "data-cslp")]
    pub location: String,
}
impl Display for EditTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.location)
    }
}

/// A CMS field that is either a plain value or an editable wrapper.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Field<T> {
    Editable {
        value: T,
        #[serde(rename = "$", default)]
        tag: Option<EditTag>,
    },
    Plain(T),
}
impl<T> Field<T> {
    pub fn value(&self) -> &T {
        match self {
            Field::Editable { value, .. } | Field::Plain(value) => value,
        }
    }

    /// Splits the field into its value and any edit tag.
    pub fn into_parts(self) -> (T, Option<EditTag>) {
        match self {
            Field::Editable { value, tag } => (value, tag),
            Field::Plain(value) => (value, None),
        }
    }

    pub fn into_value(self) -> T {
        self.into_parts().0
    }
}
impl<T: Default> Default for Field<T> {
    fn default() -> Self {
        Field::Plain(T::default())
    }
}

/// A specification value as the CMS stores it: text, a bare number, or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
}
impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Scalar::Text(text) => write!(f, "{text}"),
            Scalar::Number(number) => write!(f, "{number}"),
            Scalar::Bool(true) => write!(f, "Yes"),
            Scalar::Bool(false) => write!(f, "No"),
        }
    }
}
impl Scalar {
    /// Interprets the value as a price; text is trimmed of a leading
    /// currency symbol and thousands separators.
    pub fn as_price(&self) -> Option<f64> {
        match self {
            Scalar::Number(number) => Some(*number),
            Scalar::Text(text) => text
                .trim()
                .trim_start_matches(|c: char| !c.is_ascii_digit())
                .replace(',', "")
                .parse()
                .ok(),
            Scalar::Bool(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""Pixel 9""#, "Pixel 9", None)]
    #[case(r#"{"value":"Pixel 9"}"#, "Pixel 9", None)]
    #[case(
        r#"{"value":"Pixel 9","$":{"data-cslp":"mobile_phone.blt01.en-us.title"}}"#,
        "Pixel 9",
        Some("mobile_phone.blt01.en-us.title")
    )]
    fn test_field_string(#[case] json: &str, #[case] value: &str, #[case] tag: Option<&str>) {
        let field: Field<String> = serde_json::from_str(json).unwrap();
        let (v, t) = field.into_parts();
        assert_eq!(v, value);
        assert_eq!(t.map(|t| t.location), tag.map(String::from));
    }

    #[rstest]
    #[case(r#"null"#, None)]
    #[case(r#""8GB""#, Some(Scalar::Text("8GB".to_string())))]
    #[case(r#"4000"#, Some(Scalar::Number(4000.0)))]
    #[case(r#"{"value":null,"$":{"data-cslp":"x"}}"#, None)]
    #[case(r#"{"value":6.1}"#, Some(Scalar::Number(6.1)))]
    fn test_field_scalar(#[case] json: &str, #[case] expected: Option<Scalar>) {
        let field: Field<Option<Scalar>> = serde_json::from_str(json).unwrap();
        assert_eq!(field.into_value(), expected);
    }

    #[rstest]
    #[case(Scalar::Text("12GB".to_string()), "12GB")]
    #[case(Scalar::Number(4000.0), "4000")]
    #[case(Scalar::Number(6.1), "6.1")]
    #[case(Scalar::Bool(true), "Yes")]
    fn test_scalar_display(#[case] scalar: Scalar, #[case] expected: &str) {
        assert_eq!(scalar.to_string(), expected);
    }

    #[rstest]
    #[case(Scalar::Number(799.0), Some(799.0))]
    #[case(Scalar::Text("$1,099.99".to_string()), Some(1099.99))]
    #[case(Scalar::Text("TBA".to_string()), None)]
    #[case(Scalar::Bool(false), None)]
    fn test_scalar_price(#[case] scalar: Scalar, #[case] expected: Option<f64>) {
        assert_eq!(scalar.as_price(), expected);
    }
}
