use std::borrow::Cow;

/// A node in a property-list document.
///
/// `Dict` keeps its entries as a pair vector so that insertion order is the
/// serialization order. Sublime's theme format is sensitive to the order of
/// the `settings` array, so nothing in here may reorder entries.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(Cow<'static, str>),
    Integer(i64),
    Real(f64),
    Array(Vec<Value>),
    Dict(Vec<(Cow<'static, str>, Value)>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Array(_) => "array",
            Value::Dict(_) => "dict",
        }
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Real(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

macro_rules! dict {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::value::Value::Dict(vec![
            $(($key.into(), $crate::value::Value::from($value))),*
        ])
    };
}

pub(crate) use dict;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dict_preserves_insertion_order() {
        let node = dict! {
            "zebra" => "z",
            "apple" => "a",
            "mango" => 3,
        };
        let Value::Dict(entries) = node else {
            panic!("dict! did not build a dict");
        };

        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_ref()).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(Value::from(8), Value::Integer(8));
        assert_eq!(Value::from(2.5), Value::Real(2.5));
        assert_eq!(
            Value::from(vec![Value::from("a"), Value::from(1)]),
            Value::Array(vec![Value::from("a"), Value::from(1)])
        );
    }
}
