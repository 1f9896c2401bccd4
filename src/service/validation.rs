//! Input normalization for menu item creation: alias lookup, then integer coercion.

use crate::case::aliases;
use crate::error::ValidationError;
use serde_json::{Map, Value};

/// Ordered spellings accepted for one field; the first one present in the body wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldAliases {
    pub field: &'static str,
    pub accepted: Vec<String>,
}

impl FieldAliases {
    pub fn for_field(field: &'static str) -> Self {
        FieldAliases {
            field,
            accepted: aliases(field),
        }
    }

    /// First accepted spelling present with a non-null value. A JSON `null` counts as absent.
    pub fn lookup<'a>(&self, body: &'a Map<String, Value>) -> Option<&'a Value> {
        self.accepted
            .iter()
            .find_map(|name| body.get(name.as_str()))
            .filter(|v| !v.is_null())
    }

    fn require<'a>(&self, body: &'a Map<String, Value>) -> Result<&'a Value, ValidationError> {
        self.lookup(body).ok_or(ValidationError::Missing(self.field))
    }
}

/// The three integers a menu item needs, before the price range and reference checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItemInput {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl MenuItemInput {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let body = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let price = FieldAliases::for_field("price");
        let pizza_id = FieldAliases::for_field("pizza_id");
        let restaurant_id = FieldAliases::for_field("restaurant_id");

        let raw_price = price.require(body)?;
        let raw_pizza = pizza_id.require(body)?;
        let raw_restaurant = restaurant_id.require(body)?;

        Ok(MenuItemInput {
            price: coerce_int(price.field, raw_price)?,
            pizza_id: coerce_int(pizza_id.field, raw_pizza)?,
            restaurant_id: coerce_int(restaurant_id.field, raw_restaurant)?,
        })
    }
}

/// Lenient integer coercion: integers as-is, finite floats truncated toward zero,
/// booleans as 0/1, strings trimmed and parsed as a base-10 literal (see [`parse_int_literal`]).
pub fn coerce_int(field: &'static str, v: &Value) -> Result<i64, ValidationError> {
    let err = || ValidationError::NotAnInteger(field);
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64().filter(|f| f.is_finite() && n.as_u64().is_none()) {
                let t = f.trunc();
                if t >= i64::MIN as f64 && t <= i64::MAX as f64 {
                    Ok(t as i64)
                } else {
                    Err(err())
                }
            } else {
                Err(err())
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => parse_int_literal(s).ok_or_else(err),
        _ => Err(err()),
    }
}

/// Optional sign, then digits that may be grouped by single underscores (`"1_000"`).
/// Leading, trailing or doubled underscores are not a number.
fn parse_int_literal(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("{}{}", sign, cleaned).parse().ok()
}
