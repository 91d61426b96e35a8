//! Literal to property-type conversion
//!
//! Enumerations are matched case-insensitively by member name, or by
//! ordinal when the literal is an integer. Everything else goes through a
//! general coercion:
//!
//! | Target | Accepted literals |
//! |--------|-------------------|
//! | string | any (rendered) |
//! | bool | bool, "true"/"false" (any case), numbers (non-zero is true) |
//! | char | one-character string, integer code point |
//! | integers | integer (range-checked), float (rounded half to even), numeric string, bool |
//! | floats | integer, float, numeric string, bool |
//! | object | none; objects come from references |

use std::str::FromStr;

use ioc_domain::{Error, PropertyInfo, PropertyType, PropertyValue, Result, Value};

/// Convert a configuration literal to the declared type of `property`
pub fn convert_value(property: &PropertyInfo, value: &Value) -> Result<PropertyValue> {
    let fail = || Error::conversion(property.name, property.ty.to_string(), value.to_string());

    let converted = match property.ty {
        PropertyType::Enum(members) => parse_enum(members, value),
        PropertyType::String => Some(PropertyValue::String(render(value))),
        PropertyType::Bool => to_bool(value).map(PropertyValue::Bool),
        PropertyType::Char => to_char(value).map(PropertyValue::Char),
        PropertyType::I8 => to_integer(value).map(PropertyValue::I8),
        PropertyType::I16 => to_integer(value).map(PropertyValue::I16),
        PropertyType::I32 => to_integer(value).map(PropertyValue::I32),
        PropertyType::I64 => to_integer(value).map(PropertyValue::I64),
        PropertyType::U8 => to_integer(value).map(PropertyValue::U8),
        PropertyType::U16 => to_integer(value).map(PropertyValue::U16),
        PropertyType::U32 => to_integer(value).map(PropertyValue::U32),
        PropertyType::U64 => to_integer(value).map(PropertyValue::U64),
        #[allow(clippy::cast_possible_truncation)]
        PropertyType::F32 => to_float(value).map(|f| PropertyValue::F32(f as f32)),
        PropertyType::F64 => to_float(value).map(PropertyValue::F64),
        PropertyType::Object => None,
    };

    converted.ok_or_else(fail)
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_enum(members: &'static [&'static str], value: &Value) -> Option<PropertyValue> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Int(i) => i.to_string(),
        Value::Bool(_) | Value::Float(_) => return None,
    };

    let index = match text.parse::<usize>() {
        Ok(ordinal) if ordinal < members.len() => ordinal,
        Ok(_) => return None,
        Err(_) => members
            .iter()
            .position(|member| member.eq_ignore_ascii_case(&text))?,
    };

    Some(PropertyValue::Enum {
        index,
        name: members[index],
    })
}

fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(i) => Some(*i != 0),
        Value::Float(f) => Some(*f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
    }
}

fn to_char(value: &Value) -> Option<char> {
    match value {
        Value::String(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
        Value::Int(i) => u32::try_from(*i).ok().and_then(char::from_u32),
        Value::Bool(_) | Value::Float(_) => None,
    }
}

fn to_integer<T>(value: &Value) -> Option<T>
where
    T: TryFrom<i128> + FromStr,
{
    match value {
        Value::Int(i) => T::try_from(i128::from(*i)).ok(),
        Value::Float(f) => {
            let rounded = f.round_ties_even();
            // i128 covers every target range, so out-of-range floats fail in try_from
            #[allow(clippy::cast_possible_truncation)]
            let whole = rounded as i128;
            if rounded.is_finite() {
                T::try_from(whole).ok()
            } else {
                None
            }
        }
        Value::Bool(b) => T::try_from(i128::from(*b)).ok(),
        Value::String(s) => s.trim().parse::<T>().ok(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
    }
}
