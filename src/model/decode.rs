/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Type-directed decoding of untyped JSON into declared records
//!
//! Every target type implements [`Decode`], which knows the [`Shape`] it
//! expects and how to build itself from a [`serde_json::Value`]. Records are
//! declared with the [`record!`](crate::record) macro: the field list written
//! there drives decoding and is also exposed as a table through
//! [`Record::fields`].
//!
//! Decoding never mutates its input. Every failure carries the [`FieldPath`]
//! of the offending value, e.g. `payload.orders[3].user.status`.

use crate::error::{DecodeError, DecodeErrorKind};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// One step inside a JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

/// Location of a value inside a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The document root
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of `key` below this one
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Path of element `index` below this one
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// Segments from the root down
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// True for the document root
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Declared shape of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// JSON string
    String,
    /// Whole number
    Integer,
    /// Any JSON number
    Float,
    /// JSON boolean
    Boolean,
    /// RFC 3339 string or Unix seconds
    Timestamp,
    /// Member of the named enumeration
    Enum(&'static str),
    /// Nested record of the named type
    Record(&'static str),
    /// Any JSON object, used for envelope sub-trees
    Object,
    /// May be absent or null
    Optional(Box<Shape>),
    /// Ordered list of the inner shape
    Sequence(Box<Shape>),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::String => write!(f, "string"),
            Shape::Integer => write!(f, "integer"),
            Shape::Float => write!(f, "float"),
            Shape::Boolean => write!(f, "boolean"),
            Shape::Timestamp => write!(f, "timestamp"),
            Shape::Enum(name) => write!(f, "enum {name}"),
            Shape::Record(name) => write!(f, "record {name}"),
            Shape::Object => write!(f, "object"),
            Shape::Optional(inner) => write!(f, "optional {inner}"),
            Shape::Sequence(inner) => write!(f, "sequence of {inner}"),
        }
    }
}

/// Kind of a JSON value, as reported in type mismatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Any number
    Number,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

impl JsonKind {
    /// Kind of `value`
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        write!(f, "{name}")
    }
}

/// A type that can be built from an untyped JSON value
pub trait Decode: Sized {
    /// Shape this type expects
    fn shape() -> Shape;

    /// Decodes `value`, found at `path`
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError>;

    /// Called when the key for this field is absent
    ///
    /// Required types fail; [`Option`] binds `None`.
    fn decode_missing(path: &FieldPath) -> Result<Self, DecodeError> {
        Err(DecodeError::missing(path, Self::shape()))
    }
}

/// One entry of a record's field table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key the field is read from
    pub name: &'static str,
    /// Declared shape
    pub shape: Shape,
}

/// A record declared with [`record!`](crate::record)
pub trait Record: Decode {
    /// Type name
    const NAME: &'static str;

    /// Declared fields, in declaration order
    fn fields() -> Vec<FieldSpec>;
}

/// Decodes `value` as `T`, starting at the document root
pub fn decode<T: Decode>(value: &Value) -> Result<T, DecodeError> {
    T::decode(value, &FieldPath::root())
}

/// Keyed access to a JSON object while decoding it
///
/// Used by the code generated by [`record!`](crate::record) and by the
/// response composer to walk envelopes.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Fields<'a> {
    /// Views `value` as an object, or fails with a mismatch against `expected`
    pub fn new(value: &'a Value, path: &FieldPath, expected: Shape) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                path: path.clone(),
            }),
            other => Err(DecodeError::mismatch(path, expected, JsonKind::of(other))),
        }
    }

    /// Path of this object
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Decodes the field `key` as `T`
    pub fn get<T: Decode>(&self, key: &str) -> Result<T, DecodeError> {
        let path = self.path.key(key);
        match self.map.get(key) {
            Some(value) => T::decode(value, &path),
            None => T::decode_missing(&path),
        }
    }

    /// Required raw value `key`, left undecoded
    pub fn value(&self, key: &str, expected: Shape) -> Result<&'a Value, DecodeError> {
        self.map
            .get(key)
            .ok_or_else(|| DecodeError::missing(&self.path.key(key), expected))
    }

    /// Required nested object `key`
    pub fn object(&self, key: &str) -> Result<Fields<'a>, DecodeError> {
        let path = self.path.key(key);
        match self.map.get(key) {
            Some(value) => Fields::new(value, &path, Shape::Object),
            None => Err(DecodeError::missing(&path, Shape::Object)),
        }
    }

    /// Required array `key`, left undecoded
    pub fn array(&self, key: &str) -> Result<&'a [Value], DecodeError> {
        let path = self.path.key(key);
        let expected = Shape::Sequence(Box::new(Shape::Object));
        match self.map.get(key) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(DecodeError::mismatch(&path, expected, JsonKind::of(other))),
            None => Err(DecodeError::missing(&path, expected)),
        }
    }
}

impl Decode for String {
    fn shape() -> Shape {
        Shape::String
    }

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeError::mismatch(path, Shape::String, JsonKind::of(other))),
        }
    }
}

impl Decode for bool {
    fn shape() -> Shape {
        Shape::Boolean
    }

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(DecodeError::mismatch(path, Shape::Boolean, JsonKind::of(other))),
        }
    }
}

impl Decode for f64 {
    fn shape() -> Shape {
        Shape::Float
    }

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| DecodeError::mismatch(path, Shape::Float, JsonKind::Number)),
            other => Err(DecodeError::mismatch(path, Shape::Float, JsonKind::of(other))),
        }
    }
}

macro_rules! impl_decode_for_integer {
    ($($ty:ty),+) => {$(
        impl Decode for $ty {
            fn shape() -> Shape {
                Shape::Integer
            }

            fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
                let number = match value {
                    Value::Number(n) => n,
                    other => {
                        return Err(DecodeError::mismatch(path, Shape::Integer, JsonKind::of(other)));
                    }
                };
                // Fractional and out-of-range numbers are mismatches, never truncated.
                number
                    .as_i64()
                    .and_then(|v| <$ty>::try_from(v).ok())
                    .or_else(|| number.as_u64().and_then(|v| <$ty>::try_from(v).ok()))
                    .ok_or_else(|| DecodeError::mismatch(path, Shape::Integer, JsonKind::Number))
            }
        }
    )+};
}

impl_decode_for_integer!(i32, i64, u32, u64);

impl Decode for DateTime<Utc> {
    fn shape() -> Shape {
        Shape::Timestamp
    }

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let invalid = |raw: String| {
            DecodeError::new(path.clone(), DecodeErrorKind::InvalidTimestamp { value: raw })
        };
        match value {
            Value::String(raw) => parse_timestamp(raw).ok_or_else(|| invalid(raw.clone())),
            Value::Number(n) => {
                let parsed = match n.as_i64() {
                    Some(secs) => DateTime::from_timestamp(secs, 0),
                    None => n.as_f64().and_then(from_fractional_secs),
                };
                parsed.ok_or_else(|| invalid(n.to_string()))
            }
            other => Err(DecodeError::mismatch(path, Shape::Timestamp, JsonKind::of(other))),
        }
    }
}

/// Unix seconds with a fractional part, rounded to the nearest nanosecond
///
/// The fraction is taken above the floor, so it is never negative, and a
/// fraction rounding up to a whole second carries into the seconds.
fn from_fractional_secs(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let floor = secs.floor();
    if floor < i64::MIN as f64 || floor >= i64::MAX as f64 {
        return None;
    }
    let mut whole = floor as i64;
    let mut nanos = ((secs - floor) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        whole = whole.checked_add(1)?;
        nanos = 0;
    }
    DateTime::from_timestamp(whole, nanos)
}

/// Parses an RFC 3339 timestamp; offset-less values are taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl<T: Decode> Decode for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        if value.is_null() {
            return Ok(None);
        }
        T::decode(value, path).map(Some)
    }

    fn decode_missing(_path: &FieldPath) -> Result<Self, DecodeError> {
        Ok(None)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn shape() -> Shape {
        Shape::Sequence(Box::new(T::shape()))
    }

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::decode(item, &path.index(i)))
                .collect(),
            other => Err(DecodeError::mismatch(path, Self::shape(), JsonKind::of(other))),
        }
    }
}

/// Decodes a string into a serde-backed enumeration
///
/// Unknown strings fail with [`DecodeErrorKind::UnknownVariant`]; there is no
/// fallback member.
pub fn decode_enum<T: DeserializeOwned>(
    value: &Value,
    path: &FieldPath,
    enumeration: &'static str,
) -> Result<T, DecodeError> {
    match value {
        Value::String(raw) => serde_json::from_value(value.clone()).map_err(|_| {
            DecodeError::new(
                path.clone(),
                DecodeErrorKind::UnknownVariant {
                    enumeration,
                    value: raw.clone(),
                },
            )
        }),
        other => Err(DecodeError::mismatch(
            path,
            Shape::Enum(enumeration),
            JsonKind::of(other),
        )),
    }
}

/// Implements [`Decode`] for enumerations that derive `Deserialize`
#[macro_export]
macro_rules! impl_decode_for_enum {
    ($($ty:ident),+ $(,)?) => {$(
        impl $crate::model::decode::Decode for $ty {
            fn shape() -> $crate::model::decode::Shape {
                $crate::model::decode::Shape::Enum(stringify!($ty))
            }

            fn decode(
                value: &::serde_json::Value,
                path: &$crate::model::decode::FieldPath,
            ) -> ::std::result::Result<Self, $crate::error::DecodeError> {
                $crate::model::decode::decode_enum(value, path, stringify!($ty))
            }
        }
    )+};
}

/// Declares a record: the struct, its [`Decode`] impl and its field table
///
/// Each field is read from the JSON key of the same name.
///
/// ```ignore
/// wm_client::record! {
///     #[derive(Debug, Clone, PartialEq, serde::Serialize)]
///     pub struct DropSource {
///         pub name: String,
///         pub link: Option<String>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::model::decode::Decode for $name {
            fn shape() -> $crate::model::decode::Shape {
                $crate::model::decode::Shape::Record(stringify!($name))
            }

            fn decode(
                value: &::serde_json::Value,
                path: &$crate::model::decode::FieldPath,
            ) -> ::std::result::Result<Self, $crate::error::DecodeError> {
                let fields = $crate::model::decode::Fields::new(
                    value,
                    path,
                    <Self as $crate::model::decode::Decode>::shape(),
                )?;
                Ok(Self {
                    $( $field: fields.get::<$ty>(stringify!($field))?, )*
                })
            }
        }

        impl $crate::model::decode::Record for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> ::std::vec::Vec<$crate::model::decode::FieldSpec> {
                vec![
                    $(
                        $crate::model::decode::FieldSpec {
                            name: stringify!($field),
                            shape: <$ty as $crate::model::decode::Decode>::shape(),
                        },
                    )*
                ]
            }
        }
    };
}
