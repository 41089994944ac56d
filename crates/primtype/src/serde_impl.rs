//! `serde` support: a primitive type is (de)serialized as its canonical name.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::PrimitiveType;
use crate::names::{lowercase_name, string_to_primitive_type};

impl Serialize for PrimitiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(lowercase_name(*self))
    }
}

struct NameVisitor;

impl Visitor<'_> for NameVisitor {
    type Value = PrimitiveType;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a lowercase primitive type name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        string_to_primitive_type(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for PrimitiveType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NameVisitor)
    }
}
