// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(feature = "serde")]

use crate::String;

use alloc::vec::Vec;
use core::fmt::{self, Formatter};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};

#[derive(Debug, Default)]
struct StringVisitor;

impl Visitor<'_> for StringVisitor {
	type Value = String;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		write!(formatter, "a utf-8 string")
	}

	#[inline]
	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		Ok(v.into())
	}

	#[inline]
	fn visit_string<E: de::Error>(self, v: alloc::string::String) -> Result<Self::Value, E> {
		Ok(v.into())
	}

	#[inline]
	fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
		String::from_utf8(v.to_vec()).map_err(E::custom)
	}

	#[inline]
	fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
		String::from_utf8(v).map_err(E::custom)
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for String {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_string(StringVisitor)
	}
}

/// Serialises as a string.
///
/// Strings containing malformed UTF-8 cannot be serialised.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for String {
	#[inline]
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let s = self.to_str().map_err(<S::Error as ser::Error>::custom)?;
		serializer.serialize_str(s)
	}
}
