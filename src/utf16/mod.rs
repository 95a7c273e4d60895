// Copyright 2025 Gabriel Bjørnager Jensen.

//! UTF-16 bridging.
//!
//! Code points past the Basic Multilingual Plane are represented as surrogate pairs.

mod test;

use crate::error::EncodingError;
use crate::utf8;

use alloc::vec::Vec;

const SURROGATE_HIGH_START: u16 = 0xD800;
const SURROGATE_HIGH_END:   u16 = 0xDBFF;
const SURROGATE_LOW_START:  u16 = 0xDC00;
const SURROGATE_LOW_END:    u16 = 0xDFFF;

/// Transcodes UTF-8 octets into UTF-16 code units.
///
/// # Errors
///
/// If `buf` is not well-formed UTF-8, the offending sequence is reported as per [`utf8::decode`].
pub fn from_utf8(buf: &[u8]) -> Result<Vec<u16>, EncodingError> {
	let mut units = Vec::with_capacity(buf.len());
	let mut offset = 0x0;

	while offset < buf.len() {
		let (c, len) = utf8::decode(buf, offset)?;

		let c = u32::from(c);

		if c < 0x10000 {
			units.push(c as u16);
		} else {
			let c = c - 0x10000;

			units.push(SURROGATE_HIGH_START + (c >> 0xA) as u16);
			units.push(SURROGATE_LOW_START + (c & 0x3FF) as u16);
		}

		offset += len;
	}

	Ok(units)
}

/// Transcodes UTF-16 code units into UTF-8 octets.
///
/// # Errors
///
/// A high surrogate that is not directly followed by a low surrogate, as well as any lone low surrogate, yields an error.
/// The error's index is that of the offending code unit.
pub fn to_utf8(units: &[u16]) -> Result<Vec<u8>, EncodingError> {
	let mut buf = Vec::with_capacity(units.len());

	let mut iter = units.iter().copied().enumerate();

	while let Some((i, unit)) = iter.next() {
		let lone = EncodingError {
			value: u32::from(unit),
			index: i,
		};

		let c = match unit {
			SURROGATE_HIGH_START..=SURROGATE_HIGH_END => {
				let Some((_, low @ SURROGATE_LOW_START..=SURROGATE_LOW_END)) = iter.next() else {
					return Err(lone);
				};

				let high = u32::from(unit - SURROGATE_HIGH_START);
				let low  = u32::from(low  - SURROGATE_LOW_START);

				0x10000 + (high << 0xA) + low
			}

			SURROGATE_LOW_START..=SURROGATE_LOW_END => return Err(lone),

			_ => u32::from(unit),
		};

		let Some(c) = char::from_u32(c) else {
			return Err(lone);
		};

		let mut seq = [0x00; 0x4];
		buf.extend_from_slice(c.encode_utf8(&mut seq).as_bytes());
	}

	Ok(buf)
}
