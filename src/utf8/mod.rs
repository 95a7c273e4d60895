// Copyright 2025 Gabriel Bjørnager Jensen.

//! UTF-8 primitives.
//!
//! These are stateless functions over raw octets.
//! Every decoding function is strict: invalid prefixes, truncated sequences, malformed continuation octets, overlong forms, surrogates, and values past `U+10FFFF` are all rejected.


use crate::error::{EncodingError, Error, RangeError};

/// The smallest code point that may be encoded by a sequence of the given length.
const MIN_CODE_POINT: [u32; 0x5] = [0x0, 0x0, 0x80, 0x800, 0x10000];

/// Gets the length of the sequence introduced by `prefix`.
///
/// Valid prefixes are of the forms `0xxxxxxx`, `110xxxxx`, `1110xxxx`, and `11110xxx`, which introduce sequences of one through four octets.
/// Continuation octets (`10xxxxxx`) as well as the obsolete five- and six-octet prefixes yield [`None`].
#[inline]
#[must_use]
pub const fn sequence_length(prefix: u8) -> Option<usize> {
	match prefix.leading_ones() {
		0x0 => Some(0x1),

		len @ 0x2..=0x4 => Some(len as usize),

		_ => None,
	}
}

/// Decodes the code point starting at octet offset `index`.
///
/// On success, the decoded character is returned alongside the amount of octets it occupies.
///
/// # Errors
///
/// If the sequence at `index` is malformed in any way, an error is returned.
/// The error points at the prefix octet unless a specific continuation octet is at fault.
///
/// # Panics
///
/// If `index` is not less than the length of `buf`, this function will panic.
#[track_caller]
pub fn decode(buf: &[u8], index: usize) -> Result<(char, usize), EncodingError> {
	assert!(index < buf.len(), "cannot decode past end of buffer");

	let prefix = buf[index];

	let bad_prefix = EncodingError {
		value: u32::from(prefix),
		index,
	};

	let Some(len) = sequence_length(prefix) else {
		return Err(bad_prefix);
	};

	// NOTE: A missing tail means that the sequence
	// was cut short by the end of the buffer.
	let Some(tail) = buf.get(index + 0x1..index + len) else {
		return Err(bad_prefix);
	};

	let mut c = match len {
		0x1 => return Ok((char::from(prefix), 0x1)),
		0x2 => u32::from(prefix & 0b00011111),
		0x3 => u32::from(prefix & 0b00001111),
		_   => u32::from(prefix & 0b00000111),
	};

	for (i, &octet) in tail.iter().enumerate() {
		if octet & 0b11000000 != 0b10000000 {
			return Err(EncodingError {
				value: u32::from(octet),
				index: index + 0x1 + i,
			});
		}

		c = (c << 0x6) | u32::from(octet & 0b00111111);
	}

	if c < MIN_CODE_POINT[len] {
		return Err(bad_prefix);
	}

	// This rejects surrogates and anything past the
	// Unicode range.
	let Some(c) = char::from_u32(c) else {
		return Err(EncodingError { value: c, index });
	};

	Ok((c, len))
}

/// Checks that the entirety of `buf` is well-formed UTF-8.
///
/// # Errors
///
/// The first malformed sequence is reported as per [`decode`].
#[inline]
pub fn validate(buf: &[u8]) -> Result<(), EncodingError> {
	let mut offset = 0x0;

	while offset < buf.len() {
		let (_, len) = decode(buf, offset)?;
		offset += len;
	}

	Ok(())
}

/// Counts the code points in `buf`.
///
/// # Errors
///
/// If `buf` is not well-formed UTF-8, an error is returned.
#[inline]
pub fn count(buf: &[u8]) -> Result<usize, EncodingError> {
	let mut offset = 0x0;
	let mut count  = 0x0;

	while offset < buf.len() {
		let (_, len) = decode(buf, offset)?;

		offset += len;
		count  += 0x1;
	}

	Ok(count)
}

/// Translates a code point index into an octet offset.
///
/// The scan always starts at the beginning of `buf`.
/// An index equal to the code point count is permitted and translates to the length of `buf`.
///
/// # Errors
///
/// If `buf` runs out before `index` code points have been passed, then an [`OutOfRange`](Error::OutOfRange) error is returned.
/// Malformed sequences passed along the way yield an [`InvalidEncoding`](Error::InvalidEncoding) error.
pub fn offset_of(buf: &[u8], index: usize) -> Result<usize, Error> {
	let mut offset  = 0x0;
	let mut current = 0x0;

	while current < index {
		if offset >= buf.len() {
			return Err(RangeError { index, len: current }.into());
		}

		let (_, len) = decode(buf, offset)?;

		offset  += len;
		current += 0x1;
	}

	Ok(offset)
}

/// Gets the offset of the code point that ends at `offset`.
///
/// Continuation octets are skipped backwards until a prefix is found.
/// The offset `0x0` is always considered a boundary.
#[inline]
#[must_use]
#[track_caller]
pub(crate) fn prev_boundary(buf: &[u8], offset: usize) -> usize {
	debug_assert!(offset <= buf.len(), "cannot find boundary past buffer");

	let mut i = offset.saturating_sub(0x1);

	while i > 0x0 {
		let octet = buf[i];

		if octet & 0b11000000 != 0b10000000 {
			break;
		}

		i -= 0x1;
	}

	i
}
