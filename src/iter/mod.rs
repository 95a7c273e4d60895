// Copyright 2025 Gabriel Bjørnager Jensen.

//! Iterator types.

mod test;

use crate::String;
use crate::utf8;

use alloc::sync::Arc;
use core::iter::FusedIterator;

/// Iterator over the code points of a string.
///
/// Each item is a new string holding exactly one code point.
///
/// The iterator holds its own, immutable snapshot of the octets it was created from.
/// Changes to (or reallocations of) the source string thus cannot affect an iterator in flight.
///
/// See [`String::codepoints`] and [`String::into_codepoints`].
#[derive(Clone, Debug)]
#[must_use]
pub struct Codepoints {
	buf:    Arc<[u8]>,
	offset: usize,
}

impl Codepoints {
	/// Constructs a new iterator over the provided octets.
	///
	/// The octets must already have been validated.
	#[inline(always)]
	pub(crate) fn new(buf: Arc<[u8]>) -> Self {
		debug_assert!(utf8::validate(&buf).is_ok());

		Self { buf, offset: 0x0 }
	}

	/// Rewinds the iterator to the first code point.
	#[inline(always)]
	pub fn restart(&mut self) {
		self.offset = 0x0;
	}

	/// Returns the octet offset of the next code point.
	#[inline(always)]
	#[must_use]
	pub fn offset(&self) -> usize {
		self.offset
	}
}

impl Iterator for Codepoints {
	type Item = String;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		let prefix = *self.buf.get(self.offset)?;

		// NOTE: The octets have already been validated,
		// so only the prefix needs to be looked at.
		let len   = utf8::sequence_length(prefix)?;
		let start = self.offset;
		let end   = start + len;

		let c = self.buf.get(start..end)?.to_vec();

		self.offset = end;

		Some(String::from_utf8_unvalidated(c))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let rem = self.buf.len() - self.offset;

		(rem.div_ceil(0x4), Some(rem))
	}
}

impl FusedIterator for Codepoints { }
