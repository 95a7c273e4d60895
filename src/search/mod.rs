// Copyright 2025 Gabriel Bjørnager Jensen.

//! Searching by code point.
//!
//! Every search takes a code point index to start from and yields a code point index.
//! A search that runs out of string without a match yields [`None`]; errors are reserved for bad start positions and malformed data.


use crate::String;
use crate::error::{Error, RangeError};
use crate::utf8;

use alloc::vec::Vec;

impl String {
	/// Finds the first occurrence of `needle` at or after `start`.
	///
	/// Matches are only considered at code point boundaries.
	/// An empty needle matches at `start` itself, unless `start` is at the very end of the string.
	///
	/// # Errors
	///
	/// If `start` exceeds the code point count, an [`OutOfRange`](Error::OutOfRange) error is returned.
	/// If either the string or `needle` is malformed, an [`InvalidEncoding`](Error::InvalidEncoding) error is returned.
	pub fn find<S: AsRef<[u8]> + ?Sized>(&self, needle: &S, start: usize) -> Result<Option<usize>, Error> {
		let needle = needle.as_ref();
		utf8::validate(needle)?;

		let buf = self.as_bytes();

		let mut offset = utf8::offset_of(buf, start)?;
		let mut index  = start;

		while offset < buf.len() {
			match buf.get(offset..offset + needle.len()) {
				Some(window) if window == needle => return Ok(Some(index)),

				Some(_) => { }

				// The needle no longer fits.
				None => break,
			}

			let (_, len) = utf8::decode(buf, offset)?;

			offset += len;
			index  += 0x1;
		}

		Ok(None)
	}

	/// Finds the first code point at or after `start` that is contained in `set`.
	///
	/// The set is decomposed into its individual code points; their order is irrelevant.
	///
	/// # Errors
	///
	/// See [`find`](Self::find).
	#[inline]
	pub fn find_first_of<S: AsRef<[u8]> + ?Sized>(&self, set: &S, start: usize) -> Result<Option<usize>, Error> {
		let set = code_point_set(set.as_ref())?;
		self.scan_forward(start, |c| set.contains(&c))
	}

	/// Finds the first code point at or after `start` that is *not* contained in `set`.
	///
	/// # Errors
	///
	/// See [`find`](Self::find).
	#[inline]
	pub fn find_first_not_of<S: AsRef<[u8]> + ?Sized>(&self, set: &S, start: usize) -> Result<Option<usize>, Error> {
		let set = code_point_set(set.as_ref())?;
		self.scan_forward(start, |c| !set.contains(&c))
	}

	/// Finds the last code point at or before `start` that is contained in `set`.
	///
	/// If `start` is [`None`] or equal to the code point count, the entire string is searched.
	///
	/// # Errors
	///
	/// See [`find`](Self::find).
	#[inline]
	pub fn find_last_of<S: AsRef<[u8]> + ?Sized>(&self, set: &S, start: Option<usize>) -> Result<Option<usize>, Error> {
		let set = code_point_set(set.as_ref())?;
		self.scan_backward(start, |c| set.contains(&c))
	}

	/// Finds the last code point at or before `start` that is *not* contained in `set`.
	///
	/// # Errors
	///
	/// See [`find_last_of`](Self::find_last_of).
	#[inline]
	pub fn find_last_not_of<S: AsRef<[u8]> + ?Sized>(&self, set: &S, start: Option<usize>) -> Result<Option<usize>, Error> {
		let set = code_point_set(set.as_ref())?;
		self.scan_backward(start, |c| !set.contains(&c))
	}

	fn scan_forward<F: FnMut(char) -> bool>(&self, start: usize, mut f: F) -> Result<Option<usize>, Error> {
		let buf = self.as_bytes();

		let mut offset = utf8::offset_of(buf, start)?;
		let mut index  = start;

		while offset < buf.len() {
			let (c, len) = utf8::decode(buf, offset)?;

			if f(c) {
				return Ok(Some(index));
			}

			offset += len;
			index  += 0x1;
		}

		Ok(None)
	}

	fn scan_backward<F: FnMut(char) -> bool>(&self, start: Option<usize>, mut f: F) -> Result<Option<usize>, Error> {
		let buf = self.as_bytes();

		// NOTE: This also validates the entire string,
		// which lets us walk backwards over continuation
		// octets below.
		let count = utf8::count(buf)?;

		// Index one past the first candidate.
		let mut index = match start {
			Some(start) if start > count => {
				return Err(RangeError { index: start, len: count }.into());
			}

			Some(start) if start < count => start + 0x1,

			_ => count,
		};

		let mut offset = utf8::offset_of(buf, index)?;

		while index > 0x0 {
			offset  = utf8::prev_boundary(buf, offset);
			index  -= 0x1;

			let (c, _) = utf8::decode(buf, offset)?;

			if f(c) {
				return Ok(Some(index));
			}
		}

		Ok(None)
	}
}

fn code_point_set(set: &[u8]) -> Result<Vec<char>, Error> {
	let mut chars  = Vec::new();
	let mut offset = 0x0;

	while offset < set.len() {
		let (c, len) = utf8::decode(set, offset)?;

		chars.push(c);
		offset += len;
	}

	Ok(chars)
}
