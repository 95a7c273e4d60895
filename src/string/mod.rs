// Copyright 2025 Gabriel Bjørnager Jensen.


mod oct;
mod serde;

use crate::error::{EncodingError, Error, RangeError};
use crate::iter::Codepoints;
use crate::{utf16, utf8};

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::convert::Infallible;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign};
use core::str::{self, FromStr};

/// Growable UTF-8 string addressed by code point.
///
/// The string owns a contiguous buffer of UTF-8 octets.
/// Every position accepted or returned by its methods is a *code point index*, i.e. `0x2` always denotes the third character regardless of how many octets the first two occupy.
///
/// The code point count is never cached.
/// Methods that translate indices into offsets therefore scan the buffer from its start, making them linear in the length of the string.
///
/// # Validation
///
/// Strings built through [`from_utf8`](Self::from_utf8), [`from_utf16`](Self::from_utf16), [`from_ascii`](Self::from_ascii), or from a [`str`](prim@str) are known to be well-formed.
/// Strings built through [`from_utf8_unvalidated`](Self::from_utf8_unvalidated) are not, and any method that has to decode them reports malformed data as [`InvalidEncoding`](Error::InvalidEncoding).
///
/// # Examples
///
/// ```rust
/// use codestr::String;
///
/// let mut s = String::from("\u{304B}\u{304D}\u{304F}\u{3051}\u{3053}");
///
/// s.replace(0x1, 0x2, "\u{3042}").unwrap();
///
/// assert_eq!(s, "\u{304B}\u{3042}\u{3051}\u{3053}");
/// assert_eq!(s.substring(0x2, 0x2).unwrap(), "\u{3051}\u{3053}");
/// ```
#[derive(Clone, Default)]
pub struct String {
	buf: Vec<u8>,
}

impl String {
	/// Constructs a new, empty string.
	#[inline]
	#[must_use]
	pub const fn new() -> Self {
		Self { buf: Vec::new() }
	}

	/// Constructs a new, empty string with room for at least `capacity` octets.
	#[inline]
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self { buf: Vec::with_capacity(capacity) }
	}

	/// Constructs a new string from UTF-8 octets.
	///
	/// The passed vector is checked for its validity.
	/// For a similar function *without* these checks, see [`from_utf8_unvalidated`](Self::from_utf8_unvalidated).
	///
	/// # Errors
	///
	/// If the octets are not well-formed UTF-8, then the first malformed sequence is reported.
	#[inline]
	pub fn from_utf8(buf: Vec<u8>) -> Result<Self, Error> {
		utf8::validate(&buf)?;

		Ok(Self { buf })
	}

	/// Constructs a new string from UTF-8 octets without checking them.
	///
	/// This is always sound.
	/// Malformed data is instead caught by whichever method first decodes it.
	#[inline(always)]
	#[must_use]
	pub const fn from_utf8_unvalidated(buf: Vec<u8>) -> Self {
		Self { buf }
	}

	/// Constructs a new string from ASCII octets.
	///
	/// # Errors
	///
	/// If any octet is outside the ASCII range, an error pointing at that octet is returned.
	#[inline]
	pub fn from_ascii(data: &[u8]) -> Result<Self, Error> {
		check_ascii(data)?;

		Ok(Self { buf: data.to_vec() })
	}

	/// Constructs a new string from UTF-16 code units.
	///
	/// Surrogate pairs are combined into single code points.
	///
	/// # Errors
	///
	/// If `units` contains an unpaired surrogate, an error pointing at that code unit is returned.
	#[inline]
	pub fn from_utf16(units: &[u16]) -> Result<Self, Error> {
		let buf = utf16::to_utf8(units)?;
		Ok(Self { buf })
	}

	/// Counts the code points in the string.
	///
	/// This scans the entire string.
	///
	/// # Errors
	///
	/// If the string contains malformed UTF-8, an error is returned.
	#[inline]
	pub fn codepoint_count(&self) -> Result<usize, Error> {
		let count = utf8::count(&self.buf)?;
		Ok(count)
	}

	/// Returns the length of the string in octets.
	///
	/// This is never less than the code point count.
	#[inline(always)]
	#[must_use]
	pub fn byte_size(&self) -> usize {
		self.buf.len()
	}

	/// Checks if the string is empty.
	#[inline(always)]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Checks if the entire string is also valid in ASCII.
	///
	/// If so, the octet count and the code point count are equal.
	#[inline]
	#[must_use]
	pub fn is_ascii(&self) -> bool {
		self.buf.is_ascii()
	}

	/// Gets the narrow (ASCII) representation of the string.
	///
	/// The octets are returned verbatim on the assumption that the string is ASCII.
	/// Callers should check [`is_ascii`](Self::is_ascii) first or use [`try_to_narrow`](Self::try_to_narrow) instead.
	#[inline(always)]
	#[must_use]
	pub fn to_narrow(&self) -> &[u8] {
		&self.buf
	}

	/// Gets the narrow (ASCII) representation of the string.
	///
	/// # Errors
	///
	/// If the string contains any non-ASCII octet, an error pointing at that octet is returned.
	#[inline]
	pub fn try_to_narrow(&self) -> Result<&str, Error> {
		check_ascii(&self.buf)?;

		// SAFETY: ASCII is a subset of UTF-8.
		let s = unsafe { str::from_utf8_unchecked(&self.buf) };
		Ok(s)
	}

	/// Transcodes the string into UTF-16 code units.
	///
	/// # Errors
	///
	/// If the string contains malformed UTF-8, an error is returned.
	#[inline]
	pub fn to_utf16(&self) -> Result<Vec<u16>, Error> {
		let units = utf16::from_utf8(&self.buf)?;
		Ok(units)
	}

	/// Borrows the string as a string slice.
	///
	/// # Errors
	///
	/// If the string contains malformed UTF-8, an error is returned.
	#[inline]
	pub fn to_str(&self) -> Result<&str, Error> {
		utf8::validate(&self.buf)?;

		// SAFETY: We have just validated the octets, us-
		// ing the same rules as the standard library.
		let s = unsafe { str::from_utf8_unchecked(&self.buf) };
		Ok(s)
	}

	/// Converts the string into the standard library's string type.
	///
	/// # Errors
	///
	/// If the string contains malformed UTF-8, an error is returned.
	#[inline]
	pub fn into_std_string(self) -> Result<alloc::string::String, Error> {
		utf8::validate(&self.buf)?;

		// SAFETY: See `to_str`.
		let s = unsafe { alloc::string::String::from_utf8_unchecked(self.buf) };
		Ok(s)
	}

	/// Gets the code point at `index` as a new string.
	///
	/// The returned string owns a copy of the code point's octets.
	///
	/// # Errors
	///
	/// If `index` is not less than the code point count, an [`OutOfRange`](Error::OutOfRange) error is returned.
	pub fn at(&self, index: usize) -> Result<Self, Error> {
		let offset = utf8::offset_of(&self.buf, index)?;

		if offset == self.buf.len() {
			return Err(RangeError { index, len: index }.into());
		}

		let (_, len) = utf8::decode(&self.buf, offset)?;

		let buf = self.buf[offset..offset + len].to_vec();
		Ok(Self { buf })
	}

	/// Copies `len` code points starting at `start` into a new string.
	///
	/// See also [`substring_from`](Self::substring_from).
	///
	/// # Errors
	///
	/// If `start + len` exceeds the code point count, an [`OutOfRange`](Error::OutOfRange) error is returned.
	pub fn substring(&self, start: usize, len: usize) -> Result<Self, Error> {
		let (from, to) = self.octet_range(start, len)?;

		let buf = self.buf[from..to].to_vec();
		Ok(Self { buf })
	}

	/// Copies every code point from `start` onwards into a new string.
	///
	/// # Errors
	///
	/// If `start` exceeds the code point count, an [`OutOfRange`](Error::OutOfRange) error is returned.
	pub fn substring_from(&self, start: usize) -> Result<Self, Error> {
		let from = utf8::offset_of(&self.buf, start)?;

		// Validate the remainder so that the copy does
		// not carry malformed octets along.
		utf8::validate(&self.buf[from..])
			.map_err(|e| EncodingError { index: e.index + from, ..e })?;

		let buf = self.buf[from..].to_vec();
		Ok(Self { buf })
	}

	/// Replaces `count` code points starting at `start` with `replacement`.
	///
	/// The operation is atomic: if an error is returned, the string is left untouched.
	///
	/// # Errors
	///
	/// If `start + count` exceeds the code point count, an [`OutOfRange`](Error::OutOfRange) error is returned.
	/// If `replacement` is not well-formed UTF-8, an [`InvalidEncoding`](Error::InvalidEncoding) error is returned.
	pub fn replace<S: AsRef<[u8]> + ?Sized>(&mut self, start: usize, count: usize, replacement: &S) -> Result<(), Error> {
		let replacement = replacement.as_ref();
		utf8::validate(replacement)?;

		let (from, to) = self.octet_range(start, count)?;

		self.buf.splice(from..to, replacement.iter().copied());

		Ok(())
	}

	/// Appends a character to the string.
	#[inline]
	pub fn push(&mut self, c: char) {
		let mut buf = [0x00; 0x4];
		let s = c.encode_utf8(&mut buf);

		self.push_str(s);
	}

	/// Appends a string slice to the string.
	#[inline(always)]
	pub fn push_str(&mut self, s: &str) {
		self.buf.extend_from_slice(s.as_bytes());
	}

	/// Appends ASCII octets to the string.
	///
	/// # Errors
	///
	/// If any octet is outside the ASCII range, an error is returned and the string is left untouched.
	#[inline]
	pub fn push_ascii(&mut self, data: &[u8]) -> Result<(), Error> {
		check_ascii(data)?;

		self.buf.extend_from_slice(data);
		Ok(())
	}

	/// Appends UTF-16 code units to the string.
	///
	/// # Errors
	///
	/// If `units` contains an unpaired surrogate, an error is returned and the string is left untouched.
	#[inline]
	pub fn push_utf16(&mut self, units: &[u16]) -> Result<(), Error> {
		let data = utf16::to_utf8(units)?;

		self.buf.extend_from_slice(&data);
		Ok(())
	}

	/// Completely clears the string.
	#[inline(always)]
	pub fn clear(&mut self) {
		self.buf.clear();
	}

	/// Borrows the string's octets.
	#[inline(always)]
	#[must_use]
	pub fn as_bytes(&self) -> &[u8] {
		&self.buf
	}

	/// Destructs the string into its octets.
	#[inline(always)]
	#[must_use]
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	/// Iterates over the string's code points.
	///
	/// The string is validated once up front.
	/// The returned iterator holds its own snapshot of the octets and is thus unaffected by later changes to `self`.
	///
	/// # Errors
	///
	/// If the string contains malformed UTF-8, an error is returned.
	#[inline]
	pub fn codepoints(&self) -> Result<Codepoints, Error> {
		utf8::validate(&self.buf)?;

		let buf = Arc::from(self.buf.as_slice());
		Ok(Codepoints::new(buf))
	}

	/// Converts the string into an iterator over its code points.
	///
	/// See [`codepoints`](Self::codepoints).
	///
	/// # Errors
	///
	/// If the string contains malformed UTF-8, an error is returned.
	#[inline]
	pub fn into_codepoints(self) -> Result<Codepoints, Error> {
		utf8::validate(&self.buf)?;

		let buf = Arc::from(self.buf);
		Ok(Codepoints::new(buf))
	}

	/// Translates a code point range into an octet range.
	fn octet_range(&self, start: usize, len: usize) -> Result<(usize, usize), Error> {
		let Some(end) = start.checked_add(len) else {
			let len = self.codepoint_count()?;
			return Err(RangeError { index: usize::MAX, len }.into());
		};

		let from = utf8::offset_of(&self.buf, start)?;
		let to   = utf8::offset_of(&self.buf, end)?;

		Ok((from, to))
	}
}

fn check_ascii(data: &[u8]) -> Result<(), EncodingError> {
	match data.iter().position(|octet| !octet.is_ascii()) {
		Some(index) => Err(EncodingError {
			value: u32::from(data[index]),
			index,
		}),

		None => Ok(()),
	}
}

impl Add<&String> for String {
	type Output = Self;

	#[inline(always)]
	fn add(mut self, rhs: &Self) -> Self::Output {
		self += rhs;
		self
	}
}

impl Add for String {
	type Output = Self;

	#[inline(always)]
	fn add(mut self, rhs: Self) -> Self::Output {
		self += &rhs;
		self
	}
}

impl Add<&str> for String {
	type Output = Self;

	#[inline(always)]
	fn add(mut self, rhs: &str) -> Self::Output {
		self += rhs;
		self
	}
}

impl Add<char> for String {
	type Output = Self;

	#[inline(always)]
	fn add(mut self, rhs: char) -> Self::Output {
		self += rhs;
		self
	}
}

impl AddAssign<&String> for String {
	#[inline(always)]
	fn add_assign(&mut self, rhs: &Self) {
		self.buf.extend_from_slice(&rhs.buf);
	}
}

impl AddAssign for String {
	#[inline(always)]
	fn add_assign(&mut self, rhs: Self) {
		*self += &rhs;
	}
}

impl AddAssign<&str> for String {
	#[inline(always)]
	fn add_assign(&mut self, rhs: &str) {
		self.push_str(rhs);
	}
}

impl AddAssign<char> for String {
	#[inline(always)]
	fn add_assign(&mut self, rhs: char) {
		self.push(rhs);
	}
}

impl AsRef<[u8]> for String {
	#[inline(always)]
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl Debug for String {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Debug::fmt(&alloc::string::String::from_utf8_lossy(&self.buf), f)
	}
}

impl Display for String {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&alloc::string::String::from_utf8_lossy(&self.buf), f)
	}
}

impl Eq for String { }

impl Extend<char> for String {
	#[inline]
	fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
		for c in iter {
			self.push(c);
		}
	}
}

impl<'a> Extend<&'a str> for String {
	#[inline]
	fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
		for s in iter {
			self.push_str(s);
		}
	}
}

impl From<char> for String {
	#[inline]
	fn from(value: char) -> Self {
		let mut this = Self::new();
		this.push(value);

		this
	}
}

impl From<&str> for String {
	#[inline(always)]
	fn from(value: &str) -> Self {
		let buf = value.as_bytes().to_vec();
		Self { buf }
	}
}

impl From<alloc::string::String> for String {
	#[inline(always)]
	fn from(value: alloc::string::String) -> Self {
		let buf = value.into_bytes();
		Self { buf }
	}
}

impl FromIterator<char> for String {
	#[inline]
	fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
		let mut this = Self::new();
		this.extend(iter);

		this
	}
}

impl FromStr for String {
	type Err = Infallible;

	#[inline]
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(s.into())
	}
}

impl Hash for String {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.buf.hash(state);
	}
}

impl Ord for String {
	/// Compares octet-wise.
	///
	/// For well-formed strings, this coincides with comparing code point-wise.
	#[inline(always)]
	fn cmp(&self, other: &Self) -> Ordering {
		self.buf.cmp(&other.buf)
	}
}

impl PartialEq for String {
	/// Tests if two strings are equal.
	///
	/// As UTF-8 encodes each code point sequence uniquely, comparing the octets suffices.
	#[inline(always)]
	fn eq(&self, other: &Self) -> bool {
		self.buf == other.buf
	}
}

impl PartialEq<str> for String {
	#[inline(always)]
	fn eq(&self, other: &str) -> bool {
		self.buf == other.as_bytes()
	}
}

impl PartialEq<&str> for String {
	#[inline(always)]
	fn eq(&self, other: &&str) -> bool {
		*self == **other
	}
}

impl PartialEq<alloc::string::String> for String {
	#[inline(always)]
	fn eq(&self, other: &alloc::string::String) -> bool {
		*self == **other
	}
}

impl PartialEq<[u16]> for String {
	/// Tests if the string is equal to some UTF-16 code units.
	///
	/// Code units that are not well-formed UTF-16 never compare equal.
	#[inline]
	fn eq(&self, other: &[u16]) -> bool {
		utf16::to_utf8(other).is_ok_and(|other| self.buf == other)
	}
}

impl PartialEq<&[u16]> for String {
	#[inline(always)]
	fn eq(&self, other: &&[u16]) -> bool {
		*self == **other
	}
}

impl PartialEq<String> for str {
	#[inline(always)]
	fn eq(&self, other: &String) -> bool {
		*other == *self
	}
}

impl PartialEq<String> for &str {
	#[inline(always)]
	fn eq(&self, other: &String) -> bool {
		*other == **self
	}
}

impl PartialEq<String> for alloc::string::String {
	#[inline(always)]
	fn eq(&self, other: &String) -> bool {
		*other == **self
	}
}

impl PartialOrd for String {
	#[inline(always)]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl TryFrom<Vec<u8>> for String {
	type Error = Error;

	#[inline(always)]
	fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
		Self::from_utf8(value)
	}
}

impl TryFrom<&[u8]> for String {
	type Error = Error;

	#[inline(always)]
	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_utf8(value.to_vec())
	}
}

impl TryFrom<&[u16]> for String {
	type Error = Error;

	#[inline(always)]
	fn try_from(value: &[u16]) -> Result<Self, Self::Error> {
		Self::from_utf16(value)
	}
}

/// See [`into_std_string`](String::into_std_string).
impl TryFrom<String> for alloc::string::String {
	type Error = Error;

	#[inline(always)]
	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.into_std_string()
	}
}
