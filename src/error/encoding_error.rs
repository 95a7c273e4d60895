// Copyright 2025 Gabriel Bjørnager Jensen.

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// An invalid encoding unit was encountered.
///
/// Depending on where the error was raised, the offending unit is either a UTF-8 octet, a UTF-16 code unit, or a decoded code point that has no valid representation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct EncodingError {
	/// The offending unit.
	pub value: u32,

	/// The position of the offending unit.
	///
	/// This is an octet offset for UTF-8 input and a code unit index for UTF-16 input.
	pub index: usize,
}

impl Display for EncodingError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found invalid encoding unit {:#02X} at position ({})", self.value, self.index)
	}
}

impl Error for EncodingError { }

impl From<Infallible> for EncodingError {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}
