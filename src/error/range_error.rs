// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A code point index lay past the end of a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct RangeError {
	/// The rejected code point index.
	pub index: usize,

	/// The amount of code points in the string.
	pub len: usize,
}

impl Display for RangeError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "code point index ({}) is out of range for string of ({}) code points", self.index, self.len)
	}
}

impl Error for RangeError { }
