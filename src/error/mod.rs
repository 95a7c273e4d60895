// Copyright 2025 Gabriel Bjørnager Jensen.

//! Error types.

mod encoding_error;
mod range_error;

pub use encoding_error::EncodingError;
pub use range_error::RangeError;

use core::convert::Infallible;
use core::fmt::{self, Display, Formatter};

/// Any error raised by a string operation.
///
/// Searches that merely find nothing are not errors; they instead yield [`None`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub enum Error {
	/// Malformed UTF-8 or UTF-16 data, or non-ASCII data where ASCII was required.
	InvalidEncoding(EncodingError),

	/// A code point index (or index plus length) went past the end of the string.
	OutOfRange(RangeError),
}

impl Display for Error {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Self::InvalidEncoding(ref e) => Display::fmt(e, f),
			Self::OutOfRange(ref e)      => Display::fmt(e, f),
		}
	}
}

impl core::error::Error for Error {
	#[inline]
	fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
		match *self {
			Self::InvalidEncoding(ref e) => Some(e),
			Self::OutOfRange(ref e)      => Some(e),
		}
	}
}

impl From<EncodingError> for Error {
	#[inline(always)]
	fn from(value: EncodingError) -> Self {
		Self::InvalidEncoding(value)
	}
}

impl From<RangeError> for Error {
	#[inline(always)]
	fn from(value: RangeError) -> Self {
		Self::OutOfRange(value)
	}
}

impl From<Infallible> for Error {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl From<Error> for std::io::Error {
	#[inline]
	fn from(value: Error) -> Self {
		use std::io::ErrorKind;

		let kind = match value {
			Error::InvalidEncoding(..) => ErrorKind::InvalidData,
			Error::OutOfRange(..)      => ErrorKind::InvalidInput,
		};

		Self::new(kind, value)
	}
}
