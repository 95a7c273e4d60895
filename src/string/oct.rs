// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(feature = "oct")]

use crate::String;
use crate::error::EncodingError;
use crate::utf8;

use alloc::vec;
use oct::decode::{self, Decode};
use oct::encode::{self, Encode};
use oct::error::{CollectionDecodeError, InputError};

#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Decode for String {
	type Error = CollectionDecodeError<InputError, EncodingError>;

	/// Decodes a length-prefixed sequence of octets.
	///
	/// The octets are checked to be well-formed UTF-8.
	/// Input that ends before the announced length is reported through [`BadLength`](CollectionDecodeError::BadLength).
	#[inline]
	#[track_caller]
	fn decode(input: &mut decode::Input) -> Result<Self, Self::Error> {
		let Ok(len) = <usize as Decode>::decode(input);

		let mut buf = vec![0x00; len];
		input.read_into(&mut buf).map_err(CollectionDecodeError::BadLength)?;

		utf8::validate(&buf).map_err(CollectionDecodeError::BadItem)?;

		let this = Self::from_utf8_unvalidated(buf);
		Ok(this)
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Encode for String {
	type Error = <[u8] as Encode>::Error;

	/// Encodes using the same format as <code>&lt;[prim@str] as Encode&gt;::encode</code>.
	#[inline]
	#[track_caller]
	fn encode(&self, output: &mut encode::Output) -> Result<(), Self::Error> {
		self.as_bytes().encode(output)
	}
}
