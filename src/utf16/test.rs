// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use alloc::vec::Vec;
use codestr::error::EncodingError;
use codestr::utf16::{from_utf8, to_utf8};

#[test]
fn test_from_utf8() {
	assert_eq!(from_utf8(b"hi"), Ok([0x0068, 0x0069].to_vec()));

	assert_eq!(
		from_utf8("\u{3053}".as_bytes()),
		Ok([0x3053].to_vec()),
	);

	assert_eq!(
		from_utf8("\u{1F47A}".as_bytes()),
		Ok([0xD83D, 0xDC7A].to_vec()),
	);

	assert_eq!(
		from_utf8("\u{10FFFF}".as_bytes()),
		Ok([0xDBFF, 0xDFFF].to_vec()),
	);

	assert_eq!(
		from_utf8(b"a\xF4\x90\x80\x80"),
		Err(EncodingError { value: 0x110000, index: 0x1 }),
	);
}

#[test]
fn test_to_utf8() {
	assert_eq!(to_utf8(&[0xD83D, 0xDC7A]), Ok("\u{1F47A}".as_bytes().to_vec()));
	assert_eq!(to_utf8(&[0x0041, 0x00E9]), Ok("A\u{00E9}".as_bytes().to_vec()));
	assert_eq!(to_utf8(&[]), Ok(Vec::new()));

	// Unpaired high surrogate.
	assert_eq!(
		to_utf8(&[0x0041, 0xD83D]),
		Err(EncodingError { value: 0xD83D, index: 0x1 }),
	);

	assert_eq!(
		to_utf8(&[0xD83D, 0x0041]),
		Err(EncodingError { value: 0xD83D, index: 0x0 }),
	);

	// Lone low surrogate.
	assert_eq!(
		to_utf8(&[0xDC7A]),
		Err(EncodingError { value: 0xDC7A, index: 0x0 }),
	);
}

#[test]
fn test_utf16_round_trip() {
	let s = "This is a wide string! \u{65E5}\u{672C}\u{8A9E}\u{3000}\u{1F47A}";

	let units: Vec<u16> = s.encode_utf16().collect();

	assert_eq!(from_utf8(s.as_bytes()).as_deref(), Ok(units.as_slice()));
	assert_eq!(to_utf8(&units).as_deref(), Ok(s.as_bytes()));
}

#[test]
fn test_error_position() {
	let e = to_utf8(&[0x0041, 0xD83D]).unwrap_err();

	assert_eq!(alloc::format!("{e}"), "found invalid encoding unit 0xD83D at position (1)");
}
