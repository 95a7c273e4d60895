// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use alloc::vec::Vec;
use codestr::String;
use codestr::error::{EncodingError, Error};

#[test]
fn test_codepoints() {
	let s = String::from("a\u{00B1}\u{FDF2}\u{1F54B}");

	let mut iter = s.codepoints().unwrap();

	assert_eq!(iter.next().unwrap(), "a");
	assert_eq!(iter.next().unwrap(), "\u{00B1}");
	assert_eq!(iter.offset(), 0x3);
	assert_eq!(iter.next().unwrap(), "\u{FDF2}");
	assert_eq!(iter.next().unwrap(), "\u{1F54B}");
	assert_eq!(iter.next(), None);
	assert_eq!(iter.next(), None);
}

#[test]
fn test_codepoints_restart() {
	let s = String::from("\u{3053}\u{3093}");

	let mut iter = s.codepoints().unwrap();

	assert_eq!(iter.by_ref().count(), 0x2);

	iter.restart();

	let items: Vec<String> = iter.collect();
	assert_eq!(items, [String::from("\u{3053}"), String::from("\u{3093}")]);
}

#[test]
fn test_codepoints_snapshot() {
	let mut s = String::from("abc");

	let iter = s.codepoints().unwrap();

	s.clear();
	s.push_str("\u{1F602}\u{1F602}\u{1F602}\u{1F602}");

	let items: Vec<String> = iter.collect();
	assert_eq!(items, ["a", "b", "c"]);
}

#[test]
fn test_codepoints_single() {
	let s = String::from("\u{3053}\u{3093}\u{306B}\u{3061}\u{306F}\u{3000}\u{4E16}\u{754C}\u{FF01}\u{1F602}");

	for c in s.clone().into_codepoints().unwrap() {
		assert_eq!(c.codepoint_count(), Ok(0x1));
	}

	assert_eq!(s.codepoints().unwrap().count(), 0xA);
}

#[test]
fn test_codepoints_malformed() {
	let s = String::from_utf8_unvalidated(b"ab\xE3\x81".to_vec());

	assert!(matches!(
		s.codepoints(),
		Err(Error::InvalidEncoding(EncodingError { value: 0xE3, index: 0x2 })),
	));
}

#[test]
fn test_codepoints_size_hint() {
	let s = String::from("ab\u{1F602}");

	let iter = s.codepoints().unwrap();
	assert_eq!(iter.size_hint(), (0x2, Some(0x6)));
}
