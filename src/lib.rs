// Copyright 2025 Gabriel Bjørnager Jensen.

//! `codestr` is a Rust crate for UTF-8 strings that are addressed by code point.
//!
//! The [`String`] type stores its text as contiguous UTF-8 octets, but every position taken or returned by its methods counts *code points*, not octets.
//! Indexing, slicing, searching, and replacing all translate code point indices into octet offsets behind the scenes.
//!
//! Decoding is strict: overlong forms, surrogates, and values past `U+10FFFF` are rejected.
//! See the [`utf8`] and [`utf16`] modules for the underlying codecs.
//!
//! # Examples
//!
//! ```rust
//! use codestr::String;
//!
//! let s = String::from("gr\u{00FC}\u{00DF} dich");
//!
//! assert_eq!(s.codepoint_count(), Ok(0x9));
//! assert_eq!(s.byte_size(), 0xB);
//!
//! assert_eq!(s.at(0x3).unwrap(), "\u{00DF}");
//! assert_eq!(s.find("dich", 0x0), Ok(Some(0x5)));
//! ```

#![no_std]

#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate self as codestr;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iter;
pub mod utf16;
pub mod utf8;

mod search;
mod string;

pub use error::Error;
pub use string::String;
