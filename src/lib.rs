//! Wrapper types for results of foreign C-style calls.
//!
//! C APIs communicate failure through in-band signals: a null pointer where
//! a string was expected, or a reserved sentinel value in an otherwise
//! ordinary scalar return. This crate converts both signals into inert,
//! inspectable data instead of letting them flow through caller code as
//! raw pointers and magic numbers.
//!
//! [`NullableStr`] wraps a possibly-null pointer to a nul-terminated
//! character sequence and normalizes "null" to "empty" at every access.
//! [`SentinelResult`] wraps a scalar return value and classifies it against
//! a compile-time sentinel constant with a compile-time comparison strategy.

use std::fmt;

pub mod sentinel;
pub mod string;

/// A collection of errors emitted by this library
#[derive(Debug)]
pub enum InteropError {
    MissingNul,
    InteriorNul { position: usize },
}

impl fmt::Display for InteropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteropError::MissingNul => write!(f, "expected a nul unit in final position"),
            InteropError::InteriorNul { position } => {
                write!(f, "interior nul unit at position {}", position)
            }
        }
    }
}

impl std::error::Error for InteropError {}

pub use crate::string::{
    CharDomain, Narrow, NullableCStr, NullableStr, NullableUtf16Str, NullableUtf32Str,
    NullableUtf8Str, NullableWideStr, Units, Utf16, Utf32, Utf8, Wide,
};

pub use crate::sentinel::{
    Compare, Equal, Greater, GreaterOrEqual, Less, LessOrEqual, MinusOne, NotEqual, Null,
    SentinelConst, SentinelResult, Zero,
};
