use std::ffi::c_char;
use std::fmt::Debug;
use std::hash::Hash;

use libc::wchar_t;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A character domain a [`NullableStr`] can range over.
///
/// Each domain fixes the code unit foreign strings are made of, the
/// terminator element, and a statically allocated empty terminated sequence
/// that null pointers normalize to. The trait is sealed: the set of domains
/// is the compile-time table below, and a domain missing from it is a
/// compile error rather than a runtime fallback.
///
/// [`NullableStr`]: crate::string::NullableStr
pub trait CharDomain: sealed::Sealed {
    /// Code unit of this domain's terminated sequences.
    type Unit: Copy + Eq + Ord + Hash + Debug + 'static;

    /// The terminator element, the zero value of the unit type.
    const NUL: Self::Unit;

    /// Canonical empty terminated sequence for this domain.
    const EMPTY: &'static [Self::Unit];
}

/// Platform `char` strings (`*const c_char`).
pub enum Narrow {}

/// Platform `wchar_t` strings.
pub enum Wide {}

/// UTF-8 code unit strings.
pub enum Utf8 {}

/// UTF-16 code unit strings.
pub enum Utf16 {}

/// UTF-32 code unit strings.
pub enum Utf32 {}

impl sealed::Sealed for Narrow {}
impl CharDomain for Narrow {
    type Unit = c_char;
    const NUL: c_char = 0;
    const EMPTY: &'static [c_char] = &[0];
}

impl sealed::Sealed for Wide {}
impl CharDomain for Wide {
    type Unit = wchar_t;
    const NUL: wchar_t = 0;
    const EMPTY: &'static [wchar_t] = &[0];
}

impl sealed::Sealed for Utf8 {}
impl CharDomain for Utf8 {
    type Unit = u8;
    const NUL: u8 = 0;
    const EMPTY: &'static [u8] = &[0];
}

impl sealed::Sealed for Utf16 {}
impl CharDomain for Utf16 {
    type Unit = u16;
    const NUL: u16 = 0;
    const EMPTY: &'static [u16] = &[0];
}

impl sealed::Sealed for Utf32 {}
impl CharDomain for Utf32 {
    type Unit = u32;
    const NUL: u32 = 0;
    const EMPTY: &'static [u32] = &[0];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_empty_is_terminated<D: CharDomain>() {
        assert_eq!(D::EMPTY.len(), 1);
        assert_eq!(D::EMPTY[0], D::NUL);
    }

    #[test]
    fn test_empty_literals_are_single_terminators() {
        assert_empty_is_terminated::<Narrow>();
        assert_empty_is_terminated::<Wide>();
        assert_empty_is_terminated::<Utf8>();
        assert_empty_is_terminated::<Utf16>();
        assert_empty_is_terminated::<Utf32>();
    }
}
