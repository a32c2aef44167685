use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr;

use crate::sentinel::compare::{Compare, Equal};

/// Provider of the sentinel constant a [`SentinelResult`] classifies
/// against.
///
/// Foreign APIs disagree on what the reserved value is, so the constant is
/// a compile-time parameter rather than a crate-wide convention. A
/// one-line impl on a caller-defined tag covers any other convention:
///
/// ```
/// use cinterop::SentinelConst;
///
/// enum MaxSize {}
///
/// impl SentinelConst<usize> for MaxSize {
///     fn value() -> usize {
///         usize::MAX
///     }
/// }
/// ```
pub trait SentinelConst<T> {
    fn value() -> T;
}

/// The zero value of the wrapped type. Default sentinel.
pub enum Zero {}

impl<T: Default> SentinelConst<T> for Zero {
    fn value() -> T {
        T::default()
    }
}

/// `-1`, the pervasive C error return.
pub enum MinusOne {}

macro_rules! impl_minus_one {
    ($($int:ty),*) => {
        $(
            impl SentinelConst<$int> for MinusOne {
                fn value() -> $int {
                    -1
                }
            }
        )*
    };
}

impl_minus_one!(i8, i16, i32, i64, isize);

/// The null pointer, for APIs returning handles.
pub enum Null {}

impl<U> SentinelConst<*const U> for Null {
    fn value() -> *const U {
        ptr::null()
    }
}

impl<U> SentinelConst<*mut U> for Null {
    fn value() -> *mut U {
        ptr::null_mut()
    }
}

/// A scalar returned from a foreign call, classified against a sentinel.
///
/// The wrapped value is stored unchanged; success or failure is a pure
/// function of the value, the sentinel constant `S`, and the comparison
/// strategy `C`, all fixed at the instantiation site. The default
/// configuration treats "equals zero" as success, matching the most common
/// C return convention. Conversion from the raw scalar via [`From`] lets
/// the type sit directly at a foreign call's return site:
///
/// ```
/// use cinterop::{MinusOne, NotEqual, SentinelResult};
///
/// type FileDescriptor = SentinelResult<libc::c_int, MinusOne, NotEqual>;
///
/// let fd: FileDescriptor = unsafe { libc::open(c"/dev/null".as_ptr(), libc::O_RDONLY) }.into();
/// if fd.is_ok() {
///     unsafe { libc::close(fd.value()) };
/// }
/// ```
pub struct SentinelResult<T, S = Zero, C = Equal> {
    value: T,
    marker: PhantomData<fn() -> (S, C)>,
}

impl<T, S, C> SentinelResult<T, S, C> {
    pub fn new(value: T) -> Self {
        SentinelResult {
            value,
            marker: PhantomData,
        }
    }

    /// Returns the wrapped scalar unchanged.
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Consumes the wrapper, returning the wrapped scalar unchanged.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns true if the value satisfies the sentinel-defined success
    /// condition.
    pub fn is_ok(&self) -> bool
    where
        S: SentinelConst<T>,
        C: Compare<T>,
    {
        C::matches(&self.value, &S::value())
    }

    /// Returns true if the value fails the sentinel-defined success
    /// condition.
    pub fn has_error(&self) -> bool
    where
        S: SentinelConst<T>,
        C: Compare<T>,
    {
        !self.is_ok()
    }

    /// Returns the value on success, `None` on the sentinel-defined error
    /// condition.
    pub fn ok(self) -> Option<T>
    where
        S: SentinelConst<T>,
        C: Compare<T>,
    {
        if self.is_ok() {
            Some(self.value)
        } else {
            None
        }
    }
}

impl<T, S, C> From<T> for SentinelResult<T, S, C> {
    fn from(value: T) -> Self {
        SentinelResult::new(value)
    }
}

impl<T, S, C> From<SentinelResult<T, S, C>> for bool
where
    S: SentinelConst<T>,
    C: Compare<T>,
{
    fn from(result: SentinelResult<T, S, C>) -> bool {
        result.is_ok()
    }
}

impl<T: Clone, S, C> Clone for SentinelResult<T, S, C> {
    fn clone(&self) -> Self {
        SentinelResult::new(self.value.clone())
    }
}

impl<T: Copy, S, C> Copy for SentinelResult<T, S, C> {}

impl<T: PartialEq, S, C> PartialEq for SentinelResult<T, S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, S, C> Eq for SentinelResult<T, S, C> {}

impl<T: Debug, S, C> Debug for SentinelResult<T, S, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SentinelResult").field(&self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::compare::{Less, NotEqual};

    type StatusCode = SentinelResult<i32>;

    #[test]
    fn test_default_configuration_zero_is_ok() {
        assert!(StatusCode::new(0).is_ok());
        assert!(!StatusCode::new(0).has_error());
        assert!(StatusCode::new(7).has_error());
        assert!(StatusCode::new(-7).has_error());
    }

    #[test]
    fn test_bool_conversion_matches_classification() {
        assert!(!bool::from(StatusCode::new(5)));
        assert!(bool::from(StatusCode::new(0)));
    }

    #[test]
    fn test_value_round_trips_unchanged() {
        assert_eq!(StatusCode::new(5).value(), 5);
        assert_eq!(StatusCode::new(-1).into_value(), -1);
        let negative_ok: SentinelResult<i32, Zero, Less> = 3.into();
        assert_eq!(negative_ok.value(), 3);
    }

    #[test]
    fn test_negative_means_ok_configuration() {
        type NegativeOk = SentinelResult<i32, Zero, Less>;
        assert!(NegativeOk::new(-1).is_ok());
        assert!(NegativeOk::new(0).has_error());
        assert!(NegativeOk::new(1).has_error());
    }

    #[test]
    fn test_minus_one_error_marker_configuration() {
        type FileDescriptor = SentinelResult<i32, MinusOne, NotEqual>;
        let failed = FileDescriptor::new(-1);
        assert!(!failed.is_ok());
        assert_eq!(failed.value(), -1);
        assert_eq!(failed.ok(), None);
        assert_eq!(FileDescriptor::new(3).ok(), Some(3));
    }

    #[test]
    fn test_null_handle_configuration() {
        type Handle = SentinelResult<*const u8, Null, NotEqual>;
        let data = 1u8;
        assert!(Handle::new(&data).is_ok());
        assert!(Handle::new(std::ptr::null()).has_error());
    }

    #[test]
    fn test_caller_defined_sentinel() {
        enum MaxSize {}
        impl SentinelConst<usize> for MaxSize {
            fn value() -> usize {
                usize::MAX
            }
        }
        type Found = SentinelResult<usize, MaxSize, NotEqual>;
        assert!(Found::new(0).is_ok());
        assert!(Found::new(usize::MAX).has_error());
    }

    #[test]
    fn test_equality_ignores_configuration_state() {
        assert_eq!(StatusCode::new(2), StatusCode::new(2));
        assert_ne!(StatusCode::new(2), StatusCode::new(3));
    }
}
