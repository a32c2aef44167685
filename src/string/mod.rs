pub mod domain;
pub mod iter;
pub mod view;

pub(crate) mod test_utils;

pub use domain::{CharDomain, Narrow, Utf16, Utf32, Utf8, Wide};
pub use iter::Units;
pub use view::{
    NullableCStr, NullableStr, NullableUtf16Str, NullableUtf32Str, NullableUtf8Str,
    NullableWideStr,
};
