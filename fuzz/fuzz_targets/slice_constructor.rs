#![no_main]

use cinterop::{InteropError, NullableUtf8Str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match NullableUtf8Str::from_units_with_nul(data) {
        Ok(view) => {
            let contents = &data[..data.len() - 1];
            assert!(!view.is_null());
            assert!(!view.as_ptr().is_null());
            assert_eq!(view.as_units(), contents);
            assert_eq!(view.to_vec(), contents);
            assert!(view.iter().eq(contents.iter().copied()));
        }
        Err(InteropError::MissingNul) => {
            assert!(!data.contains(&0));
        }
        Err(InteropError::InteriorNul { position }) => {
            assert_eq!(data.iter().position(|&unit| unit == 0), Some(position));
            assert_ne!(position + 1, data.len());
        }
    }
});
