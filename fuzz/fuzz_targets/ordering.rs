#![no_main]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use cinterop::NullableUtf8Str;
use libfuzzer_sys::fuzz_target;

fn hash_of(view: &NullableUtf8Str<'_>) -> u64 {
    let mut hasher = DefaultHasher::new();
    view.hash(&mut hasher);
    hasher.finish()
}

fuzz_target!(|data: (&[u8], &[u8])| {
    let (left, right) = data;
    let Ok(a) = NullableUtf8Str::from_units_with_nul(left) else {
        return;
    };
    let Ok(b) = NullableUtf8Str::from_units_with_nul(right) else {
        return;
    };

    assert_eq!(a.cmp(&b), a.as_units().cmp(b.as_units()));
    assert_eq!(a == b, a.as_units() == b.as_units());
    if a == b {
        assert_eq!(hash_of(&a), hash_of(&b));
    }
});
