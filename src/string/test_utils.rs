#[cfg(test)]
macro_rules! assert_view_trait_requirements {
    ($test_name:ident, $view:ty, $unit:ty) => {
        #[test]
        fn $test_name() {
            fn assert_copy<T: Copy>() {}
            fn assert_send_sync<T: Send + Sync>() {}
            fn assert_default<T: Default>() {}
            fn assert_units<T: IntoIterator<Item = U>, U>() {}

            assert_copy::<$view>();
            assert_send_sync::<$view>();
            assert_default::<$view>();
            assert_units::<$view, $unit>();
        }
    };
}

#[cfg(test)]
pub(crate) use assert_view_trait_requirements;
