use std::ffi::CString;

use env_logger::Builder;
use log::LevelFilter;

use cinterop::{MinusOne, NotEqual, NullableCStr, SentinelResult};

type FileDescriptor = SentinelResult<libc::c_int, MinusOne, NotEqual>;

fn setup_logging() {
    let mut builder = Builder::from_default_env();
    builder.filter(None, LevelFilter::Info).init();
}

fn lookup_env(name: &str) -> NullableCStr<'static> {
    let name = CString::new(name).unwrap();
    unsafe { NullableCStr::from_ptr(libc::getenv(name.as_ptr())) }
}

fn main() {
    setup_logging();

    let path = lookup_env("PATH");
    if path.is_null() {
        log::info!("PATH is not set");
    } else {
        log::info!("PATH = {}", path.to_string_lossy());
    }

    let missing = lookup_env("CINTEROP_DEMO_DOES_NOT_EXIST");
    log::info!(
        "missing variable: null = {}, normalized length = {}",
        missing.is_null(),
        missing.iter().count()
    );

    let scanned = path.as_units().len();
    let reported = unsafe { libc::strlen(path.as_ptr()) };
    log::info!(
        "strlen agrees with the scanned view length: {}",
        scanned == reported
    );

    let no_such_path = CString::new("/this/path/does/not/exist").unwrap();
    let fd: FileDescriptor =
        unsafe { libc::open(no_such_path.as_ptr(), libc::O_RDONLY) }.into();
    if fd.has_error() {
        log::info!("open returned the error sentinel: {}", fd.value());
    } else {
        log::info!("unexpectedly opened {:?}, closing", no_such_path);
        unsafe { libc::close(fd.value()) };
    }
}
