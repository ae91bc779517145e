// Library exports for testing and potential library use
//
// The particle pipeline lives in `particle-term-render`; this crate wires it
// to a window, a terminal model and the input devices.
//
// `parking_lot::Mutex` is the lock of choice for sync-only state such as the
// log bridge file handle.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod debug;
pub mod frame;
pub mod link;
