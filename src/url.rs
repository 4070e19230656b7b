//! URL paths
//!
//! Separator behavior is the same as [`posix`](crate::posix); the module is
//! kept apart so call sites say what kind of path they handle.

specialize!(Platform::Url);
