//! POSIX paths, where `/` is the only separator
//!
//! # Examples
//! ```
//! use path_algebra::posix::{self, FilePath};
//!
//! assert_eq!(posix::combine("home", "bob"), "home/bob");
//! assert_eq!(posix::split_path("/usr/lib/"), vec!["/", "usr/", "lib/"]);
//! assert_eq!(FilePath::from("/usr") / "lib" / "libc.so", "/usr/lib/libc.so");
//! ```

specialize!(Platform::Posix);
