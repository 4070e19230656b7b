//! # path-algebra
//!
//! Pure, platform-parameterized path string algebra.
//!
//! Paths are plain text. Every operation splits, searches or concatenates
//! strings according to the separator conventions of a target [`Platform`],
//! and none of them touch the filesystem or fail.
//!
//! ## Features
//!
//! - **Extensions**: split, take, drop, replace and add, on the last or the
//!   first `.`
//! - **File names**: split a path into directory and file, swap either half
//! - **Combination**: join with the canonical separator, where an absolute
//!   right-hand side wins
//! - **Segments**: lossless `split_path` / `join_path`
//! - **Trailing separators**: test, add and drop, with the root kept intact
//! - **Platforms**: [`posix`], [`windows`] and [`url`] fix the platform;
//!   [`generic`] takes it as an argument
//!
//! ## Examples
//!
//! ### Fixed platform
//!
//! ```rust
//! use path_algebra::{posix, windows};
//!
//! assert_eq!(posix::combine("home", "bob"), "home/bob");
//! assert_eq!(windows::combine("C:\\foo", "bar"), "C:\\foo\\bar");
//! assert_eq!(posix::take_base_name("file/file.tar.gz"), "file.tar");
//! assert_eq!(posix::split_path("test//item/"), vec!["test//", "item/"]);
//! ```
//!
//! ### Platform chosen at runtime
//!
//! ```rust
//! use path_algebra::{current_platform, generic, Platform};
//!
//! let platform: Platform = "windows".parse().unwrap();
//! assert_eq!(generic::take_file_name(platform, "C:\\dir/file.txt"), "file.txt");
//!
//! let native = generic::combine(current_platform(), "target", "debug");
//! assert!(native.starts_with("target"));
//! ```
//!
//! ### Infix combination
//!
//! ```rust
//! use path_algebra::posix::FilePath;
//!
//! let path = FilePath::from("/usr") / "share" / "doc";
//! assert_eq!(path, "/usr/share/doc");
//! ```

#[macro_use]
mod specialize;

mod detect;
mod error;
mod platform;

pub mod generic;
pub mod posix;
pub mod url;
pub mod windows;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use detect::current_platform;
pub use error::{PathError, Result};
pub use generic::normalize_ext;
pub use platform::Platform;
