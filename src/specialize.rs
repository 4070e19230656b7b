//! Generates a platform module from the generic algebra
//!
//! `specialize!(platform)` expands, inside the invoking module, to one thin
//! wrapper per [`generic`](crate::generic) function with the platform fixed,
//! a `PLATFORM` constant, and a `FilePath` newtype whose `/` operator is
//! `combine`.

macro_rules! specialize {
    ($platform:expr) => {
        use std::fmt;
        use std::ops::{Deref, Div};

        use $crate::generic;
        use $crate::platform::Platform;

        /// The platform every function in this module is fixed to
        pub const PLATFORM: Platform = $platform;

        /// The canonical separator, used when joining
        pub fn path_separator() -> &'static str {
            generic::path_separator(PLATFORM)
        }

        /// Every recognized separator, canonical first
        pub fn path_separators() -> &'static [&'static str] {
            generic::path_separators(PLATFORM)
        }

        pub fn is_path_separator(s: &str) -> bool {
            generic::is_path_separator(PLATFORM, s)
        }

        pub fn ext_separator() -> &'static str {
            generic::ext_separator(PLATFORM)
        }

        pub fn is_ext_separator(s: &str) -> bool {
            generic::is_ext_separator(PLATFORM, s)
        }

        /// See [`generic::split_extension`]
        pub fn split_extension(path: &str) -> (&str, &str) {
            generic::split_extension(PLATFORM, path)
        }

        pub fn take_extension(path: &str) -> &str {
            generic::take_extension(PLATFORM, path)
        }

        pub fn drop_extension(path: &str) -> &str {
            generic::drop_extension(PLATFORM, path)
        }

        /// See [`generic::replace_extension`]
        pub fn replace_extension(path: &str, ext: &str) -> String {
            generic::replace_extension(PLATFORM, path, ext)
        }

        /// See [`generic::add_extension`]
        pub fn add_extension(path: &str, ext: &str) -> String {
            generic::add_extension(PLATFORM, path, ext)
        }

        pub fn has_extension(path: &str) -> bool {
            generic::has_extension(PLATFORM, path)
        }

        /// See [`generic::split_extensions`]
        pub fn split_extensions(path: &str) -> (&str, &str) {
            generic::split_extensions(PLATFORM, path)
        }

        pub fn take_extensions(path: &str) -> &str {
            generic::take_extensions(PLATFORM, path)
        }

        pub fn drop_extensions(path: &str) -> &str {
            generic::drop_extensions(PLATFORM, path)
        }

        /// See [`generic::split_file_name`]
        pub fn split_file_name(path: &str) -> (&str, &str) {
            generic::split_file_name(PLATFORM, path)
        }

        pub fn take_file_name(path: &str) -> &str {
            generic::take_file_name(PLATFORM, path)
        }

        pub fn drop_file_name(path: &str) -> &str {
            generic::drop_file_name(PLATFORM, path)
        }

        pub fn replace_file_name(path: &str, name: &str) -> String {
            generic::replace_file_name(PLATFORM, path, name)
        }

        pub fn take_base_name(path: &str) -> &str {
            generic::take_base_name(PLATFORM, path)
        }

        /// See [`generic::replace_base_name`]
        pub fn replace_base_name(path: &str, name: &str) -> String {
            generic::replace_base_name(PLATFORM, path, name)
        }

        /// See [`generic::take_directory`]
        pub fn take_directory(path: &str) -> String {
            generic::take_directory(PLATFORM, path)
        }

        pub fn replace_directory(path: &str, dir: &str) -> String {
            generic::replace_directory(PLATFORM, path, dir)
        }

        /// See [`generic::combine`]. [`FilePath`] offers the same through `/`.
        pub fn combine(path1: &str, path2: &str) -> String {
            generic::combine(PLATFORM, path1, path2)
        }

        /// See [`generic::split_path`]
        pub fn split_path(path: &str) -> Vec<&str> {
            generic::split_path(PLATFORM, path)
        }

        /// See [`generic::join_path`]
        pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
            generic::join_path(PLATFORM, segments)
        }

        pub fn has_trailing_path_separator(path: &str) -> bool {
            generic::has_trailing_path_separator(PLATFORM, path)
        }

        pub fn add_trailing_path_separator(path: &str) -> String {
            generic::add_trailing_path_separator(PLATFORM, path)
        }

        /// See [`generic::drop_trailing_path_separator`]
        pub fn drop_trailing_path_separator(path: &str) -> String {
            generic::drop_trailing_path_separator(PLATFORM, path)
        }

        /// An owned path whose `/` operator is [`combine`]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct FilePath(String);

        impl FilePath {
            pub fn new(path: impl Into<String>) -> Self {
                FilePath(path.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl<S: AsRef<str>> Div<S> for FilePath {
            type Output = FilePath;

            fn div(self, rhs: S) -> FilePath {
                FilePath(combine(&self.0, rhs.as_ref()))
            }
        }

        impl<S: AsRef<str>> Div<S> for &FilePath {
            type Output = FilePath;

            fn div(self, rhs: S) -> FilePath {
                FilePath(combine(&self.0, rhs.as_ref()))
            }
        }

        impl Deref for FilePath {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for FilePath {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for FilePath {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for FilePath {
            fn from(path: &str) -> Self {
                FilePath(path.to_string())
            }
        }

        impl From<String> for FilePath {
            fn from(path: String) -> Self {
                FilePath(path)
            }
        }

        impl From<FilePath> for String {
            fn from(path: FilePath) -> Self {
                path.0
            }
        }

        impl PartialEq<str> for FilePath {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for FilePath {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}
