//! Platform-parameterized path algebra
//!
//! Every function here takes the target [`Platform`] as its first argument and
//! works purely on text: nothing touches the filesystem, nothing fails. The
//! [`posix`](crate::posix), [`windows`](crate::windows) and [`url`](crate::url)
//! modules re-export all of them with the platform fixed.
//!
//! Splitting functions borrow from their input. Functions that build a new
//! path return an owned [`String`].

use crate::platform::Platform;

const EXT_SEPARATOR: char = '.';

/// The canonical separator, used when joining
pub fn path_separator(platform: Platform) -> &'static str {
    platform.separators()[0]
}

/// Every separator the platform recognizes, canonical first
pub fn path_separators(platform: Platform) -> &'static [&'static str] {
    platform.separators()
}

/// Whether `s` is exactly one recognized separator
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert!(generic::is_path_separator(Platform::Windows, "\\"));
/// assert!(generic::is_path_separator(Platform::Windows, "/"));
/// assert!(!generic::is_path_separator(Platform::Posix, "\\"));
/// assert!(!generic::is_path_separator(Platform::Posix, "//"));
/// ```
pub fn is_path_separator(platform: Platform, s: &str) -> bool {
    platform.separators().iter().any(|sep| *sep == s)
}

/// The extension separator, `.` on every platform
pub fn ext_separator(_platform: Platform) -> &'static str {
    "."
}

pub fn is_ext_separator(platform: Platform, s: &str) -> bool {
    s == ext_separator(platform)
}

/// Split a path at its last `.`
///
/// The search covers the whole string, not just the final segment, so a dot
/// in a directory name counts when the file name has none. The extension keeps
/// its leading dot and the two halves always concatenate back to `path`.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(
///     generic::split_extension(Platform::Posix, "file/path.txt.bob.fred"),
///     ("file/path.txt.bob", ".fred")
/// );
/// assert_eq!(generic::split_extension(Platform::Posix, "file"), ("file", ""));
/// assert_eq!(generic::split_extension(Platform::Posix, "dir.d/file"), ("dir", ".d/file"));
/// ```
pub fn split_extension(_platform: Platform, path: &str) -> (&str, &str) {
    match path.rfind(EXT_SEPARATOR) {
        Some(i) => path.split_at(i),
        None => (path, ""),
    }
}

pub fn take_extension(platform: Platform, path: &str) -> &str {
    split_extension(platform, path).1
}

pub fn drop_extension(platform: Platform, path: &str) -> &str {
    split_extension(platform, path).0
}

/// Replace the last extension with `ext`
///
/// A missing leading dot on `ext` is supplied.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::replace_extension(Platform::Posix, "file.txt", "bob"), "file.bob");
/// assert_eq!(generic::replace_extension(Platform::Posix, "file.txt", ".bob"), "file.bob");
/// assert_eq!(generic::replace_extension(Platform::Posix, "file", "bob"), "file.bob");
/// ```
pub fn replace_extension(platform: Platform, path: &str, ext: &str) -> String {
    let mut result = drop_extension(platform, path).to_string();
    push_ext(&mut result, ext);
    result
}

/// Append `ext` without removing any existing extension
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::add_extension(Platform::Posix, "file.tar", "gz"), "file.tar.gz");
/// assert_eq!(generic::add_extension(Platform::Posix, "/", ".x"), "/.x");
/// ```
pub fn add_extension(_platform: Platform, path: &str, ext: &str) -> String {
    let mut result = path.to_string();
    push_ext(&mut result, ext);
    result
}

/// `ext` with a leading `.`, added if missing
///
/// An empty extension becomes `"."`.
pub fn normalize_ext(ext: &str) -> String {
    let mut result = String::with_capacity(ext.len() + 1);
    push_ext(&mut result, ext);
    result
}

fn push_ext(buf: &mut String, ext: &str) {
    if !ext.starts_with(EXT_SEPARATOR) {
        buf.push(EXT_SEPARATOR);
    }
    buf.push_str(ext);
}

pub fn has_extension(platform: Platform, path: &str) -> bool {
    !take_extension(platform, path).is_empty()
}

/// Split a path at its first `.`, so every extension lands in the second half
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(
///     generic::split_extensions(Platform::Posix, "file.tar.gz"),
///     ("file", ".tar.gz")
/// );
/// assert_eq!(generic::split_extensions(Platform::Posix, "file"), ("file", ""));
/// ```
pub fn split_extensions(_platform: Platform, path: &str) -> (&str, &str) {
    match path.find(EXT_SEPARATOR) {
        Some(i) => path.split_at(i),
        None => (path, ""),
    }
}

pub fn take_extensions(platform: Platform, path: &str) -> &str {
    split_extensions(platform, path).1
}

pub fn drop_extensions(platform: Platform, path: &str) -> &str {
    split_extensions(platform, path).0
}

/// Split a path after its last separator
///
/// The directory half keeps the separator. With no separator the directory is
/// empty and the whole path is the file name.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::split_file_name(Platform::Posix, "dir/file.ext"), ("dir/", "file.ext"));
/// assert_eq!(generic::split_file_name(Platform::Posix, "file.ext"), ("", "file.ext"));
/// assert_eq!(generic::split_file_name(Platform::Posix, "dir/"), ("dir/", ""));
/// assert_eq!(generic::split_file_name(Platform::Windows, "c:\\a/b\\c"), ("c:\\a/b\\", "c"));
/// ```
pub fn split_file_name(platform: Platform, path: &str) -> (&str, &str) {
    match path.rfind(|c: char| platform.is_separator_char(c)) {
        // separators are ASCII, so the byte after one is a char boundary
        Some(i) => path.split_at(i + 1),
        None => ("", path),
    }
}

pub fn take_file_name(platform: Platform, path: &str) -> &str {
    split_file_name(platform, path).1
}

pub fn drop_file_name(platform: Platform, path: &str) -> &str {
    split_file_name(platform, path).0
}

pub fn replace_file_name(platform: Platform, path: &str, name: &str) -> String {
    format!("{}{}", drop_file_name(platform, path), name)
}

/// The file name without its last extension
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::take_base_name(Platform::Posix, "file/file.tar.gz"), "file.tar");
/// assert_eq!(generic::take_base_name(Platform::Posix, "file/"), "");
/// ```
pub fn take_base_name(platform: Platform, path: &str) -> &str {
    drop_extension(platform, take_file_name(platform, path))
}

/// Swap the base name, keeping the directory and the last extension
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(
///     generic::replace_base_name(Platform::Posix, "/dave/fred/bob.gz.tar", "new"),
///     "/dave/fred/new.tar"
/// );
/// assert_eq!(generic::replace_base_name(Platform::Posix, "bob", "new"), "new");
/// ```
pub fn replace_base_name(platform: Platform, path: &str, name: &str) -> String {
    let (dir, file) = split_file_name(platform, path);
    let ext = take_extension(platform, file);
    format!("{}{}{}", dir, name, ext)
}

/// The directory part with its trailing separator removed
///
/// A root directory is kept as it is.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::take_directory(Platform::Posix, "/foo/bar/baz"), "/foo/bar");
/// assert_eq!(generic::take_directory(Platform::Posix, "/foo"), "/");
/// assert_eq!(generic::take_directory(Platform::Posix, "foo"), "");
/// ```
pub fn take_directory(platform: Platform, path: &str) -> String {
    drop_trailing_path_separator(platform, drop_file_name(platform, path))
}

/// Move the file name of `path` under `dir`
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::replace_directory(Platform::Posix, "root/file.ext", "/directory/"), "/directory/file.ext");
/// assert_eq!(generic::replace_directory(Platform::Posix, "root/file.ext", "/directory"), "/directory/file.ext");
/// ```
pub fn replace_directory(platform: Platform, path: &str, dir: &str) -> String {
    combine(platform, dir, take_file_name(platform, path))
}

/// Join two paths with the canonical separator
///
/// When `path2` starts with a separator it is taken as absolute and returned
/// unchanged. Empty operands contribute nothing, and no separator is added
/// after one `path1` already ends with. Drive letters are not treated as
/// absolute.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::combine(Platform::Posix, "home", "bob"), "home/bob");
/// assert_eq!(generic::combine(Platform::Posix, "home", "/bob"), "/bob");
/// assert_eq!(generic::combine(Platform::Posix, "/", "bob"), "/bob");
/// assert_eq!(generic::combine(Platform::Windows, "C:\\foo", "bar"), "C:\\foo\\bar");
/// assert_eq!(generic::combine(Platform::Windows, "C:\\foo", "D:bar"), "C:\\foo\\D:bar");
/// ```
pub fn combine(platform: Platform, path1: &str, path2: &str) -> String {
    if starts_with_separator(platform, path2) || path1.is_empty() {
        return path2.to_string();
    }
    if path2.is_empty() {
        return path1.to_string();
    }

    let mut result = String::with_capacity(path1.len() + path2.len() + 1);
    result.push_str(path1);
    if !ends_with_separator(platform, path1) {
        result.push(platform.canonical_separator());
    }
    result.push_str(path2);
    result
}

/// Cut a path into segments that concatenate back to it
///
/// Each segment carries the run of separators that follows it, and a leading
/// run stands on its own so absolute paths keep their root. Repeated
/// separators are preserved, not collapsed.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::split_path(Platform::Posix, "/file/test"), vec!["/", "file/", "test"]);
/// assert_eq!(generic::split_path(Platform::Posix, "test//item/"), vec!["test//", "item/"]);
/// assert!(generic::split_path(Platform::Posix, "").is_empty());
/// ```
pub fn split_path(platform: Platform, path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_separator_run = false;

    for (i, c) in path.char_indices() {
        if platform.is_separator_char(c) {
            in_separator_run = true;
        } else if in_separator_run {
            segments.push(&path[start..i]);
            start = i;
            in_separator_run = false;
        }
    }
    if start < path.len() {
        segments.push(&path[start..]);
    }

    segments
}

/// Fold segments together with [`combine`], right to left
///
/// An absolute segment therefore discards everything to its left.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::join_path(Platform::Posix, &["/", "file/", "test"]), "/file/test");
/// assert_eq!(generic::join_path(Platform::Posix, &["a", "b", "c"]), "a/b/c");
/// assert_eq!(generic::join_path(Platform::Posix, &["a", "/b", "c"]), "/b/c");
/// assert_eq!(generic::join_path::<&str>(Platform::Posix, &[]), "");
/// ```
pub fn join_path<S: AsRef<str>>(platform: Platform, segments: &[S]) -> String {
    segments
        .iter()
        .rev()
        .fold(String::new(), |acc, segment| {
            combine(platform, segment.as_ref(), &acc)
        })
}

/// Whether the path ends in a separator, ignoring a bare root
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert!(generic::has_trailing_path_separator(Platform::Posix, "test/"));
/// assert!(!generic::has_trailing_path_separator(Platform::Posix, "test"));
/// assert!(!generic::has_trailing_path_separator(Platform::Posix, "/"));
/// assert!(generic::has_trailing_path_separator(Platform::Posix, "//"));
/// ```
pub fn has_trailing_path_separator(platform: Platform, path: &str) -> bool {
    ends_with_separator(platform, path) && !is_path_separator(platform, path)
}

/// Append the canonical separator unless [`has_trailing_path_separator`]
/// already holds
///
/// A bare root has no trailing separator by that test, so it gains one.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::add_trailing_path_separator(Platform::Posix, "test/rest"), "test/rest/");
/// assert_eq!(generic::add_trailing_path_separator(Platform::Posix, "test/"), "test/");
/// assert_eq!(generic::add_trailing_path_separator(Platform::Posix, "/"), "//");
/// ```
pub fn add_trailing_path_separator(platform: Platform, path: &str) -> String {
    let mut result = path.to_string();
    if !has_trailing_path_separator(platform, path) {
        result.push(platform.canonical_separator());
    }
    result
}

/// Remove the separators a path ends with
///
/// The last segment of [`split_path`] loses its separator run and the
/// segments are joined again. A path made only of separators shrinks to its
/// first one, so the root is a fixed point.
///
/// # Examples
/// ```
/// use path_algebra::{generic, Platform};
///
/// assert_eq!(generic::drop_trailing_path_separator(Platform::Posix, "file/test/"), "file/test");
/// assert_eq!(generic::drop_trailing_path_separator(Platform::Posix, "file//"), "file");
/// assert_eq!(generic::drop_trailing_path_separator(Platform::Posix, "/"), "/");
/// assert_eq!(generic::drop_trailing_path_separator(Platform::Posix, "file"), "file");
/// ```
pub fn drop_trailing_path_separator(platform: Platform, path: &str) -> String {
    if !has_trailing_path_separator(platform, path) {
        return path.to_string();
    }

    let mut segments = split_path(platform, path);
    let last = match segments.pop() {
        Some(last) => last,
        None => return path.to_string(),
    };

    let trimmed = last.trim_end_matches(|c: char| platform.is_separator_char(c));
    if trimmed.is_empty() {
        // only separators: keep the root
        return path[..1].to_string();
    }

    segments.push(trimmed);
    join_path(platform, &segments)
}

fn starts_with_separator(platform: Platform, path: &str) -> bool {
    path.starts_with(|c: char| platform.is_separator_char(c))
}

fn ends_with_separator(platform: Platform, path: &str) -> bool {
    path.ends_with(|c: char| platform.is_separator_char(c))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::generators::PathGenerators;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_function_is_total(
            platform in PathGenerators::platform(),
            path in PathGenerators::any_path(),
            other in PathGenerators::any_path()
        ) {
            let _ = split_extension(platform, &path);
            let _ = split_extensions(platform, &path);
            let _ = split_file_name(platform, &path);
            let _ = replace_base_name(platform, &path, &other);
            let _ = take_directory(platform, &path);
            let _ = replace_directory(platform, &path, &other);
            let _ = combine(platform, &path, &other);
            let _ = add_trailing_path_separator(platform, &path);
            let _ = drop_trailing_path_separator(platform, &path);
        }

        #[test]
        fn add_extension_then_take_extension(
            platform in PathGenerators::platform(),
            path in PathGenerators::any_path(),
            ext in PathGenerators::extension()
        ) {
            let added = add_extension(platform, &path, &ext);
            prop_assert_eq!(take_extension(platform, &added), format!(".{}", ext));
            prop_assert_eq!(drop_extension(platform, &added), path.as_str());

            let replaced = replace_extension(platform, &path, &ext);
            prop_assert_eq!(take_extension(platform, &replaced), normalize_ext(&ext));
        }

        #[test]
        fn split_file_name_then_concat_is_identity(
            platform in PathGenerators::platform(),
            path in PathGenerators::any_path()
        ) {
            let (dir, file) = split_file_name(platform, &path);
            prop_assert_eq!(format!("{}{}", dir, file), path.clone());
            prop_assert!(!file.contains(|c: char| platform.is_separator_char(c)));
        }

        #[test]
        fn split_extensions_covers_split_extension(
            platform in PathGenerators::platform(),
            path in PathGenerators::any_path()
        ) {
            let (all_root, all_ext) = split_extensions(platform, &path);
            let (root, ext) = split_extension(platform, &path);
            prop_assert_eq!(format!("{}{}", all_root, all_ext), path.clone());
            prop_assert!(all_root.len() <= root.len());
            prop_assert!(all_ext.ends_with(ext));
        }

        #[test]
        fn combine_with_file_name_rebuilds_path(
            platform in PathGenerators::platform(),
            path in PathGenerators::structured_path()
        ) {
            let (dir, file) = split_file_name(platform, &path);
            prop_assume!(!file.is_empty());
            prop_assert_eq!(combine(platform, dir, file), path.clone());
        }

        #[test]
        fn split_path_segments_are_nonempty(
            platform in PathGenerators::platform(),
            path in PathGenerators::any_path()
        ) {
            for segment in split_path(platform, &path) {
                prop_assert!(!segment.is_empty());
            }
        }

        #[test]
        fn take_directory_has_no_trailing_separator(
            platform in PathGenerators::platform(),
            path in PathGenerators::any_path()
        ) {
            let dir = take_directory(platform, &path);
            prop_assert!(!has_trailing_path_separator(platform, &dir));
        }
    }
}
