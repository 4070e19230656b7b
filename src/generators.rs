//! Property test generators for path algebra
//!
//! Strategies here lean toward the inputs the algebra has to be careful with:
//! repeated separators, dots in directory names, mixed Windows separators,
//! bare roots and the empty string.

use crate::platform::Platform;
use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Any of the three platforms
    pub fn platform() -> impl Strategy<Value = Platform> {
        prop_oneof![
            Just(Platform::Posix),
            Just(Platform::Windows),
            Just(Platform::Url),
        ]
    }

    /// A segment without separators, possibly dotted, possibly empty
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_ .-]{0,12}"
    }

    /// A file extension without a leading dot
    pub fn extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("rs".to_string()),
            Just("txt".to_string()),
            Just("gz".to_string()),
            Just("tar".to_string()),
            Just("json".to_string()),
            "[a-z0-9]{1,5}",
        ]
    }

    /// A separator recognized somewhere, not necessarily on the target platform
    pub fn separator() -> impl Strategy<Value = &'static str> {
        prop_oneof![4 => Just("/"), 2 => Just("\\"), 1 => Just("//")]
    }

    /// A path built from segments and separators
    pub fn structured_path() -> impl Strategy<Value = String> {
        (
            prop::option::of(Self::separator()),
            prop::collection::vec((Self::segment(), Self::separator()), 0..5),
            Self::segment(),
        )
            .prop_map(|(root, parts, last)| {
                let mut path = root.unwrap_or_default().to_string();
                for (segment, separator) in parts {
                    path.push_str(&segment);
                    path.push_str(separator);
                }
                path.push_str(&last);
                path
            })
    }

    /// Degenerate inputs every function has to survive
    pub fn edge_case_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("/".to_string()),
            Just("\\".to_string()),
            Just("//".to_string()),
            Just(".".to_string()),
            Just("..".to_string()),
            Just(".hidden".to_string()),
            Just("file.".to_string()),
            Just("dir.d/file".to_string()),
            Just("test//item/".to_string()),
            Just("C:".to_string()),
            Just("C:\\".to_string()),
            Just("файл/文件.txt".to_string()),
        ]
    }

    /// Any path, including arbitrary text
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Self::structured_path(),
            2 => Self::edge_case_path(),
            1 => any::<String>(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segments_have_no_separators(segment in PathGenerators::segment()) {
            prop_assert!(!segment.contains('/'));
            prop_assert!(!segment.contains('\\'));
        }

        #[test]
        fn extensions_have_no_dots(ext in PathGenerators::extension()) {
            prop_assert!(!ext.is_empty());
            prop_assert!(!ext.contains('.'));
        }

        #[test]
        fn generators_dont_panic(
            _platform in PathGenerators::platform(),
            _any_path in PathGenerators::any_path()
        ) {
        }
    }
}
