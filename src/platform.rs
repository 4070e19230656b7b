//! Target platform tags
//!
//! A [`Platform`] selects which separators the algebra recognizes. It carries
//! no other behavior.

use crate::error::{PathError, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The platform whose separator conventions a path follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// `/` only
    #[default]
    Posix,
    /// `\` (canonical) and `/`
    Windows,
    /// `/` only, kept apart from [`Platform::Posix`] for call-site clarity
    Url,
}

const SLASH: &[&str] = &["/"];
const WINDOWS_SEPARATORS: &[&str] = &["\\", "/"];

impl Platform {
    /// Every platform, in declaration order
    pub const ALL: [Platform; 3] = [Platform::Posix, Platform::Windows, Platform::Url];

    /// Separators recognized on this platform. The first one is canonical.
    pub const fn separators(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => WINDOWS_SEPARATORS,
            Platform::Posix | Platform::Url => SLASH,
        }
    }

    /// The separator used when joining paths
    pub const fn canonical_separator(self) -> char {
        match self {
            Platform::Windows => '\\',
            Platform::Posix | Platform::Url => '/',
        }
    }

    /// Whether `c` delimits path segments on this platform
    pub const fn is_separator_char(self, c: char) -> bool {
        match self {
            Platform::Windows => c == '\\' || c == '/',
            Platform::Posix | Platform::Url => c == '/',
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Posix => "posix",
            Platform::Windows => "windows",
            Platform::Url => "url",
        }
    }

    /// Map a host platform identifier to a platform
    ///
    /// Identifiers starting with `win` in any case (`windows`, `Win32NT`,
    /// `win32`) select [`Platform::Windows`]. Anything else, including a
    /// missing or empty identifier, selects [`Platform::Posix`].
    ///
    /// # Examples
    /// ```
    /// use path_algebra::Platform;
    ///
    /// assert_eq!(Platform::from_host_identifier(Some("windows")), Platform::Windows);
    /// assert_eq!(Platform::from_host_identifier(Some("linux")), Platform::Posix);
    /// assert_eq!(Platform::from_host_identifier(None), Platform::Posix);
    /// ```
    pub fn from_host_identifier(identifier: Option<&str>) -> Self {
        let is_windows = identifier
            .and_then(|id| id.as_bytes().get(..3))
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"win"));

        if is_windows {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PathError::UnknownPlatform {
                name: s.to_string(),
            })
    }
}
