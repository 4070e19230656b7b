//! Host platform detection
//!
//! The host is asked for its platform identifier once per process. The
//! answer is mapped with [`Platform::from_host_identifier`] and cached for the
//! lifetime of the program.

use crate::platform::Platform;
use std::sync::LazyLock;
use tracing::debug;

static CURRENT_PLATFORM: LazyLock<Platform> = LazyLock::new(|| {
    let identifier = host_identifier();
    let platform = Platform::from_host_identifier(identifier);
    debug!(
        identifier = identifier.unwrap_or("<none>"),
        %platform,
        "detected host platform"
    );
    platform
});

/// The platform of the running host
///
/// The first call inspects the host; every later call returns the cached
/// value. Safe to call from any thread.
///
/// # Examples
/// ```
/// use path_algebra::{current_platform, Platform};
///
/// let platform = current_platform();
/// assert_ne!(platform, Platform::Url);
/// assert_eq!(platform, current_platform());
/// ```
pub fn current_platform() -> Platform {
    *CURRENT_PLATFORM
}

fn host_identifier() -> Option<&'static str> {
    Some(std::env::consts::OS).filter(|os| !os.is_empty())
}
