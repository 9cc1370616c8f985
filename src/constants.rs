//! Constants shared by the matchers.

/// Sentinel used for a name or OS that could not be determined.
pub const UNKNOWN: &str = "unknown";

/// Literal that opens every Mozilla-like user agent string.
pub const MOZILLA_5_PREFIX: &str = "Mozilla/5.0 (";

/// OS name for Linux based desktops.
pub const OS_GNU_LINUX: &str = "GNU/Linux";

/// OS name for `FreeBSD`.
pub const OS_FREEBSD: &str = "FreeBSD";

/// OS name for `OpenBSD`.
pub const OS_OPENBSD: &str = "OpenBSD";

/// OS name for `NetBSD`.
pub const OS_NETBSD: &str = "NetBSD";

/// OS name for Maemo.
pub const OS_MAEMO: &str = "Maemo";

/// OS name for Chrome OS.
pub const OS_CROS: &str = "CrOS";

/// OS name for Microsoft Windows.
pub const OS_WINDOWS: &str = "Windows";

/// OS name for desktop Apple platforms.
pub const OS_MAC_OS_X: &str = "Mac OS X";

/// OS name for `iPhone`, `iPad` and `iPod`.
pub const OS_IOS: &str = "iOS";

/// OS name for Android.
pub const OS_ANDROID: &str = "Android";

/// OS name for Firefox OS devices.
pub const OS_FIREFOX_OS: &str = "Firefox OS";
