//! Platform classification
//!
//! This module turns the two ambient signals a host exposes (a low-level
//! platform identifier and a user-agent string) into exactly one
//! [`PlatformId`]. Signals are injected by the caller so that resolution
//! stays pure.

mod signals;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use signals::{NativeSignals, SignalSource, Signals};

/// Operating-system category a visitor is routed to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    #[default]
    Windows,
    #[serde(alias = "mac")]
    Macos,
    Linux,
}

impl PlatformId {
    /// All categories, in resolution priority order.
    pub const ALL: [PlatformId; 3] = [PlatformId::Windows, PlatformId::Macos, PlatformId::Linux];

    /// Stable lowercase key, as used in catalog files.
    pub fn key(self) -> &'static str {
        match self {
            PlatformId::Windows => "windows",
            PlatformId::Macos => "macos",
            PlatformId::Linux => "linux",
        }
    }

    /// Human-readable name shown on the primary call-to-action.
    pub fn display_name(self) -> &'static str {
        match self {
            PlatformId::Windows => "Windows",
            PlatformId::Macos => "macOS",
            PlatformId::Linux => "Linux",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlatformId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(PlatformId::Windows),
            "macos" | "mac" => Ok(PlatformId::Macos),
            "linux" => Ok(PlatformId::Linux),
            other => anyhow::bail!(
                "Unknown platform '{}'. Expected one of: windows, macos, linux.",
                other
            ),
        }
    }
}

/// Display name for an arbitrary platform key.
///
/// Unknown keys fall back to the Windows name, the same policy [`resolve`]
/// applies to unrecognized signals.
pub fn display_name_for(key: &str) -> &'static str {
    key.parse::<PlatformId>()
        .unwrap_or_default()
        .display_name()
}

/// Classify a client from its platform identifier and user-agent.
///
/// Matching is a case-insensitive substring search over both signals, first
/// rule wins: `win`, then `mac`, then `linux`. Anything else resolves to
/// [`PlatformId::Windows`].
#[tracing::instrument]
pub fn resolve(platform_signal: &str, user_agent: &str) -> PlatformId {
    let platform_signal = platform_signal.to_lowercase();
    let user_agent = user_agent.to_lowercase();
    let either = |needle: &str| platform_signal.contains(needle) || user_agent.contains(needle);

    let resolved = if either("win") {
        PlatformId::Windows
    } else if either("mac") {
        PlatformId::Macos
    } else if either("linux") {
        PlatformId::Linux
    } else {
        log::debug!("No platform matched, defaulting to {}", PlatformId::default());
        PlatformId::default()
    };

    log::debug!("Resolved platform: {}", resolved);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const FIREFOX_LINUX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
    const EDGE_WINDOWS_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";

    #[test]
    fn test_resolve_real_browsers() {
        assert_eq!(resolve("Win32", EDGE_WINDOWS_UA), PlatformId::Windows);
        assert_eq!(resolve("MacIntel", CHROME_MAC_UA), PlatformId::Macos);
        assert_eq!(resolve("Linux x86_64", FIREFOX_LINUX_UA), PlatformId::Linux);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("WIN32", ""), PlatformId::Windows);
        assert_eq!(resolve("win32", ""), PlatformId::Windows);
        assert_eq!(resolve("", "MACINTOSH"), PlatformId::Macos);
        assert_eq!(resolve("LiNuX", ""), PlatformId::Linux);
    }

    #[test]
    fn test_resolve_either_signal_matches() {
        assert_eq!(resolve("", "windows phone"), PlatformId::Windows);
        assert_eq!(resolve("macintel", ""), PlatformId::Macos);
        assert_eq!(resolve("", "x11; linux"), PlatformId::Linux);
    }

    #[test]
    fn test_resolve_priority_order() {
        // "win" beats "mac" even when both appear
        assert_eq!(resolve("mac", "win"), PlatformId::Windows);
        assert_eq!(resolve("macwin", ""), PlatformId::Windows);
        // "mac" beats "linux"
        assert_eq!(resolve("linux", "mac"), PlatformId::Macos);
    }

    #[test]
    fn test_resolve_default_fallback() {
        for (platform, ua) in [("", ""), ("freebsd", ""), ("", "freebsd"), ("iPhone", "CPU OS")] {
            assert_eq!(resolve(platform, ua), PlatformId::Windows);
            // deterministic on repeat
            assert_eq!(resolve(platform, ua), resolve(platform, ua));
        }
    }

    #[test]
    fn test_resolve_is_total_over_odd_input() {
        let inputs = ["\u{0}", "ß", "\u{130}", "     ", "🪟🍎🐧"];
        for a in inputs {
            for b in inputs {
                let p = resolve(a, b);
                assert!(PlatformId::ALL.contains(&p));
            }
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PlatformId::Windows.display_name(), "Windows");
        assert_eq!(PlatformId::Macos.display_name(), "macOS");
        assert_eq!(PlatformId::Linux.display_name(), "Linux");
    }

    #[test]
    fn test_display_name_for_unknown_key_falls_back() {
        assert_eq!(display_name_for("mac"), "macOS");
        assert_eq!(display_name_for("linux"), "Linux");
        assert_eq!(display_name_for("beos"), "Windows");
        assert_eq!(display_name_for(""), "Windows");
    }

    #[test]
    fn test_from_str_accepts_legacy_mac_key() {
        assert_eq!("mac".parse::<PlatformId>().unwrap(), PlatformId::Macos);
        assert_eq!("MacOS".parse::<PlatformId>().unwrap(), PlatformId::Macos);
        assert!("solaris".parse::<PlatformId>().is_err());
    }

    #[test]
    fn test_serde_keys() {
        assert_eq!(serde_json::to_string(&PlatformId::Macos).unwrap(), "\"macos\"");
        let p: PlatformId = serde_json::from_str("\"mac\"").unwrap();
        assert_eq!(p, PlatformId::Macos);
    }
}
