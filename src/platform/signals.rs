use super::{PlatformId, resolve};

/// The two ambient strings a host exposes about its client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    pub platform: String,
    pub user_agent: String,
}

impl Signals {
    pub fn new(platform: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn resolve(&self) -> PlatformId {
        resolve(&self.platform, &self.user_agent)
    }
}

/// Trait for supplying signals (useful for testing)
#[cfg_attr(test, mockall::automock)]
pub trait SignalSource: Send + Sync {
    fn signals(&self) -> Signals;
}

impl SignalSource for Signals {
    fn signals(&self) -> Signals {
        self.clone()
    }
}

/// Signals describing the machine this binary was compiled for.
///
/// The platform string mimics what a browser on that OS reports, the user
/// agent is left empty.
pub struct NativeSignals;

impl NativeSignals {
    fn platform_string() -> String {
        #[cfg(target_os = "windows")]
        {
            "Win32".to_string()
        }
        #[cfg(target_os = "macos")]
        {
            "MacIntel".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            format!("Linux {}", std::env::consts::ARCH)
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }
}

impl SignalSource for NativeSignals {
    fn signals(&self) -> Signals {
        Signals::new(Self::platform_string(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_signals_resolve_to_host_os() {
        let signals = NativeSignals.signals();

        assert!(!signals.platform.is_empty());
        assert!(signals.user_agent.is_empty());

        #[cfg(target_os = "windows")]
        assert_eq!(signals.resolve(), PlatformId::Windows);

        #[cfg(target_os = "macos")]
        assert_eq!(signals.resolve(), PlatformId::Macos);

        #[cfg(target_os = "linux")]
        assert_eq!(signals.resolve(), PlatformId::Linux);
    }

    #[test]
    fn test_signals_are_their_own_source() {
        let signals = Signals::new("MacIntel", "Mozilla/5.0");
        assert_eq!(signals.signals(), signals);
        assert_eq!(signals.resolve(), PlatformId::Macos);
    }

    #[test]
    fn test_mock_signal_source() {
        let mut source = MockSignalSource::new();
        source
            .expect_signals()
            .times(1)
            .returning(|| Signals::new("", "X11; Linux x86_64"));

        assert_eq!(source.signals().resolve(), PlatformId::Linux);
    }
}
