use log::{debug, info};

use crate::platform::PlatformId;

/// Navigation target given to links whose artifact is pending.
pub const PLACEHOLDER_HREF: &str = "#";

/// What the host can do in response to an activation.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Leave the page for `uri`.
    fn navigate(&self, uri: &str);

    /// Show a blocking notice to the user (alert-equivalent).
    fn notify(&self, message: &str);
}

/// Activation event passed to a bound handler.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the element's own navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Whether a link's artifact has been published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Available(String),
    Pending,
}

impl LinkState {
    pub fn from_entry(uri: Option<&str>) -> Self {
        match uri {
            Some(uri) => LinkState::Available(uri.to_string()),
            None => LinkState::Pending,
        }
    }

    /// The navigation target an anchor in this state carries.
    pub fn href(&self) -> &str {
        match self {
            LinkState::Available(uri) => uri,
            LinkState::Pending => PLACEHOLDER_HREF,
        }
    }
}

/// Result of activating a [`LinkBinding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigated(String),
    Notified(PlatformId),
}

/// A page element wired to one platform's download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBinding {
    pub element: String,
    pub platform: PlatformId,
    pub state: LinkState,
}

impl LinkBinding {
    pub fn new(element: impl Into<String>, platform: PlatformId, state: LinkState) -> Self {
        Self {
            element: element.into(),
            platform,
            state,
        }
    }

    /// Run the activation handler.
    ///
    /// Available links navigate. Pending links prevent the default action
    /// and show the unavailable notice; their state never changes, so every
    /// click shows the notice again.
    #[tracing::instrument(skip(self, event, host), fields(element = %self.element))]
    pub fn activate(&self, event: &mut ClickEvent, host: &dyn Host) -> Activation {
        match &self.state {
            LinkState::Available(uri) => {
                info!("Navigating to {} download: {}", self.platform, uri);
                host.navigate(uri);
                Activation::Navigated(uri.clone())
            }
            LinkState::Pending => {
                debug!("{} download is pending, intercepting click", self.platform);
                event.prevent_default();
                host.notify(&unavailable_notice(self.platform));
                Activation::Notified(self.platform)
            }
        }
    }
}

/// Notice shown when a platform's artifact is not published yet.
pub fn unavailable_notice(platform: PlatformId) -> String {
    format!(
        "The {} download is not yet available. Please check back soon!",
        platform.display_name()
    )
}
