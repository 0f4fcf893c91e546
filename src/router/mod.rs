//! Platform-adaptive link routing
//!
//! The router resolves the visitor's platform once, then wires the page:
//! the primary call-to-action gets a platform label and a handler that
//! follows the detected platform's artifact, and every per-platform link
//! gets either its artifact URI or the placeholder plus an intercepting
//! handler. The page itself is only reached through [`BindableTarget`].

mod binding;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::catalog::DownloadCatalog;
use crate::platform::{PlatformId, Signals};

pub use binding::{
    Activation, ClickEvent, Host, LinkBinding, LinkState, PLACEHOLDER_HREF, unavailable_notice,
};

#[cfg(test)]
pub use binding::MockHost;

/// Fixed element identifiers of the landing page.
pub mod ids {
    use crate::platform::PlatformId;

    pub const PRIMARY_ACTION: &str = "primary-download";
    pub const PRIMARY_LABEL: &str = "download-text";
    pub const WINDOWS_LINK: &str = "download-windows";
    pub const MACOS_LINK: &str = "download-mac";
    pub const LINUX_LINK: &str = "download-linux";

    /// Dedicated static link for a platform.
    pub fn platform_link(platform: PlatformId) -> &'static str {
        match platform {
            PlatformId::Windows => WINDOWS_LINK,
            PlatformId::Macos => MACOS_LINK,
            PlatformId::Linux => LINUX_LINK,
        }
    }
}

/// Capabilities the router needs from a UI layer.
///
/// Implementations must fail on element ids they do not know; a missing
/// element means the page and the router are out of sync.
#[cfg_attr(test, mockall::automock)]
pub trait BindableTarget {
    fn label(&self, element: &str) -> Result<String>;
    fn set_label(&mut self, element: &str, text: &str) -> Result<()>;
    fn href(&self, element: &str) -> Result<String>;
    fn set_href(&mut self, element: &str, href: &str) -> Result<()>;

    /// Attach `binding` as the element's activation handler, replacing any
    /// previous one.
    fn bind(&mut self, element: &str, binding: LinkBinding) -> Result<()>;
}

/// Everything one initialization pass decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routing {
    pub platform: PlatformId,
    pub label: String,
    pub primary: LinkBinding,
    pub links: Vec<LinkBinding>,
}

impl Routing {
    /// Binding for a given element, primary action included.
    pub fn binding(&self, element: &str) -> Option<&LinkBinding> {
        std::iter::once(&self.primary)
            .chain(self.links.iter())
            .find(|b| b.element == element)
    }
}

/// Text of the primary call-to-action for a platform.
pub fn primary_label(platform: PlatformId) -> String {
    format!("Download for {}", platform.display_name())
}

/// Resolve the platform and wire every download element of `page`.
#[tracing::instrument(skip(page, catalog))]
pub fn initialize<T: BindableTarget + ?Sized>(
    page: &mut T,
    catalog: &DownloadCatalog,
    signals: &Signals,
) -> Result<Routing> {
    let platform = signals.resolve();
    info!("Detected platform: {}", platform);

    let label = primary_label(platform);
    page.set_label(ids::PRIMARY_LABEL, &label)
        .context("Failed to set primary download label")?;

    let primary = LinkBinding::new(
        ids::PRIMARY_ACTION,
        platform,
        LinkState::from_entry(catalog.entry(platform)?),
    );
    page.bind(ids::PRIMARY_ACTION, primary.clone())
        .context("Failed to bind primary download action")?;

    let mut links = Vec::with_capacity(PlatformId::ALL.len());
    for link_platform in PlatformId::ALL {
        let element = ids::platform_link(link_platform);
        let state = LinkState::from_entry(catalog.entry(link_platform)?);
        debug!("Binding {} -> {}", element, state.href());

        page.set_href(element, state.href())
            .with_context(|| format!("Failed to set target of {}", element))?;

        if state == LinkState::Pending {
            let binding = LinkBinding::new(element, link_platform, state);
            page.bind(element, binding.clone())
                .with_context(|| format!("Failed to bind {}", element))?;
            links.push(binding);
        } else {
            links.push(LinkBinding::new(element, link_platform, state));
        }
    }

    Ok(Routing {
        platform,
        label,
        primary,
        links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use mockall::predicate::{always, eq};

    fn partial_catalog() -> DownloadCatalog {
        DownloadCatalog::from_entries([
            (PlatformId::Windows, Some("https://a.test/A")),
            (PlatformId::Macos, None),
            (PlatformId::Linux, Some("https://a.test/C")),
        ])
        .unwrap()
    }

    #[test]
    fn test_initialize_calls_port_in_order() {
        let mut page = MockBindableTarget::new();
        let mut seq = mockall::Sequence::new();

        page.expect_set_label()
            .with(eq(ids::PRIMARY_LABEL), eq("Download for Linux"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        page.expect_bind()
            .with(eq(ids::PRIMARY_ACTION), always())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        page.expect_set_href()
            .with(eq(ids::WINDOWS_LINK), eq("https://a.test/A"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        page.expect_set_href()
            .with(eq(ids::MACOS_LINK), eq(PLACEHOLDER_HREF))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        page.expect_bind()
            .with(eq(ids::MACOS_LINK), always())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        page.expect_set_href()
            .with(eq(ids::LINUX_LINK), eq("https://a.test/C"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let routing = initialize(
            &mut page,
            &partial_catalog(),
            &Signals::new("Linux x86_64", ""),
        )
        .unwrap();

        assert_eq!(routing.platform, PlatformId::Linux);
        assert_eq!(
            routing.primary.state,
            LinkState::Available("https://a.test/C".into())
        );
    }

    #[test]
    fn test_missing_element_fails_loudly() {
        let mut page = MockBindableTarget::new();
        page.expect_set_label()
            .returning(|id, _| Err(anyhow::anyhow!("no element with id '{}'", id)));

        let err = initialize(&mut page, &partial_catalog(), &Signals::default()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("primary download label"));
        assert!(message.contains(ids::PRIMARY_LABEL));
    }

    #[test]
    fn test_missing_catalog_entry_is_an_error() {
        let catalog =
            DownloadCatalog::from_entries([(PlatformId::Windows, Some("https://a.test/A"))])
                .unwrap();

        let mut page = MockBindableTarget::new();
        page.expect_set_label().returning(|_, _| Ok(()));
        page.expect_bind().returning(|_, _| Ok(()));
        page.expect_set_href().returning(|_, _| Ok(()));

        let err = initialize(&mut page, &catalog, &Signals::new("Win32", "")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::MissingEntry(PlatformId::Macos))
        );
    }

    #[test]
    fn test_routing_binding_lookup() {
        let mut page = MockBindableTarget::new();
        page.expect_set_label().returning(|_, _| Ok(()));
        page.expect_bind().returning(|_, _| Ok(()));
        page.expect_set_href().returning(|_, _| Ok(()));

        let routing =
            initialize(&mut page, &partial_catalog(), &Signals::new("MacIntel", "")).unwrap();

        assert_eq!(routing.label, "Download for macOS");
        assert_eq!(
            routing.binding(ids::PRIMARY_ACTION).map(|b| &b.state),
            Some(&LinkState::Pending)
        );
        assert_eq!(
            routing.binding(ids::MACOS_LINK).map(|b| &b.state),
            Some(&LinkState::Pending)
        );
        assert!(routing.binding("nope").is_none());
    }

    #[test]
    fn test_primary_label() {
        assert_eq!(primary_label(PlatformId::Windows), "Download for Windows");
        assert_eq!(primary_label(PlatformId::Macos), "Download for macOS");
    }
}
