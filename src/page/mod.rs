//! In-memory landing page
//!
//! [`StaticPage`] is a small document model that implements
//! [`BindableTarget`]: a fixed set of elements addressed by id, each with an
//! optional text label, an optional navigation target and an optional
//! activation handler. The CLI routes against it and tests use it in place of
//! a browser DOM.

mod error;

use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;

use crate::router::{
    Activation, BindableTarget, ClickEvent, Host, LinkBinding, PLACEHOLDER_HREF, ids,
};

pub use error::PageError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub label: Option<String>,
    pub href: Option<String>,
    pub handler: Option<LinkBinding>,
}

/// Outcome of clicking an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    /// What the element's handler did, if it had one.
    pub activation: Option<Activation>,
    pub default_prevented: bool,
    /// Where the browser would go by default (anchor target).
    pub followed_href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
    elements: BTreeMap<String, Element>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The download section of the landing page, before routing.
    pub fn landing() -> Self {
        let mut page = Self::new();
        page.insert(ids::PRIMARY_ACTION, Element::default());
        page.insert(
            ids::PRIMARY_LABEL,
            Element {
                label: Some("Download".to_string()),
                ..Element::default()
            },
        );
        for element in [ids::WINDOWS_LINK, ids::MACOS_LINK, ids::LINUX_LINK] {
            page.insert(
                element,
                Element {
                    href: Some(PLACEHOLDER_HREF.to_string()),
                    ..Element::default()
                },
            );
        }
        page
    }

    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    pub fn element(&self, id: &str) -> Result<&Element, PageError> {
        self.elements
            .get(id)
            .ok_or_else(|| PageError::UnknownElement(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, PageError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::UnknownElement(id.to_string()))
    }

    /// Simulate a user click on `id`.
    ///
    /// The bound handler runs first; if it did not prevent the default
    /// action and the element is an anchor with a real target, the host
    /// navigates there.
    #[tracing::instrument(skip(self, host))]
    pub fn click(&self, id: &str, host: &dyn Host) -> Result<Click, PageError> {
        let element = self.element(id)?;
        let mut event = ClickEvent::new();

        let activation = element
            .handler
            .as_ref()
            .map(|handler| handler.activate(&mut event, host));

        let followed_href = match (&element.href, event.default_prevented()) {
            (Some(href), false) if href != PLACEHOLDER_HREF && activation.is_none() => {
                debug!("Following {} -> {}", id, href);
                host.navigate(href);
                Some(href.clone())
            }
            _ => None,
        };

        if activation.is_none() && followed_href.is_none() {
            debug!("Click on {} had no effect", id);
        }

        Ok(Click {
            activation,
            default_prevented: event.default_prevented(),
            followed_href,
        })
    }
}

impl BindableTarget for StaticPage {
    fn label(&self, element: &str) -> Result<String> {
        Ok(self.element(element)?.label.clone().unwrap_or_default())
    }

    fn set_label(&mut self, element: &str, text: &str) -> Result<()> {
        self.element_mut(element)?.label = Some(text.to_string());
        Ok(())
    }

    fn href(&self, element: &str) -> Result<String> {
        let el = self.element(element)?;
        el.href
            .clone()
            .ok_or_else(|| PageError::NotAnAnchor(element.to_string()).into())
    }

    fn set_href(&mut self, element: &str, href: &str) -> Result<()> {
        self.element_mut(element)?.href = Some(href.to_string());
        Ok(())
    }

    fn bind(&mut self, element: &str, binding: LinkBinding) -> Result<()> {
        self.element_mut(element)?.handler = Some(binding);
        Ok(())
    }
}
