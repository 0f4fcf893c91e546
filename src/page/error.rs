/// Errors raised by [`super::StaticPage`] element lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// No element carries this id; the page and the router disagree
    UnknownElement(String),
    /// The element exists but has no navigation target
    NotAnAnchor(String),
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::UnknownElement(id) => write!(f, "No element with id '{}' on the page", id),
            PageError::NotAnAnchor(id) => write!(f, "Element '{}' is not a link", id),
        }
    }
}

impl std::error::Error for PageError {}
