//! Page and title value types

use std::fmt;

/// Title of the page served at `/`
pub const FRONT_PAGE: &str = "FrontPage";

/// A validated page title: one or more ASCII letters or digits.
///
/// The only way to build a `Title` is [`Title::parse`], so anything holding
/// one can rely on it being a legal path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn view_path(&self) -> String {
        format!("/view/{}", self.0)
    }

    pub fn edit_path(&self) -> String {
        format!("/edit/{}", self.0)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One wiki document. The body is stored as given, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Title,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    /// Page shown by the editor when nothing is stored yet
    pub fn empty(title: Title) -> Self {
        Self::new(title, Vec::new())
    }
}
