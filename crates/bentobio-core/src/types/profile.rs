//! Profile header and footer data.

use serde::{Deserialize, Serialize};

/// Identity shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    /// Large name under the avatar
    pub display_name: String,
    /// One-line description under the name
    pub tagline: String,
    /// Circular avatar image
    pub avatar_url: String,
    /// Short handle, e.g. "@muhfi"
    #[serde(default)]
    pub handle: String,
}

impl ProfileInfo {
    pub fn new(
        display_name: impl Into<String>,
        tagline: impl Into<String>,
        avatar_url: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            tagline: tagline.into(),
            avatar_url: avatar_url.into(),
            handle: handle.into(),
        }
    }
}

/// Credit line rendered below the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCredit {
    pub name: String,
}
