//! Navigation sections of the shop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A top-level panel of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Catalog,
    Search,
    About,
    Delivery,
    Faq,
    Contacts,
}

impl Section {
    /// Sections in navigation order.
    pub const ALL: [Section; 6] = [
        Section::Catalog,
        Section::Search,
        Section::About,
        Section::Delivery,
        Section::Faq,
        Section::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Catalog => "catalog",
            Section::Search => "search",
            Section::About => "about",
            Section::Delivery => "delivery",
            Section::Faq => "faq",
            Section::Contacts => "contacts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Catalog => "Catalog",
            Section::Search => "Search",
            Section::About => "About",
            Section::Delivery => "Delivery",
            Section::Faq => "FAQ",
            Section::Contacts => "Contacts",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Section {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::UnknownSection(s.to_string()))
    }
}
