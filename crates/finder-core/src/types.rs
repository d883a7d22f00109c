//! Company records and the search service wire types.
//!
//! Company records are passed through from the service untouched. Every
//! nested field is optional on the wire, so the accessors used for display
//! fall back to [`UNNAMED_COMPANY`] and [`UNKNOWN_CITY`].

use serde::{Deserialize, Serialize};

/// Placeholder shown for a company without any name record.
pub const UNNAMED_COMPANY: &str = "Unnamed company";

/// Placeholder shown for a company without an address city.
pub const UNKNOWN_CITY: &str = "Unknown city";

/// A company record from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    /// Directory identifier, used as the list key.
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Name records, most relevant first.
    #[serde(default)]
    pub names: Vec<CompanyName>,

    /// Address records, most relevant first.
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl Company {
    /// Creates a company with a single name and a single city address.
    ///
    /// # Examples
    ///
    /// ```
    /// use finder_core::Company;
    ///
    /// let company = Company::new("1234567-8", "Oy Example Ab", "Helsinki");
    /// assert_eq!(company.display_name(), "Oy Example Ab");
    /// assert_eq!(company.display_city(), "Helsinki");
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: vec![CompanyName {
                name: Some(name.into()),
            }],
            addresses: vec![Address {
                post_offices: vec![PostOffice {
                    city: Some(city.into()),
                }],
                ..Default::default()
            }],
        }
    }

    /// The first name record, or [`UNNAMED_COMPANY`].
    pub fn display_name(&self) -> &str {
        self.names
            .first()
            .and_then(|n| n.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNNAMED_COMPANY)
    }

    /// The city of the first post office of the first address, or
    /// [`UNKNOWN_CITY`].
    pub fn display_city(&self) -> &str {
        self.addresses
            .first()
            .and_then(|a| a.post_offices.first())
            .and_then(|p| p.city.as_deref())
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNKNOWN_CITY)
    }
}

/// A single name record of a company.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyName {
    /// Registered name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A postal address of a company.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street name.
    #[serde(default)]
    pub street: Option<String>,

    /// Building number on the street.
    #[serde(default)]
    pub building_number: Option<String>,

    /// Postal code.
    #[serde(default)]
    pub post_code: Option<String>,

    /// Post offices serving this address, most relevant first.
    #[serde(default)]
    pub post_offices: Vec<PostOffice>,
}

/// A post office, naming the city of an address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostOffice {
    /// City name.
    #[serde(default)]
    pub city: Option<String>,
}

/// Parameters of one search service request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    /// City name to search by.
    pub city: String,

    /// Requested page, 1-indexed.
    pub page: u32,
}

impl SearchQuery {
    /// Creates a new query.
    pub fn new(city: impl Into<String>, page: u32) -> Self {
        Self {
            city: city.into(),
            page,
        }
    }
}

/// One page of search results as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchPage {
    /// Companies on this page.
    pub companies: Vec<Company>,

    /// Total number of matching companies across all pages.
    pub total: u64,
}

impl SearchPage {
    /// Creates a page from its companies and the overall match count.
    pub fn new(companies: Vec<Company>, total: u64) -> Self {
        Self { companies, total }
    }

    /// An empty page with zero matches.
    pub fn empty() -> Self {
        Self::default()
    }
}

// ============================================================================
// Tests
// ============================================================================
