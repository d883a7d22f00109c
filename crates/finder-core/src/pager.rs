//! Compacted page-index computation.
//!
//! Instead of one button per page, the pagination strip shows the first
//! page, the last page, and a three-page window around the current page,
//! with [`PageMarker::Ellipsis`] standing in for the elided runs:
//!
//! ```text
//! total_pages = 20
//!
//!   page  1:  1 2 … 20
//!   page 10:  1 … 9 10 11 … 20
//!   page 20:  1 … 19 20
//! ```
//!
//! Seven or fewer pages are always listed in full.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest page count that is shown without elision.
pub const MAX_UNCOMPACTED_PAGES: u32 = 7;

/// A unit of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMarker {
    /// A concrete, 1-indexed page.
    Page(u32),
    /// One or more elided pages.
    Ellipsis,
}

impl PageMarker {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Page(p) => Some(*p),
            Self::Ellipsis => None,
        }
    }

    /// Returns `true` for [`PageMarker::Ellipsis`].
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(p) => write!(f, "{p}"),
            Self::Ellipsis => write!(f, "…"),
        }
    }
}

/// Compute the pagination strip for `page` out of `total_pages`.
///
/// - `total_pages <= 1`: no strip at all.
/// - `total_pages <= 7`: every page.
/// - otherwise: `1`, an ellipsis when `page > 3`, the window
///   `max(2, page - 1) ..= min(total_pages - 1, page + 1)`, an ellipsis when
///   `page < total_pages - 2`, and `total_pages`.
///
/// # Examples
///
/// ```
/// use finder_core::pager::{compact, PageMarker::{Ellipsis, Page}};
///
/// assert_eq!(compact(1, 1), vec![]);
/// assert_eq!(
///     compact(10, 20),
///     vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
/// );
/// ```
pub fn compact(page: u32, total_pages: u32) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return Vec::new();
    }

    if total_pages <= MAX_UNCOMPACTED_PAGES {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = Vec::with_capacity(MAX_UNCOMPACTED_PAGES as usize);
    markers.push(PageMarker::Page(1));

    if page > 3 {
        markers.push(PageMarker::Ellipsis);
    }

    let start = page.saturating_sub(1).max(2);
    let end = page.saturating_add(1).min(total_pages - 1);
    markers.extend((start..=end).map(PageMarker::Page));

    if page < total_pages - 2 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Page(total_pages));
    markers
}

/// Number of pages needed to show `total` items, `page_size` per page.
///
/// Zero items need zero pages. A zero `page_size` is treated as one item per
/// page.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX)
}

// ============================================================================
// Tests
// ============================================================================
