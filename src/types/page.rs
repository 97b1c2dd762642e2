// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Pagination parameters for listing endpoints

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of items requested per page from a listing endpoint.
///
/// The mirror node caps page sizes at 100 and defaults to 25; values are
/// clamped into `1..=100` at construction so a request can never be rejected
/// for an out-of-range limit.
///
/// # Examples
///
/// ```
/// use mirrorscan::PageLimit;
///
/// assert_eq!(PageLimit::new(100).as_u32(), 100);
/// assert_eq!(PageLimit::new(5000).as_u32(), 100); // clamped to the API cap
/// assert_eq!(PageLimit::new(0).as_u32(), 1);
/// assert_eq!(PageLimit::default().as_u32(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageLimit(u32);

impl PageLimit {
    /// Largest page size the mirror node accepts.
    pub const MAX: Self = Self(100);

    /// Page size the mirror node uses when none is given.
    pub const DEFAULT: Self = Self(25);

    /// Create a page limit, clamping the value into `1..=100`.
    pub const fn new(limit: u32) -> Self {
        if limit == 0 {
            Self(1)
        } else if limit > Self::MAX.0 {
            Self::MAX
        } else {
            Self(limit)
        }
    }

    /// The limit as a plain integer.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sort direction for ordered sub-resources.
///
/// The mirror node orders listings descending by default; the token-balances
/// cache requests ascending order explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (`order=asc`)
    Asc,
    /// Descending order (`order=desc`), the API default
    #[default]
    Desc,
}

impl SortOrder {
    /// Query-string form of this order.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_limit_clamps() {
        assert_eq!(PageLimit::new(0), PageLimit::new(1));
        assert_eq!(PageLimit::new(101), PageLimit::MAX);
        assert_eq!(PageLimit::new(50).as_u32(), 50);
    }

    #[test]
    fn test_sort_order_query_form() {
        assert_eq!(SortOrder::Asc.as_str(), "asc");
        assert_eq!(SortOrder::Desc.as_str(), "desc");
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a constructed limit is always within the accepted range
            #[test]
            fn test_page_limit_always_in_range(limit: u32) {
                let page = PageLimit::new(limit);
                prop_assert!(page.as_u32() >= 1);
                prop_assert!(page.as_u32() <= 100);
            }
        }
    }
}
