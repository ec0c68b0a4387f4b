//! Feed filter inputs.

use chrono::NaiveDate;

use crate::domain::TimeRange;

/// The match-all sentinel used by the Hebrew UI.
pub const ALL_SENTINEL_HE: &str = "הכל";

/// The match-all sentinel in ASCII, accepted from API clients.
pub const ALL_SENTINEL_EN: &str = "all";

/// Destination filter: the sentinel, or a free-text substring query.
///
/// # Examples
///
/// ```
/// use tremp_server::feed::DestinationFilter;
///
/// assert!(DestinationFilter::parse("הכל").is_all());
/// assert!(DestinationFilter::parse("all").is_all());
/// assert!(DestinationFilter::parse("").is_all());
/// assert!(!DestinationFilter::parse("ירושלים").is_all());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationFilter {
    /// Match everything.
    All,
    /// Substring match against a posting's places and notes.
    Query(String),
}

impl DestinationFilter {
    /// Interpret raw filter text: empty or a sentinel means match-all.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == ALL_SENTINEL_HE || trimmed == ALL_SENTINEL_EN {
            Self::All
        } else {
            Self::Query(trimmed.to_string())
        }
    }

    /// True for the match-all filter.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Does any of the given fields contain the query?
    ///
    /// Fields are checked as-is: the board's place names are short
    /// free-text strings and matching is a plain substring test.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        match self {
            Self::All => true,
            Self::Query(q) => fields.into_iter().any(|f| f.contains(q.as_str())),
        }
    }
}

/// All inputs the feed builder filters by.
///
/// Assembled per request from query parameters; never persisted.
#[derive(Debug, Clone)]
pub struct FeedFilter {
    /// Destination (or free-text) filter.
    pub destination: DestinationFilter,
    /// The calendar day being browsed.
    pub date: NaiveDate,
    /// Inclusive time-of-day window.
    pub window: TimeRange,
}

impl FeedFilter {
    /// Create a filter from its parts.
    pub fn new(destination: DestinationFilter, date: NaiveDate, window: TimeRange) -> Self {
        Self {
            destination,
            date,
            window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_match_all() {
        assert_eq!(DestinationFilter::parse("הכל"), DestinationFilter::All);
        assert_eq!(DestinationFilter::parse("all"), DestinationFilter::All);
        assert_eq!(DestinationFilter::parse("  הכל  "), DestinationFilter::All);
        assert_eq!(DestinationFilter::parse(""), DestinationFilter::All);
        assert_eq!(DestinationFilter::parse("   "), DestinationFilter::All);
    }

    #[test]
    fn free_text_is_a_query() {
        assert_eq!(
            DestinationFilter::parse("ירושלים"),
            DestinationFilter::Query("ירושלים".to_string())
        );
    }

    #[test]
    fn all_matches_anything() {
        let f = DestinationFilter::All;
        assert!(f.matches_any(["whatever"]));
        assert!(f.matches_any(std::iter::empty::<&str>()));
    }

    #[test]
    fn query_is_substring_match() {
        let f = DestinationFilter::parse("ירושלים");
        assert!(f.matches_any(["ירושלים"]));
        assert!(f.matches_any(["מעלה עמוס", "דרך ירושלים"]));
        assert!(!f.matches_any(["ביתר עילית"]));
        assert!(!f.matches_any(std::iter::empty::<&str>()));
    }
}
