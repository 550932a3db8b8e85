use std::sync::LazyLock;

use tracing::debug;

use crate::category::{FilingCategory, ALL_CATEGORIES};
use crate::errors::FormTableError;
use crate::forms::FormCode;

pub use crate::constants::keep::SKIP_UNLISTED_MSG;

/// Combined keep list: every category block concatenated in declaration order.
///
/// No deduplication is applied. A code declared in two categories would
/// appear twice, so consumers may rely on counts as well as membership.
pub static KEEP_LIST: LazyLock<Vec<FormCode>> = LazyLock::new(|| {
    ALL_CATEGORIES
        .iter()
        .flat_map(|category| category.forms().iter().copied())
        .collect()
});

/// Iterate the combined keep list in declaration order.
pub fn keep_list() -> impl Iterator<Item = FormCode> {
    KEEP_LIST.iter().copied()
}

/// Exact membership test against the combined keep list.
///
/// No normalization is performed; `"10-k"` does not match `"10-K"`.
pub fn is_kept(code: &str) -> bool {
    KEEP_LIST.iter().any(|form| form.as_str() == code)
}

/// First category declaring `code`, searched in category declaration order.
pub fn category_of(code: &str) -> Option<FilingCategory> {
    ALL_CATEGORIES
        .into_iter()
        .find(|category| category.forms().iter().any(|form| form.as_str() == code))
}

/// Look up `code` on the keep list, returning the canonical typed form code.
pub fn require_kept(code: &str) -> Result<FormCode, FormTableError> {
    keep_list()
        .find(|form| form.as_str() == code)
        .ok_or_else(|| FormTableError::UnknownForm(code.to_string()))
}

/// Tallies from one keep-list filtering pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Codes inspected.
    pub seen: usize,
    /// Codes present on the keep list.
    pub kept: usize,
    /// Codes dropped as unlisted.
    pub dropped: usize,
}

/// Filter raw form codes through the keep list, preserving input order.
///
/// Dropped codes are logged at debug level.
pub fn retain_kept<'a, I>(codes: I) -> (Vec<&'a str>, FilterSummary)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut summary = FilterSummary::default();
    let mut kept = Vec::new();
    for code in codes {
        summary.seen += 1;
        if is_kept(code) {
            summary.kept += 1;
            kept.push(code);
        } else {
            summary.dropped += 1;
            debug!(code, "{}", SKIP_UNLISTED_MSG);
        }
    }
    (kept, summary)
}
