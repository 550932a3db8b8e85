#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Filing category labels and category-level lookup.
pub mod category;
/// Centralized form-code tables and category ordering.
pub mod constants;
/// Typed form-code wrapper.
pub mod forms;
/// Combined keep list, membership tests, and filtering helpers.
pub mod keep;

mod errors;

pub use category::{FilingCategory, ALL_CATEGORIES, PERIODIC_CATEGORIES};
pub use errors::FormTableError;
pub use forms::FormCode;
pub use keep::{
    category_of, is_kept, keep_list, require_kept, retain_kept, FilterSummary, KEEP_LIST,
};
