//! Shared value normalizers: date parsing and calendar arithmetic, numeric
//! and percent coercion, string normalization, and fuzzy similarity. All of
//! them are total over malformed input; only the duration helpers surface an
//! explicit error.

pub mod datetime;
pub mod fuzzy;
pub mod numeric;
pub mod text;

pub use datetime::{
    DateError, SUPPORTED_FORMATS, days_between, days_between_dates, days_since,
    months_between, months_between_dates, months_since, parse_date, parse_date_str,
};
pub use fuzzy::{fuzzy_ratio, sequence_ratio, token_set_ratio};
pub use numeric::{as_f64, as_i64, to_percent};
pub use text::{casefold_value, is_affirmative, normalize, normalize_value, value_to_string};
