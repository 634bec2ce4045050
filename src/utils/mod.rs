pub mod helper;

pub use helper::{format_signed_pct, format_usd, normalize_base_url, truncate_string};
