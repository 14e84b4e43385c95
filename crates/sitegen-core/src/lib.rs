pub mod domain;
pub mod error;
pub mod record;
pub mod rules;

pub use domain::*;
pub use error::CoreError;
pub use record::{normalize_key, parse, parse_block, parse_simple, ParseMode, Record};
pub use rules::*;
