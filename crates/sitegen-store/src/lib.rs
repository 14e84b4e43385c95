pub mod data;
pub mod error;
pub mod pages;
pub mod paths;

pub use data::{list_data_files, load_domain, read_record, DataFile, ParsedFile};
pub use error::{Result, StoreError};
pub use pages::{patch_page, replace_page, write_page, PatchOutcome};
