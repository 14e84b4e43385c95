use crate::record::Record;

pub const UNKNOWN_SPONSOR: &str = "Unknown Sponsor";
pub const SPONSOR_PLACEHOLDER_IMAGE: &str = "sponsor-placeholder.jpg";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sponsor {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl Sponsor {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.owned_field("sponsor_name"),
            image: record.owned_field("sponsor_image"),
            description: record.owned_field("sponsor_description"),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_SPONSOR)
    }

    pub fn image_file(&self) -> &str {
        self.image.as_deref().unwrap_or(SPONSOR_PLACEHOLDER_IMAGE)
    }
}
