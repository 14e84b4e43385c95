use crate::domain::image::ImageStyle;
use crate::record::Record;

pub const UNKNOWN_ALUMNI: &str = "Unknown Alumni";
pub const ALUMNI_PLACEHOLDER_IMAGE: &str = "alumni-placeholder.jpg";
const IMAGE_CLASS: &str = "alumni-img";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alumnus {
    pub name: Option<String>,
    pub image: Option<String>,
    pub year: Option<String>,
    pub position: Option<String>,
    pub story: Option<String>,
    pub image_offset: Option<String>,
    pub image_zoom: Option<String>,
}

impl Alumnus {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.owned_field("alumni_name"),
            image: record.owned_field("alumni_image"),
            year: record.owned_field("alumni_year"),
            position: record.owned_field("alumni_position"),
            story: record.owned_field("alumni_story"),
            image_offset: record.owned_field("alumni_image_offset"),
            image_zoom: record.owned_field("alumni_image_zoom"),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_ALUMNI)
    }

    pub fn image_file(&self) -> &str {
        self.image.as_deref().unwrap_or(ALUMNI_PLACEHOLDER_IMAGE)
    }

    pub fn image_style(&self) -> ImageStyle {
        ImageStyle::from_directives(
            IMAGE_CLASS,
            self.image_offset.as_deref(),
            self.image_zoom.as_deref(),
        )
    }
}
