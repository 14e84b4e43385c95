use crate::domain::image::ImageStyle;
use crate::record::Record;

pub const UNKNOWN_MEMBER: &str = "Unknown Member";
pub const DEFAULT_TITLE: &str = "Board Member";
pub const BOARD_PLACEHOLDER_IMAGE: &str = "board-member-placeholder.jpg";
const IMAGE_CLASS: &str = "board-member-img";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardMember {
    pub name: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub year_joined: Option<String>,
    pub previous_team: Option<String>,
    pub image_offset: Option<String>,
    pub image_zoom: Option<String>,
}

impl BoardMember {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.owned_field("board_member_name"),
            title: record.owned_field("board_member_title"),
            image: record.owned_field("board_member_image"),
            bio: record.owned_field("board_member_bio"),
            email: record.owned_field("board_member_email"),
            linkedin: record.owned_field("board_member_linkedin"),
            year_joined: record.owned_field("board_member_year_joined"),
            previous_team: record.owned_field("board_member_previous_team"),
            image_offset: record.owned_field("board_member_image_offset"),
            image_zoom: record.owned_field("board_member_image_zoom"),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_MEMBER)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn image_file(&self) -> &str {
        self.image.as_deref().unwrap_or(BOARD_PLACEHOLDER_IMAGE)
    }

    pub fn image_style(&self) -> ImageStyle {
        ImageStyle::from_directives(
            IMAGE_CLASS,
            self.image_offset.as_deref(),
            self.image_zoom.as_deref(),
        )
    }
}
