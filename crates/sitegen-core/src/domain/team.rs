use crate::domain::url::normalize_url;
use crate::record::Record;

pub const UNKNOWN_YEAR: &str = "Unknown";
pub const TEAM_PLACEHOLDER_IMAGE: &str = "team-placeholder.jpg";
pub const MISSING_DESCRIPTION: &str = "Project description not available.";
pub const MISSING_WIKI: &str = "#";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    pub year: Option<String>,
    pub name: Option<String>,
    pub project_title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub wiki_url: Option<String>,
    pub members: Option<String>,
    pub category: Option<String>,
    pub awards: Option<String>,
    pub video_url: Option<String>,
}

impl Team {
    pub fn from_record(record: &Record) -> Self {
        Self {
            year: record.owned_field("team_year"),
            name: record.owned_field("team_name"),
            project_title: record.owned_field("project_title"),
            description: record.owned_field("project_description"),
            image: record.owned_field("team_image"),
            wiki_url: record.owned_field("team_wiki_url"),
            members: record.owned_field("team_members"),
            category: record.owned_field("project_category"),
            awards: record.owned_field("awards"),
            video_url: record.owned_field("video_url"),
        }
    }

    pub fn display_year(&self) -> &str {
        self.year.as_deref().unwrap_or(UNKNOWN_YEAR)
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(MISSING_DESCRIPTION)
    }

    pub fn image_file(&self) -> &str {
        self.image.as_deref().unwrap_or(TEAM_PLACEHOLDER_IMAGE)
    }

    pub fn wiki_href(&self) -> String {
        match self.wiki_url.as_deref() {
            Some(url) => normalize_url(url),
            None => MISSING_WIKI.to_string(),
        }
    }

    pub fn video_href(&self) -> Option<String> {
        self.video_url.as_deref().map(normalize_url)
    }
}

#[cfg(test)]
mod tests {
    use super::Team;
    use crate::record::parse_simple;

    #[test]
    fn urls_are_normalized() {
        let record = parse_simple("TEAM WIKI URL: 2023.igem.wiki/chalmers\nVIDEO URL: https://video.example/x\n");
        let team = Team::from_record(&record);
        assert_eq!(team.wiki_href(), "https://2023.igem.wiki/chalmers");
        assert_eq!(team.video_href().as_deref(), Some("https://video.example/x"));
    }

    #[test]
    fn missing_fields_fall_back() {
        let team = Team::from_record(&parse_simple(""));
        assert_eq!(team.display_year(), "Unknown");
        assert_eq!(team.wiki_href(), "#");
        assert_eq!(team.video_href(), None);
        assert_eq!(team.image_file(), "team-placeholder.jpg");
    }
}
