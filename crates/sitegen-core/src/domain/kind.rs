use crate::record::ParseMode;
use serde::Serialize;
use std::fmt;

const DATA_SUFFIX: &str = ".txt";

/// A page generated from a directory of per-entity data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Alumni,
    Board,
    Sponsors,
    Teams,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Alumni,
        Domain::Board,
        Domain::Sponsors,
        Domain::Teams,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Domain::Alumni => "alumni",
            Domain::Board => "board",
            Domain::Sponsors => "sponsors",
            Domain::Teams => "teams",
        }
    }

    pub fn file_prefix(self) -> &'static str {
        match self {
            Domain::Alumni => "alumni-",
            Domain::Board => "board-member-",
            Domain::Sponsors => "sponsor-",
            Domain::Teams => "team-",
        }
    }

    pub fn parse_mode(self) -> ParseMode {
        match self {
            Domain::Alumni => ParseMode::Block,
            Domain::Board | Domain::Sponsors | Domain::Teams => ParseMode::Simple,
        }
    }

    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Domain::Alumni => &["alumni_name"],
            Domain::Board => &[
                "board_member_name",
                "board_member_title",
                "board_member_image",
            ],
            Domain::Sponsors => &["sponsor_name", "sponsor_image"],
            Domain::Teams => &[
                "team_year",
                "team_name",
                "project_title",
                "project_description",
                "team_image",
                "team_wiki_url",
            ],
        }
    }

    /// Field used to name a record in progress output.
    pub fn name_field(self) -> &'static str {
        match self {
            Domain::Alumni => "alumni_name",
            Domain::Board => "board_member_name",
            Domain::Sponsors => "sponsor_name",
            Domain::Teams => "team_name",
        }
    }

    /// Sponsors missing a required field are left off the page entirely;
    /// every other domain renders them with placeholders.
    pub fn drops_invalid(self) -> bool {
        matches!(self, Domain::Sponsors)
    }

    pub fn accepts_file_name(self, name: &str) -> bool {
        name.starts_with(self.file_prefix())
            && name.ends_with(DATA_SUFFIX)
            && !name.contains("README")
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Domain;
    use crate::record::ParseMode;

    #[test]
    fn file_names_follow_prefix_convention() {
        assert!(Domain::Alumni.accepts_file_name("alumni-ada.txt"));
        assert!(!Domain::Alumni.accepts_file_name("alumni-README.txt"));
        assert!(!Domain::Alumni.accepts_file_name("alumni-ada.md"));
        assert!(Domain::Board.accepts_file_name("board-member-01.txt"));
        assert!(!Domain::Board.accepts_file_name("board-01.txt"));
        assert!(!Domain::Teams.accepts_file_name("README.txt"));
    }

    #[test]
    fn only_alumni_use_block_parsing() {
        for domain in Domain::ALL {
            let expected = if domain == Domain::Alumni {
                ParseMode::Block
            } else {
                ParseMode::Simple
            };
            assert_eq!(domain.parse_mode(), expected);
        }
    }
}
