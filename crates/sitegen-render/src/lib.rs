pub mod cards;
pub mod contact;
pub mod footer;
pub mod layout;
mod markup;
pub mod pages;
pub mod story;

pub use cards::{alumni_card, board_member_card, sponsor_card, team_card};
pub use contact::contact_page;
pub use footer::{footer_html, replace_footer};
pub use layout::{Chrome, NavPage};
pub use pages::{alumni_page, association_page, sponsors_page, teams_page};
pub use story::render_story;
