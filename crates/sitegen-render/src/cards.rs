use crate::markup::Markup;
use crate::story::render_story;
use sitegen_core::{Alumnus, BoardMember, Sponsor, Team};

const ALUMNI_BASE: usize = 24;
const BOARD_BASE: usize = 28;
const SPONSOR_BASE: usize = 28;
const TEAM_BASE: usize = 24;

pub fn alumni_card(alumnus: &Alumnus) -> String {
    let name = alumnus.display_name();
    let style = alumnus.image_style();

    let mut html = Markup::new(ALUMNI_BASE);
    html.line(0, r#"<div class="alumni-card">"#);
    html.line(1, r#"<div class="alumni-image">"#);
    html.line(
        2,
        &format!(
            r#"<img src="images/{}" alt="{}" class="{}"{}>"#,
            alumnus.image_file(),
            name,
            style.class,
            style.style_attr()
        ),
    );
    html.line(1, "</div>");
    html.line(1, r#"<div class="alumni-content">"#);
    html.line(2, &format!(r#"<h3 class="alumni-name">{name}</h3>"#));

    let year = alumnus.year.as_deref();
    let position = alumnus.position.as_deref();
    if year.is_some() || position.is_some() {
        html.line(2, r#"<div class="alumni-meta">"#);
        if let Some(year) = year {
            html.line(3, &format!(r#"<span class="alumni-year">{year}</span>"#));
        }
        if let Some(position) = position {
            if year.is_some() {
                html.append(r#" <span class="alumni-separator">•</span>"#);
            }
            html.line(
                3,
                &format!(r#"<span class="alumni-position">{position}</span>"#),
            );
        }
        html.line(2, "</div>");
    }

    if let Some(story) = alumnus.story.as_deref() {
        html.line(2, r#"<div class="alumni-story">"#);
        let paragraphs = render_story(story, html.column(3));
        html.line(3, &paragraphs);
        html.line(2, "</div>");
    }

    html.line(1, "</div>");
    html.line(0, "</div>");
    html.finish()
}

pub fn board_member_card(member: &BoardMember) -> String {
    let name = member.display_name();
    let style = member.image_style();

    let mut html = Markup::new(BOARD_BASE);
    html.line(0, r#"<div class="board-member-card">"#);
    html.line(1, r#"<div class="board-member-image">"#);
    html.line(
        2,
        &format!(
            r#"<img src="images/{}" alt="{}" class="{}"{}>"#,
            member.image_file(),
            name,
            style.class,
            style.style_attr()
        ),
    );
    html.line(1, "</div>");
    html.line(1, r#"<div class="board-member-content">"#);
    html.line(2, &format!(r#"<h3 class="board-member-name">{name}</h3>"#));
    html.line(
        2,
        &format!(
            r#"<p class="board-member-title">{}</p>"#,
            member.display_title()
        ),
    );

    if let Some(bio) = member.bio.as_deref() {
        html.line(2, &format!(r#"<p class="board-member-bio">{bio}</p>"#));
    }

    if member.year_joined.is_some() || member.previous_team.is_some() {
        html.line(2, r#"<div class="board-member-details">"#);
        if let Some(team) = member.previous_team.as_deref() {
            html.line(
                3,
                &format!(
                    r#"<p class="board-member-team"><strong>Competed in:</strong> {team}</p>"#
                ),
            );
        }
        if let Some(year) = member.year_joined.as_deref() {
            html.line(
                3,
                &format!(
                    r#"<p class="board-member-year"><strong>Joined the board in:</strong> {year}</p>"#
                ),
            );
        }
        html.line(2, "</div>");
    }

    if member.email.is_some() || member.linkedin.is_some() {
        html.line(2, r#"<div class="board-member-contact">"#);
        if let Some(email) = member.email.as_deref() {
            html.line(
                3,
                &format!(r#"<a href="mailto:{email}" class="board-member-email">{email}</a>"#),
            );
        }
        if let Some(linkedin) = member.linkedin.as_deref() {
            html.line(
                3,
                &format!(
                    r#"<a href="{linkedin}" target="_blank" class="board-member-linkedin">LinkedIn</a>"#
                ),
            );
        }
        html.line(2, "</div>");
    }

    html.line(1, "</div>");
    html.line(0, "</div>");
    html.finish()
}

pub fn sponsor_card(sponsor: &Sponsor) -> String {
    let name = sponsor.display_name();

    let mut html = Markup::new(SPONSOR_BASE);
    html.line(0, r#"<div class="sponsor-card">"#);
    html.line(1, r#"<div class="sponsor-image">"#);
    html.line(
        2,
        &format!(
            r#"<img src="images/{}" alt="{name}" class="sponsor-img">"#,
            sponsor.image_file()
        ),
    );
    html.line(1, "</div>");
    html.line(1, r#"<div class="sponsor-content">"#);
    html.line(2, &format!("<h3>{name}</h3>"));
    if let Some(description) = sponsor.description.as_deref() {
        html.line(2, &format!("<p>{description}</p>"));
    }
    html.line(1, "</div>");
    html.line(0, "</div>");
    html.finish()
}

pub fn team_card(team: &Team) -> String {
    let year = team.display_year();
    let wiki = team.wiki_href();

    let mut html = Markup::new(TEAM_BASE);
    html.line(0, r#"<div class="team-card">"#);
    html.line(1, r#"<div class="team-image">"#);
    html.line(
        2,
        &format!(
            r#"<img src="images/{}" alt="{year} Team Project" class="team-img">"#,
            team.image_file()
        ),
    );
    html.line(1, "</div>");
    html.line(1, r#"<div class="team-content">"#);
    html.line(
        2,
        &format!(
            r#"<h3><a href="{wiki}" target="_blank" class="team-title-link">iGEM {year}</a></h3>"#
        ),
    );
    html.line(
        2,
        &format!(
            r#"<p class="team-description-text">{}</p>"#,
            team.display_description()
        ),
    );

    if team.category.is_some() || team.awards.is_some() || team.members.is_some() {
        html.line(2, r#"<div class="team-details">"#);
        if let Some(category) = team.category.as_deref() {
            html.line(
                3,
                &format!(r#"<p class="team-category"><strong>Category:</strong> {category}</p>"#),
            );
        }
        if let Some(awards) = team.awards.as_deref() {
            html.line(
                3,
                &format!(r#"<p class="team-awards"><strong>Awards:</strong> {awards}</p>"#),
            );
        }
        if let Some(members) = team.members.as_deref() {
            html.line(
                3,
                &format!(
                    r#"<p class="team-members"><strong>Team Members:</strong> {members}</p>"#
                ),
            );
        }
        html.line(2, "</div>");
    }

    html.line(2, r#"<div class="team-buttons">"#);
    html.line(
        3,
        &format!(r#"<a href="{wiki}" target="_blank" class="team-link">Visit Team Wiki</a>"#),
    );
    if let Some(video) = team.video_href() {
        html.line(
            3,
            &format!(r#"<a href="{video}" target="_blank" class="team-link">Watch Intro Vid</a>"#),
        );
    }
    html.line(2, "</div>");

    html.line(1, "</div>");
    html.line(0, "</div>");
    html.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitegen_core::parse_simple;

    #[test]
    fn alumni_card_with_all_fields() {
        let alumnus = Alumnus {
            name: Some("Ada".to_string()),
            image: Some("ada.jpg".to_string()),
            year: Some("2021".to_string()),
            position: Some("Wet lab".to_string()),
            story: Some("Hello\\nworld\n\nBye".to_string()),
            image_offset: Some("custom:20%".to_string()),
            image_zoom: None,
        };
        let html = alumni_card(&alumnus);
        assert!(html.contains(
            r#"<img src="images/ada.jpg" alt="Ada" class="alumni-img offset-custom" style="object-position: center 20%;">"#
        ));
        assert!(html.contains(
            r#"<span class="alumni-year">2021</span> <span class="alumni-separator">•</span>"#
        ));
        assert!(html.contains(r#"<span class="alumni-position">Wet lab</span>"#));
        assert!(html.contains(
            "<p>Hello<br>world</p>\n                                    <p>Bye</p>"
        ));
    }

    #[test]
    fn alumni_card_omits_empty_groups() {
        let html = alumni_card(&Alumnus::default());
        assert!(html.contains(r#"alt="Unknown Alumni""#));
        assert!(html.contains("images/alumni-placeholder.jpg"));
        assert!(!html.contains("alumni-meta"));
        assert!(!html.contains("alumni-story"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn alumni_position_without_year_has_no_separator() {
        let alumnus = Alumnus {
            position: Some("Dry lab".to_string()),
            ..Alumnus::default()
        };
        let html = alumni_card(&alumnus);
        assert!(html.contains("alumni-meta"));
        assert!(!html.contains("alumni-separator"));
    }

    #[test]
    fn board_card_groups_are_conditional() {
        let member = BoardMember::from_record(&parse_simple(
            "BOARD MEMBER NAME: Alex\nBOARD MEMBER EMAIL: alex@example.org\nBOARD MEMBER IMAGE ZOOM: small\n",
        ));
        let html = board_member_card(&member);
        assert!(html.contains(r#"<p class="board-member-title">Board Member</p>"#));
        assert!(html.contains(r#"class="board-member-img zoom-small">"#));
        assert!(html.contains(
            r#"<a href="mailto:alex@example.org" class="board-member-email">alex@example.org</a>"#
        ));
        assert!(!html.contains("board-member-linkedin"));
        assert!(!html.contains("board-member-details"));
        assert!(!html.contains("board-member-bio"));
    }

    #[test]
    fn sponsor_card_description_is_optional() {
        let sponsor = Sponsor {
            name: Some("Acme".to_string()),
            image: Some("acme.png".to_string()),
            description: None,
        };
        let html = sponsor_card(&sponsor);
        assert!(html.starts_with('\n'));
        assert!(html.contains("<h3>Acme</h3>"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn team_card_normalizes_links() {
        let team = Team::from_record(&parse_simple(
            "TEAM YEAR: 2023\nTEAM WIKI URL: 2023.igem.wiki/chalmers\nAWARDS: Gold medal\n",
        ));
        let html = team_card(&team);
        assert!(html.contains(
            r#"<h3><a href="https://2023.igem.wiki/chalmers" target="_blank" class="team-title-link">iGEM 2023</a></h3>"#
        ));
        assert!(html.contains(r#"<p class="team-awards"><strong>Awards:</strong> Gold medal</p>"#));
        assert!(!html.contains("team-category"));
        assert!(!html.contains("Watch Intro Vid"));
        assert!(html.contains("Project description not available."));
    }
}
