use crate::cards::{alumni_card, board_member_card, sponsor_card, team_card};
use crate::layout::{render_document, Chrome, Document, NavPage};
use sitegen_core::rules::{deterministic_shuffle, sort_board_members, sort_teams};
use sitegen_core::{Alumnus, BoardMember, Sponsor, Team};

/// Static copy around a page's card list.
struct PageTemplate {
    page: NavPage,
    subtitle: &'static str,
    intro: &'static str,
    outro: &'static str,
}

impl PageTemplate {
    fn render(&self, cards: &str, chrome: &Chrome) -> String {
        let body = format!("{}\n{}\n{}", self.intro, cards, self.outro);
        render_document(&Document {
            page: self.page,
            subtitle: self.subtitle,
            body: &body,
            chrome,
            inline_script: None,
        })
    }
}

const ALUMNI: PageTemplate = PageTemplate {
    page: NavPage::AlumniStories,
    subtitle: "Hear from our alumni about their iGEM experience",
    intro: r#"                    <h2>Our Alumni</h2>
                    <p>
                        Our alumni share their experiences and how participating in iGEM has impacted their careers
                        and personal growth. Read their stories below.
                    </p>

                    <div class="alumni-list">"#,
    outro: "                    </div>",
};

const ASSOCIATION: PageTemplate = PageTemplate {
    page: NavPage::Association,
    subtitle: "About iGEM Chalmers Gothenburg Association",
    intro: r#"                    <h2>About Us</h2>
                    <p>
                        The iGEM association was established in the autumn of 2022 with the aim of supporting
                        future iGEM teams at Chalmers University of Technology and the University of Gothenburg.
                        Since its inception, the board has actively explored various ways to facilitate this support.
                        The association focuses on laying a strong financial foundation by seeking sponsorship
                        opportunities to aid dedicated young scientists entering iGEM. Additionally, it provides
                        a platform for alumni of previous teams to share their experiences, offering guidance
                        and mentorship to new iGEM members.
                    </p>

                    <h2>What We Do</h2>
                    <ul>
                        <li><strong>Team Support:</strong> Provide resources and guidance for the annual iGEM team</li>
                        <li><strong>Knowledge Transfer:</strong> Ensure knowledge and experience is passed between teams</li>
                        <li><strong>Community Building:</strong> Create a network of synthetic biology enthusiasts</li>
                        <li><strong>Outreach:</strong> Promote synthetic biology education and awareness</li>
                        <li><strong>Fundraising:</strong> Support team projects through fundraising activities</li>
                    </ul>

                    <h2>Our Goals</h2>
                    <p>
                        We aim to establish a strong foundation for synthetic biology research and education
                        at Chalmers University of Technology, while contributing to the global iGEM community
                        and advancing the field of synthetic biology.
                    </p>

                    <h2>Members of the Board 2025</h2>
                    <p>
                        Our board consists of dedicated individuals who have previously participated in iGEM
                        competitions and are committed to supporting future teams.
                    </p>

                    <div class="board-members-grid">"#,
    outro: r#"                    </div>

                    <h2>Get Involved</h2>
                    <p>
                        Whether you're a student, researcher, or simply interested in synthetic biology,
                        there are many ways to get involved with our association.
                    </p>

                    <div class="cta-section">
                        <div class="cta-buttons">
                            <a href="contact-us.html" class="cta-button primary">
                                Become a Member
                            </a>
                            <a href="our-previous-teams.html" class="cta-button secondary">
                                Learn About Our Teams
                            </a>
                        </div>
                    </div>"#,
};

const SPONSORS: PageTemplate = PageTemplate {
    page: NavPage::Sponsors,
    subtitle: "Supporting our iGEM teams",
    intro: r#"                    <h2>Thank You to Our Sponsors</h2>
                    <p>
                        We are grateful for the support of our sponsors who make it possible for our iGEM teams
                        to participate in the competition and develop innovative synthetic biology solutions.
                    </p>

                    <h2>Current Sponsors</h2>
                    <p style="margin-bottom: 1rem; color: #666; font-style: italic;">
                        All our sponsors are equally valued and contribute to making our iGEM participation possible.
                    </p>
                    <div class="sponsors-slideshow-container">
                        <div class="sponsors-slideshow" id="sponsors-slideshow">"#,
    outro: r#"                        </div>
                    </div>

                    <h2>Become a Sponsor</h2>
                    <p>
                        Supporting our iGEM teams is a great way to invest in the future of synthetic biology
                        and support young researchers. We offer various sponsorship opportunities for
                        organizations interested in supporting our mission.
                    </p>

                    <div class="sponsorship-benefits">
                        <h3>Sponsorship Benefits</h3>
                        <ul>
                            <li>Recognition on our website and materials</li>
                            <li>Access to our talented student researchers</li>
                            <li>Networking opportunities with the synthetic biology community</li>
                            <li>Support for cutting-edge research projects</li>
                            <li>Contribution to education and innovation</li>
                        </ul>
                    </div>

                    <div class="cta-section">
                        <div class="cta-buttons">
                            <a href="contact-us.html" class="cta-button primary">
                                Become a Sponsor
                            </a>
                            <a href="our-previous-teams.html" class="cta-button secondary">
                                See Our Work
                            </a>
                        </div>
                    </div>"#,
};

const TEAMS: PageTemplate = PageTemplate {
    page: NavPage::PreviousTeams,
    subtitle: "Past iGEM projects from Chalmers University",
    intro: r#"                    <h2>Team History</h2>
                    <p>
                        Since our founding in 2023, we have supported multiple iGEM teams from Chalmers University
                        of Technology. Each team brings unique perspectives and innovative solutions to global challenges
                        in synthetic biology.
                    </p>

                    <h2>Past Projects</h2>
                    <div class="team-grid">"#,
    outro: r#"                    </div>

                    <h2>Join the Next Team</h2>
                    <p>
                        Are you interested in synthetic biology and want to make a difference? We're always looking
                        for motivated students to join our iGEM teams. No prior experience in synthetic biology is
                        required - we welcome students from all disciplines!
                    </p>

                    <div class="cta-section">
                        <div class="cta-buttons">
                            <a href="contact-us.html#join-us" class="cta-button primary">
                                Apply for Next Year's Team
                            </a>
                            <a href="about-igem.html" class="cta-button secondary">
                                Learn More About iGEM
                            </a>
                        </div>
                    </div>"#,
};

/// Alumni in seeded pseudo-random order.
pub fn alumni_page(alumni: Vec<Alumnus>, seed: u64, chrome: &Chrome) -> String {
    let cards = deterministic_shuffle(alumni, seed)
        .iter()
        .map(alumni_card)
        .collect::<Vec<_>>()
        .join("\n");
    ALUMNI.render(&cards, chrome)
}

/// Board members by title priority, then name.
pub fn association_page(mut members: Vec<BoardMember>, chrome: &Chrome) -> String {
    sort_board_members(&mut members);
    let cards = members
        .iter()
        .map(board_member_card)
        .collect::<Vec<_>>()
        .join("\n");
    ASSOCIATION.render(&cards, chrome)
}

/// Sponsors in input order. The card run appears twice so the slideshow
/// can loop without a visible seam.
pub fn sponsors_page(sponsors: &[Sponsor], chrome: &Chrome) -> String {
    let cards = sponsors
        .iter()
        .map(sponsor_card)
        .collect::<Vec<_>>()
        .join("\n");
    SPONSORS.render(&format!("{cards}\n{cards}"), chrome)
}

/// Teams, newest year first.
pub fn teams_page(mut teams: Vec<Team>, chrome: &Chrome) -> String {
    sort_teams(&mut teams);
    let cards = teams
        .iter()
        .map(team_card)
        .collect::<Vec<_>>()
        .join("\n");
    TEAMS.render(&cards, chrome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sponsor(name: &str) -> Sponsor {
        Sponsor {
            name: Some(name.to_string()),
            image: Some(format!("{name}.png")),
            description: None,
        }
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle).expect("needle present"))
            .collect()
    }

    #[test]
    fn sponsors_appear_twice_in_input_order() {
        let html = sponsors_page(&[sponsor("Zeta"), sponsor("Alpha")], &Chrome::default());
        let names: Vec<&str> = html
            .match_indices("<h3>")
            .map(|(idx, _)| &html[idx + 4..idx + 4 + html[idx + 4..].find('<').unwrap()])
            .filter(|name| *name == "Zeta" || *name == "Alpha")
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Zeta", "Alpha"]);
    }

    #[test]
    fn board_page_orders_by_title() {
        let member = |name: &str, title: &str| BoardMember {
            name: Some(name.to_string()),
            title: Some(title.to_string()),
            ..BoardMember::default()
        };
        let html = association_page(
            vec![
                member("Dana", "Board Advisor"),
                member("Alex", "Chairman"),
                member("Chris", "Board Member - X"),
                member("Billie", "Treasurer"),
            ],
            &Chrome::default(),
        );
        let found = positions(
            &html,
            &[
                ">Chairman<",
                ">Treasurer<",
                ">Board Member - X<",
                ">Board Advisor<",
            ],
        );
        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains(r#"class="nav-link active">The Association</a>"#));
    }

    #[test]
    fn teams_page_is_newest_first() {
        let team = |year: &str| Team {
            year: Some(year.to_string()),
            ..Team::default()
        };
        let html = teams_page(vec![team("2022"), team("2024"), team("2023")], &Chrome::default());
        let found = positions(&html, &["iGEM 2024<", "iGEM 2023<", "iGEM 2022<"]);
        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn alumni_page_is_stable_across_runs() {
        let alumni: Vec<Alumnus> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|name| Alumnus {
                name: Some(name.to_string()),
                ..Alumnus::default()
            })
            .collect();
        let chrome = Chrome {
            footer_email: "board@example.org".to_string(),
        };
        let first = alumni_page(alumni.clone(), 12345, &chrome);
        let second = alumni_page(alumni, 12345, &chrome);
        assert_eq!(first, second);
        assert!(first.contains("Contact us: board@example.org"));
        // Reference order for seed 12345 over five entries: 4, 3, 1, 0, 2.
        let found = positions(
            &first,
            &[
                r#"alt="E""#,
                r#"alt="D""#,
                r#"alt="B""#,
                r#"alt="A""#,
                r#"alt="C""#,
            ],
        );
        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn empty_sponsor_list_still_renders_page() {
        let html = sponsors_page(&[], &Chrome::default());
        assert!(html.contains(r#"<div class="sponsors-slideshow" id="sponsors-slideshow">"#));
        assert!(!html.contains("sponsor-card"));
    }
}
