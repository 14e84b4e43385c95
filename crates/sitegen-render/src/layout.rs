use crate::footer::footer_html;
use sitegen_core::domain::contact::DEFAULT_ASSOCIATION_EMAIL;
use sitegen_core::ContactInfo;

const SITE_NAME: &str = "iGEM Chalmers Gothenburg Association";
const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Lato:wght@400;700&family=Roboto:wght@400;700&display=swap";

/// Pages in the main navigation, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    AboutIgem,
    Association,
    PreviousTeams,
    AlumniStories,
    Sponsors,
    Contact,
}

impl NavPage {
    pub const ALL: [NavPage; 7] = [
        NavPage::Home,
        NavPage::AboutIgem,
        NavPage::Association,
        NavPage::PreviousTeams,
        NavPage::AlumniStories,
        NavPage::Sponsors,
        NavPage::Contact,
    ];

    pub fn href(self) -> &'static str {
        match self {
            NavPage::Home => "index.html",
            NavPage::AboutIgem => "about-igem.html",
            NavPage::Association => "the-association.html",
            NavPage::PreviousTeams => "our-previous-teams.html",
            NavPage::AlumniStories => "alumni-stories.html",
            NavPage::Sponsors => "our-sponsors.html",
            NavPage::Contact => "contact-us.html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::AboutIgem => "About iGEM",
            NavPage::Association => "The Association",
            NavPage::PreviousTeams => "Our Previous Teams",
            NavPage::AlumniStories => "Alumni Stories",
            NavPage::Sponsors => "Our Sponsors",
            NavPage::Contact => "Contact Us",
        }
    }
}

/// Data shared by every page's header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub footer_email: String,
}

impl Chrome {
    pub fn from_contact(info: &ContactInfo) -> Self {
        Self {
            footer_email: info.association_email().to_string(),
        }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            footer_email: DEFAULT_ASSOCIATION_EMAIL.to_string(),
        }
    }
}

pub(crate) struct Document<'a> {
    pub page: NavPage,
    pub subtitle: &'a str,
    pub body: &'a str,
    pub chrome: &'a Chrome,
    /// Inline script placed after `script.js`.
    pub inline_script: Option<&'a str>,
}

fn nav_items(active: NavPage) -> String {
    NavPage::ALL
        .iter()
        .map(|&page| {
            let class = if page == active {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                "                        <li class=\"nav-item\">\n                            <a href=\"{}\" class=\"{class}\">{}</a>\n                        </li>",
                page.href(),
                page.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_document(doc: &Document<'_>) -> String {
    let title = doc.page.label();
    let mut out = String::new();
    out.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {SITE_NAME}</title>
    <link rel="icon" href="images/favicon.jpg" type="image/jpeg">
    <link rel="stylesheet" href="styles.css">
    <link href="{FONTS_URL}" rel="stylesheet">
</head>
<body>
    <!-- Header with Navigation -->
    <header class="site-header">
        <div class="container">
            <div class="header-content">
                <!-- Logo -->
                <div class="logo">
                    <a href="index.html">
                        <img src="images/igem-cga-logo.jpg" alt="iGEM-cga Logo" class="logo-img">
                        <span class="logo-text">iGEM-cga</span>
                    </a>
                </div>

                <!-- Mobile Menu Toggle -->
                <button class="mobile-menu-toggle" aria-label="Toggle navigation menu">
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                </button>

                <!-- Navigation Menu -->
                <nav class="main-navigation">
                    <ul class="nav-list">
{nav}
                    </ul>
                </nav>
            </div>
        </div>
    </header>

    <!-- Main Content -->
    <main class="main-content">
        <!-- Page Header -->
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">{title}</h1>
                <p class="page-subtitle">{subtitle}</p>
            </div>
        </section>

        <!-- Content Section -->
        <section class="content-section">
            <div class="container">
                <div class="content-wrapper">
"#,
        nav = nav_items(doc.page),
        subtitle = doc.subtitle,
    ));
    out.push_str(doc.body);
    out.push_str(
        r#"
                </div>
            </div>
        </section>
    </main>

"#,
    );
    out.push_str(&footer_html(&doc.chrome.footer_email));
    out.push_str("\n\n");
    match doc.inline_script {
        Some(script) => {
            out.push_str("    <!-- JavaScript for mobile menu and legal info toggle -->\n");
            out.push_str("    <script src=\"script.js\"></script>\n");
            out.push_str(script);
            out.push('\n');
        }
        None => {
            out.push_str("    <!-- JavaScript for mobile menu -->\n");
            out.push_str("    <script src=\"script.js\"></script>\n");
        }
    }
    out.push_str("</body>\n</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(page: NavPage, inline_script: Option<&str>) -> String {
        let chrome = Chrome::default();
        render_document(&Document {
            page,
            subtitle: "Sub",
            body: "                    <p>body</p>",
            chrome: &chrome,
            inline_script,
        })
    }

    #[test]
    fn current_page_link_is_active() {
        let html = sample(NavPage::Sponsors, None);
        assert!(html.contains(r#"<a href="our-sponsors.html" class="nav-link active">Our Sponsors</a>"#));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert_eq!(html.matches("<li class=\"nav-item\">").count(), 7);
        assert!(html.contains("<title>Our Sponsors - iGEM Chalmers Gothenburg Association</title>"));
    }

    #[test]
    fn document_carries_default_footer() {
        let html = sample(NavPage::PreviousTeams, None);
        assert!(html.contains("Contact us: igem.cga@gmail.com"));
        assert!(html.contains("    <!-- JavaScript for mobile menu -->\n"));
        assert!(html.ends_with("</body>\n</html>"));
    }

    #[test]
    fn inline_script_follows_shared_script() {
        let html = sample(NavPage::Contact, Some("    <script>run()</script>"));
        assert!(html.contains(
            "    <script src=\"script.js\"></script>\n    <script>run()</script>\n</body>"
        ));
    }
}
