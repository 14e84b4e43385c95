use regex::Regex;
use std::sync::OnceLock;

static FOOTER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn footer_pattern() -> &'static Regex {
    FOOTER_PATTERN.get_or_init(|| {
        Regex::new(r"(?s)    <!-- Footer -->.*?    </footer>").expect("footer pattern is valid")
    })
}

/// Canonical footer block, including its leading marker comment.
pub fn footer_html(email: &str) -> String {
    format!(
        r#"    <!-- Footer -->
    <footer class="site-footer">
        <div class="container">
            <div class="footer-content">
                <h3 class="footer-title">Contact us: {email}</h3>
            </div>
        </div>
    </footer>"#
    )
}

/// Swaps the first footer block in `html` for `footer`. `None` when the
/// page has no footer marker.
pub fn replace_footer(html: &str, footer: &str) -> Option<String> {
    let found = footer_pattern().find(html)?;
    let mut out = String::with_capacity(html.len() - found.len() + footer.len());
    out.push_str(&html[..found.start()]);
    out.push_str(footer);
    out.push_str(&html[found.end()..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::{footer_html, replace_footer};

    #[test]
    fn replaces_only_the_footer_span() {
        let page = format!(
            "<body>\n{}\n\n    <script src=\"script.js\"></script>\n</body>",
            footer_html("old@example.org")
        );
        let updated = replace_footer(&page, &footer_html("new@example.org")).expect("footer");
        assert!(updated.contains("Contact us: new@example.org"));
        assert!(!updated.contains("old@example.org"));
        assert!(updated.starts_with("<body>\n    <!-- Footer -->"));
        assert!(updated.ends_with("</footer>\n\n    <script src=\"script.js\"></script>\n</body>"));
    }

    #[test]
    fn only_first_footer_is_replaced() {
        let page = format!("{}\n{}", footer_html("a@x"), footer_html("b@x"));
        let updated = replace_footer(&page, &footer_html("c@x")).expect("footer");
        assert_eq!(updated, format!("{}\n{}", footer_html("c@x"), footer_html("b@x")));
    }

    #[test]
    fn page_without_marker_is_left_alone() {
        assert_eq!(replace_footer("<footer>x</footer>", "new"), None);
    }
}
