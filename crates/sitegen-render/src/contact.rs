use crate::layout::{render_document, Chrome, Document, NavPage};
use sitegen_core::ContactInfo;

const SUBTITLE: &str = "Get in touch with the iGEM Chalmers Gothenburg Association";

const LEGAL_TOGGLE_SCRIPT: &str = r#"    <script>
        function toggleLegalInfo() {
            const content = document.getElementById('legalContent');
            const toggleText = document.querySelector('.legal-toggle-text');
            const toggleIcon = document.querySelector('.legal-toggle-icon');

            if (content.style.display === 'none') {
                content.style.display = 'block';
                toggleText.textContent = 'Hide Legal Information';
                toggleIcon.textContent = '▲';
            } else {
                content.style.display = 'none';
                toggleText.textContent = 'Show Legal Information';
                toggleIcon.textContent = '▼';
            }
        }
    </script>"#;

fn contact_body(info: &ContactInfo) -> String {
    let association_email = info.association_email();
    let team_email = info.current_team_email();
    let legal_email = info.legal_email();

    format!(
        r#"                    <h2>Our Non-profit</h2>
                    <p>
                        For general inquiries about the association, board membership, or administrative matters:
                    </p>
                    <div class="contact-method">
                        <strong>Email:</strong> <a href="mailto:{association_email}">{association_email}</a>
                    </div>

                    <h2>The Current Team</h2>
                    <p>
                        For questions about the current iGEM team, project details, or team-related matters:
                    </p>
                    <div class="contact-method">
                        <strong>Email:</strong> <a href="mailto:{team_email}">{team_email}</a>
                    </div>

                    <h2>Follow Us on Social Media</h2>
                    <p>
                        Stay updated with our latest news and activities:
                    </p>
                    <div class="social-links">
                        <a href="{instagram}" target="_blank" class="social-link instagram">Instagram</a>
                        <a href="{facebook}" target="_blank" class="social-link facebook">Facebook</a>
                        <a href="{linkedin}" target="_blank" class="social-link linkedin">LinkedIn</a>
                    </div>

                    <h2 id="join-us">Join Us</h2>
                    <p>
                        Interested in getting involved? We have opportunities for both team members and association members.
                    </p>

                    <div class="cta-section">
                        <div class="cta-buttons">
                            <a href="{team_form}" target="_blank" class="cta-button primary">
                                Team Signup Form
                            </a>
                            <a href="{member_form}" target="_blank" class="cta-button secondary">
                                Association Member Form
                            </a>
                        </div>
                    </div>

                    <h2>Legal Information</h2>
                    <div class="legal-info">
                        <button class="legal-toggle" onclick="toggleLegalInfo()">
                            <span class="legal-toggle-text">Show Legal Information</span>
                            <span class="legal-toggle-icon">▼</span>
                        </button>
                        <div class="legal-content" id="legalContent" style="display: none;">
                            <div class="legal-details">
                                <p><strong>Email:</strong> <a href="mailto:{legal_email}">{legal_email}</a></p>
                                <p><strong>Org-number:</strong> {org_number}</p>
                                <p><strong>Org-name:</strong> {org_name}</p>
                                <p><strong>Address:</strong> {address}</p>
                                <p><strong>Domain:</strong> {domain}</p>
                                <p><strong>Legal Form of Company:</strong> {legal_form}</p>
                                <p><strong>Legal Domicile/Seat:</strong> {legal_domicile}</p>
                                <p><strong>Association founded:</strong> {founded} (year-month-day)</p>
                            </div>
                        </div>
                    </div>"#,
        instagram = info.instagram(),
        facebook = info.facebook(),
        linkedin = info.linkedin(),
        team_form = info.team_signup_form(),
        member_form = info.association_member_form(),
        org_number = info.org_number(),
        org_name = info.org_name(),
        address = info.address(),
        domain = info.domain(),
        legal_form = info.legal_form(),
        legal_domicile = info.legal_domicile(),
        founded = info.association_founded(),
    )
}

/// Full `contact-us.html` document. The footer shows the association email
/// from `info`, not the site-wide default.
pub fn contact_page(info: &ContactInfo) -> String {
    let body = contact_body(info);
    render_document(&Document {
        page: NavPage::Contact,
        subtitle: SUBTITLE,
        body: &body,
        chrome: &Chrome::from_contact(info),
        inline_script: Some(LEGAL_TOGGLE_SCRIPT),
    })
}
