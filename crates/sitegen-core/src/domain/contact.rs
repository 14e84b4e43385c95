use crate::record::Record;

pub const DEFAULT_ASSOCIATION_EMAIL: &str = "igem.cga@gmail.com";
pub const DEFAULT_TEAM_EMAIL: &str = "igemgothenburg@gmail.com";
pub const DEFAULT_LEGAL_EMAIL: &str = "associationigem@gmail.com";
pub const DEFAULT_LINK: &str = "#";
pub const DEFAULT_ORG_NUMBER: &str = "802541-3876";
pub const DEFAULT_ORG_NAME: &str = "IGEM CHALMERS-GOTHENBURG ASSOCIATION";
pub const DEFAULT_ADDRESS: &str =
    "c/o BIOLOGY AND BIOLOGICAL ENGINEERING, Kemivägen 10, 412 96 Gothenburg";
pub const DEFAULT_DOMAIN: &str = "igem-cga.com";
pub const DEFAULT_LEGAL_FORM: &str = "Non-profit association";
pub const DEFAULT_LEGAL_DOMICILE: &str = "Göteborg, Västra Götalands län";
pub const DEFAULT_FOUNDED: &str = "2022-11-18";

/// Organisation-wide contact and legal details. Every field falls back to
/// the association's published value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub association_email: Option<String>,
    pub current_team_email: Option<String>,
    pub legal_email: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub team_signup_form: Option<String>,
    pub association_member_form: Option<String>,
    pub org_number: Option<String>,
    pub org_name: Option<String>,
    pub address: Option<String>,
    pub domain: Option<String>,
    pub legal_form: Option<String>,
    pub legal_domicile: Option<String>,
    pub association_founded: Option<String>,
}

fn or<'a>(value: &'a Option<String>, fallback: &'static str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

impl ContactInfo {
    pub fn from_record(record: &Record) -> Self {
        Self {
            association_email: record.owned_field("association_email"),
            current_team_email: record.owned_field("current_team_email"),
            legal_email: record.owned_field("legal_email"),
            instagram: record.owned_field("instagram"),
            facebook: record.owned_field("facebook"),
            linkedin: record.owned_field("linkedin"),
            team_signup_form: record.owned_field("team_signup_form"),
            association_member_form: record.owned_field("association_member_form"),
            org_number: record.owned_field("org_number"),
            org_name: record.owned_field("org_name"),
            address: record.owned_field("address"),
            domain: record.owned_field("domain"),
            legal_form: record.owned_field("legal_form"),
            legal_domicile: record.owned_field("legal_domicile"),
            association_founded: record.owned_field("association_founded"),
        }
    }

    pub fn association_email(&self) -> &str {
        or(&self.association_email, DEFAULT_ASSOCIATION_EMAIL)
    }

    pub fn current_team_email(&self) -> &str {
        or(&self.current_team_email, DEFAULT_TEAM_EMAIL)
    }

    pub fn legal_email(&self) -> &str {
        or(&self.legal_email, DEFAULT_LEGAL_EMAIL)
    }

    pub fn instagram(&self) -> &str {
        or(&self.instagram, DEFAULT_LINK)
    }

    pub fn facebook(&self) -> &str {
        or(&self.facebook, DEFAULT_LINK)
    }

    pub fn linkedin(&self) -> &str {
        or(&self.linkedin, DEFAULT_LINK)
    }

    pub fn team_signup_form(&self) -> &str {
        or(&self.team_signup_form, DEFAULT_LINK)
    }

    pub fn association_member_form(&self) -> &str {
        or(&self.association_member_form, DEFAULT_LINK)
    }

    pub fn org_number(&self) -> &str {
        or(&self.org_number, DEFAULT_ORG_NUMBER)
    }

    pub fn org_name(&self) -> &str {
        or(&self.org_name, DEFAULT_ORG_NAME)
    }

    pub fn address(&self) -> &str {
        or(&self.address, DEFAULT_ADDRESS)
    }

    pub fn domain(&self) -> &str {
        or(&self.domain, DEFAULT_DOMAIN)
    }

    pub fn legal_form(&self) -> &str {
        or(&self.legal_form, DEFAULT_LEGAL_FORM)
    }

    pub fn legal_domicile(&self) -> &str {
        or(&self.legal_domicile, DEFAULT_LEGAL_DOMICILE)
    }

    pub fn association_founded(&self) -> &str {
        or(&self.association_founded, DEFAULT_FOUNDED)
    }
}

#[cfg(test)]
mod tests {
    use super::ContactInfo;
    use crate::record::parse_simple;

    #[test]
    fn present_fields_override_defaults() {
        let record = parse_simple("ASSOCIATION EMAIL: board@example.org\nINSTAGRAM: https://instagram.com/x\n");
        let info = ContactInfo::from_record(&record);
        assert_eq!(info.association_email(), "board@example.org");
        assert_eq!(info.instagram(), "https://instagram.com/x");
        assert_eq!(info.facebook(), "#");
        assert_eq!(info.org_number(), "802541-3876");
    }

    #[test]
    fn blank_field_uses_default() {
        let info = ContactInfo::from_record(&parse_simple("ASSOCIATION EMAIL:   \n"));
        assert_eq!(info.association_email(), "igem.cga@gmail.com");
    }
}
