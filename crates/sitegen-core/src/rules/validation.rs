use crate::domain::Domain;
use crate::error::CoreError;
use crate::record::Record;

pub fn validate(domain: Domain, record: &Record) -> Result<(), CoreError> {
    let fields = record.missing(domain.required_fields());
    if fields.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingRequiredFields { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::domain::Domain;
    use crate::error::CoreError;
    use crate::record::parse_simple;

    #[test]
    fn complete_sponsor_passes() {
        let record = parse_simple("SPONSOR NAME: Acme\nSPONSOR IMAGE: acme.png\n");
        assert!(validate(Domain::Sponsors, &record).is_ok());
    }

    #[test]
    fn missing_fields_are_listed_in_order() {
        let record = parse_simple("TEAM YEAR: 2023\nTEAM IMAGE: team.jpg\n");
        let err = validate(Domain::Teams, &record).unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingRequiredFields {
                fields: vec![
                    "team_name",
                    "project_title",
                    "project_description",
                    "team_wiki_url"
                ]
            }
        );
        assert_eq!(
            err.to_string(),
            "missing required fields: team_name, project_title, project_description, team_wiki_url"
        );
    }
}
