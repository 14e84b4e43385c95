use serde::Serialize;
use std::collections::BTreeMap;

/// One parsed data file: normalised field name to trimmed value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key` when it is present and not blank.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    pub fn owned_field(&self, key: &str) -> Option<String> {
        self.field(key).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required keys that are absent or blank, in the order given.
    pub fn missing(&self, required: &[&'static str]) -> Vec<&'static str> {
        required
            .iter()
            .copied()
            .filter(|key| self.field(key).is_none())
            .collect()
    }

    fn insert(&mut self, key: String, value: &str) {
        self.0.insert(key, value.trim().to_string());
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key.into(), value.as_ref());
        }
        record
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// One `key: value` per line.
    Simple,
    /// Like `Simple`, but a field opened by an upper-case marker line runs
    /// on until the next marker.
    Block,
}

pub fn parse(mode: ParseMode, text: &str) -> Record {
    match mode {
        ParseMode::Simple => parse_simple(text),
        ParseMode::Block => parse_block(text),
    }
}

/// Lower-cases the key and collapses whitespace runs into `_`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

pub fn parse_simple(text: &str) -> Record {
    let mut record = Record::new();
    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        record.insert(normalize_key(key), value);
    }
    record
}

enum BlockState {
    Scanning,
    Field { key: String, value: String },
}

pub fn parse_block(text: &str) -> Record {
    let lines: Vec<&str> = text.lines().collect();
    let mut record = Record::new();
    let mut state = BlockState::Scanning;

    for (idx, line) in lines.iter().enumerate() {
        state = match state {
            BlockState::Scanning => open_field(line).unwrap_or(BlockState::Scanning),
            BlockState::Field { key, mut value } => {
                if let Some(next) = open_field(line) {
                    record.insert(key, &value);
                    next
                } else if line.trim().is_empty()
                    && lines
                        .get(idx + 1)
                        .is_some_and(|next| is_field_marker(next))
                {
                    record.insert(key, &value);
                    BlockState::Scanning
                } else {
                    if !line.trim().is_empty() || !value.is_empty() {
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(line);
                    }
                    BlockState::Field { key, value }
                }
            }
        };
    }

    if let BlockState::Field { key, value } = state {
        record.insert(key, &value);
    }
    record
}

fn open_field(line: &str) -> Option<BlockState> {
    if !is_field_marker(line) {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    Some(BlockState::Field {
        key: normalize_key(key),
        value: value.trim().to_string(),
    })
}

/// `ALUMNI STORY:` style line: an upper-case letter, then at least one
/// more upper-case letter, digit or blank, then a colon. A lone `Q:` is
/// story text, not a marker.
pub fn is_field_marker(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    let mut body = 0;
    for ch in chars {
        match ch {
            ':' => return body > 0,
            'A'..='Z' | '0'..='9' | ' ' | '\t' => body += 1,
            _ => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_collapses_whitespace() {
        assert_eq!(normalize_key("  Board Member   Name "), "board_member_name");
        assert_eq!(normalize_key("TEAM\tWIKI URL"), "team_wiki_url");
    }

    #[test]
    fn simple_keeps_colons_in_value() {
        let record = parse_simple("TEAM WIKI URL: https://example.org:8080/wiki\n");
        assert_eq!(
            record.get("team_wiki_url"),
            Some("https://example.org:8080/wiki")
        );
    }

    #[test]
    fn simple_ignores_lines_without_colon_and_last_wins() {
        let record = parse_simple(
            "# sponsor file\nSPONSOR NAME: First\njust prose\n\nSPONSOR NAME:  Second  \n",
        );
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("sponsor_name"), Some("Second"));
    }

    #[test]
    fn simple_parse_is_idempotent() {
        let text = "SPONSOR NAME: Acme\r\nSPONSOR IMAGE: acme.png\r\nSPONSOR DESCRIPTION: Lab kit: pipettes\r\n";
        assert_eq!(parse_simple(text), parse_simple(text));
        assert_eq!(parse_simple(text).get("sponsor_image"), Some("acme.png"));
    }

    #[test]
    fn block_story_stops_at_blank_line_before_marker() {
        let record = parse_block("NAME: A\nSTORY: line1\nline2\n\nNAME2: B");
        assert_eq!(record.get("name"), Some("A"));
        assert_eq!(record.get("story"), Some("line1\nline2"));
        assert_eq!(record.get("name2"), Some("B"));
    }

    #[test]
    fn block_keeps_inner_blank_lines() {
        let text = "ALUMNI NAME: Ada\nALUMNI STORY:\n\nFirst paragraph\n\nSecond paragraph\nALUMNI YEAR: 2021\n";
        let record = parse_block(text);
        assert_eq!(
            record.get("alumni_story"),
            Some("First paragraph\n\nSecond paragraph")
        );
        assert_eq!(record.get("alumni_year"), Some("2021"));
    }

    #[test]
    fn block_ignores_text_before_first_marker() {
        let record = parse_block("lower-case preamble: ignored\n\nALUMNI NAME: Grace\n");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("alumni_name"), Some("Grace"));
    }

    #[test]
    fn block_value_lines_are_not_split_on_colons() {
        let record = parse_block("ALUMNI STORY: We said: hello\nand left: quickly\n");
        assert_eq!(
            record.get("alumni_story"),
            Some("We said: hello\nand left: quickly")
        );
    }

    #[test]
    fn field_marker_requires_upper_case_prefix() {
        assert!(is_field_marker("ALUMNI STORY: text"));
        assert!(is_field_marker("NAME2:"));
        assert!(!is_field_marker("Alumni story: text"));
        assert!(!is_field_marker(" NAME: indented"));
        assert!(!is_field_marker("NO COLON HERE"));
        assert!(!is_field_marker("Q: one letter"));
        assert!(is_field_marker("QA: two letters"));
    }

    #[test]
    fn block_story_keeps_single_letter_prompts() {
        let record = parse_block(
            "ALUMNI NAME: Ada\nALUMNI STORY: Interview\nQ: What did you learn?\nA: Everything.\n",
        );
        assert_eq!(
            record.get("alumni_story"),
            Some("Interview\nQ: What did you learn?\nA: Everything.")
        );
        assert_eq!(record.get("q"), None);
        assert_eq!(record.get("a"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn text_without_fields_is_empty() {
        assert!(parse_simple("just prose\nno separators here\n").is_empty());
        assert!(!parse_simple("SPONSOR NAME: Acme\n").is_empty());
    }

    #[test]
    fn missing_reports_blank_values() {
        let record = parse_simple("SPONSOR NAME: Acme\nSPONSOR IMAGE:   \n");
        assert_eq!(
            record.missing(&["sponsor_name", "sponsor_image"]),
            vec!["sponsor_image"]
        );
    }
}
