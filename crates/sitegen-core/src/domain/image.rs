const OFFSET_PRESETS: [&str; 3] = ["top", "center", "bottom"];
const ZOOM_PRESETS: [&str; 3] = ["small", "medium", "large"];
const CUSTOM_PREFIX: &str = "custom:";

/// CSS class list and inline declarations derived from the
/// `IMAGE OFFSET` / `IMAGE ZOOM` directives of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStyle {
    pub class: String,
    pub declarations: Vec<String>,
}

impl ImageStyle {
    pub fn from_directives(base_class: &str, offset: Option<&str>, zoom: Option<&str>) -> Self {
        let mut class = base_class.to_string();
        let mut declarations = Vec::new();

        if let Some(offset) = offset {
            if OFFSET_PRESETS.contains(&offset) {
                class.push_str(&format!(" offset-{offset}"));
            } else if let Some(custom) = offset.strip_prefix(CUSTOM_PREFIX) {
                class.push_str(" offset-custom");
                declarations.push(format!("object-position: center {custom}"));
            }
        }

        if let Some(zoom) = zoom {
            if ZOOM_PRESETS.contains(&zoom) {
                class.push_str(&format!(" zoom-{zoom}"));
            } else if let Some(custom) = zoom.strip_prefix(CUSTOM_PREFIX) {
                class.push_str(" zoom-custom");
                declarations.push(format!("transform: scale({custom})"));
            }
        }

        Self {
            class,
            declarations,
        }
    }

    /// ` style="…;"` with a leading space, or empty when nothing is custom.
    pub fn style_attr(&self) -> String {
        if self.declarations.is_empty() {
            return String::new();
        }
        format!(" style=\"{};\"", self.declarations.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::ImageStyle;

    #[test]
    fn presets_only_add_classes() {
        let style = ImageStyle::from_directives("alumni-img", Some("top"), Some("large"));
        assert_eq!(style.class, "alumni-img offset-top zoom-large");
        assert_eq!(style.style_attr(), "");
    }

    #[test]
    fn custom_values_join_into_one_style_attribute() {
        let style =
            ImageStyle::from_directives("board-member-img", Some("custom:30%"), Some("custom:1.2"));
        assert_eq!(style.class, "board-member-img offset-custom zoom-custom");
        assert_eq!(
            style.style_attr(),
            " style=\"object-position: center 30%; transform: scale(1.2);\""
        );
    }

    #[test]
    fn unknown_directives_are_ignored() {
        let style = ImageStyle::from_directives("alumni-img", Some("left"), Some("Huge"));
        assert_eq!(style.class, "alumni-img");
        assert!(style.declarations.is_empty());
    }
}
