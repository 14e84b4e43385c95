/// Turns an alumni story into `<p>` blocks. Literal `\n` escapes count as
/// line breaks; blank lines separate paragraphs and single breaks become
/// `<br>`. Paragraphs are joined onto new lines indented to `indent`.
pub fn render_story(raw: &str, indent: usize) -> String {
    let text = raw.replace("\\n", "\n");
    let separator = format!("\n{}", " ".repeat(indent));
    text.split("\n\n")
        .map(|paragraph| paragraph.trim().replace('\n', "<br>"))
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!("<p>{paragraph}</p>"))
        .collect::<Vec<_>>()
        .join(&separator)
}
