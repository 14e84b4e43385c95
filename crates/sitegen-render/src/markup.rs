const INDENT: usize = 4;

/// Line-oriented HTML builder. Every line starts on a fresh `\n` and is
/// indented from a fixed base column.
pub(crate) struct Markup {
    out: String,
    base: usize,
}

impl Markup {
    pub(crate) fn new(base: usize) -> Self {
        Self {
            out: String::new(),
            base,
        }
    }

    pub(crate) fn line(&mut self, depth: usize, text: &str) {
        self.out.push('\n');
        self.out
            .extend(std::iter::repeat(' ').take(self.base + depth * INDENT));
        self.out.push_str(text);
    }

    /// Continues the current line.
    pub(crate) fn append(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub(crate) fn column(&self, depth: usize) -> usize {
        self.base + depth * INDENT
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
