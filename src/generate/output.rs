/// Output buffer that accumulates generated component code
pub struct Output {
    code: String,
    indent: usize,
}

const INDENT: &str = "  ";

impl Output {
    pub fn new() -> Self {
        Self {
            code: String::new(),
            indent: 0,
        }
    }

    /// Add text as-is, without indentation or newline
    pub fn push(&mut self, text: &str) {
        self.code.push_str(text);
    }

    /// Add one line at the current indentation
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.code.push_str(INDENT);
        }
        self.code.push_str(text);
        self.newline();
    }

    /// Add a newline
    pub fn newline(&mut self) {
        self.code.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Finish and return the generated code
    pub fn finish(self) -> String {
        self.code
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
