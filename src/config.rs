use crate::ast::DEFAULT_MAX_DEPTH;

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name reported in error messages, e.g. `<stdin>` or a file path.
    pub source_name: String,
    /// Deepest nesting of parentheses and unary signs the parser accepts.
    pub max_depth: usize,
}

impl Config {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::default()
        }
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_name: "<stdin>".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
