use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Unexpected character: [{0}]")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Error while parsing number: {0}")]
    MalformedNumber(String),
}

/// A reported lexical error and where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: u32,
    /// Extra context printed after "Error", e.g. " at end". Usually empty.
    pub location: String,
    pub error: ScanError,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line, self.location, self.error)
    }
}

/// Collects diagnostics in report order and remembers whether any were seen.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
    had_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, line: u32, location: &str, error: ScanError) {
        self.diagnostics.push(Diagnostic {
            line,
            location: String::from(location),
            error,
        });
        self.had_error = true;
    }

    pub fn error(&mut self, line: u32, error: ScanError) {
        self.report(line, "", error);
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Hands back everything reported so far and clears the error state.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.had_error = false;
        std::mem::take(&mut self.diagnostics)
    }

    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.had_error = false;
    }
}
