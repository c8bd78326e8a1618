use log::warn;

use crate::types::TokenWarning;

/// Receives the non-fatal problems found while building a graph.
pub trait Diagnostics {
    fn token_warning(&mut self, warning: TokenWarning);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    pub warnings: usize,
}

impl Diagnostics for LogDiagnostics {
    fn token_warning(&mut self, warning: TokenWarning) {
        self.warnings += 1;
        warn!("{}", warning);
    }
}

impl Diagnostics for Vec<TokenWarning> {
    fn token_warning(&mut self, warning: TokenWarning) {
        self.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgraph_core::UnquoteError;

    fn warning() -> TokenWarning {
        TokenWarning {
            package: "example.com/a".to_string(),
            token: "\"b\\q\"".to_string(),
            line: 4,
            error: UnquoteError::InvalidEscape('q'),
        }
    }

    #[test]
    fn test_log_diagnostics_counts() {
        let mut diagnostics = LogDiagnostics::default();
        diagnostics.token_warning(warning());
        diagnostics.token_warning(warning());
        assert_eq!(diagnostics.warnings, 2);
    }

    #[test]
    fn test_vec_collects() {
        let mut collected: Vec<TokenWarning> = Vec::new();
        collected.token_warning(warning());
        assert_eq!(collected, vec![warning()]);
    }

    #[test]
    fn test_warning_display() {
        assert_eq!(
            warning().to_string(),
            "example.com/a: line 4: cannot unquote import \"b\\q\": invalid escape sequence '\\q'"
        );
    }
}
