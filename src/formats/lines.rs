//! Plain text output, one token per line

use super::registry::{FormatError, TokenFormatter};
use crate::tokens::TokenList;

pub struct LinesFormatter;

impl TokenFormatter for LinesFormatter {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn render(&self, tokens: &TokenList) -> Result<String, FormatError> {
        Ok(tokens.iter().map(|token| format!("{token}\n")).collect())
    }

    fn description(&self) -> &'static str {
        "One token name per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenName;

    #[test]
    fn test_lines() {
        let tokens: TokenList = vec![TokenName::new("word"), TokenName::new("word")].into();
        assert_eq!(LinesFormatter.render(&tokens).unwrap(), "word\nword\n");
    }

    #[test]
    fn test_empty_list_is_empty_output() {
        assert_eq!(LinesFormatter.render(&TokenList::new()).unwrap(), "");
    }
}
