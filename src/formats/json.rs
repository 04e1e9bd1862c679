//! JSON array output

use super::registry::{FormatError, TokenFormatter};
use crate::tokens::TokenList;

pub struct JsonFormatter;

impl TokenFormatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, tokens: &TokenList) -> Result<String, FormatError> {
        let mut output = serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::Encoding(e.to_string()))?;
        output.push('\n');
        Ok(output)
    }

    fn description(&self) -> &'static str {
        "JSON array of token names"
    }
}
