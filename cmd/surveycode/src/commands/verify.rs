//! Check digit verification command.

use clap::Args;

use receipt_surveycode::{SurveyCode, verify};

use super::print_success;
use crate::Cli;

/// Check a survey code's check digit.
///
/// Exits with an error if the last symbol does not match the check digit of
/// the symbols before it.
#[derive(Args)]
pub struct VerifyCommand {
    /// Survey code, e.g. CN6W-NQ9L-YH76
    code: String,
}

impl VerifyCommand {
    pub fn run(&self, _cli: &Cli) -> anyhow::Result<()> {
        let code = check_code(&self.code)?;
        print_success(&format!("{} has a valid check digit", code));
        Ok(())
    }
}

/// Parses a code of either layout length and checks its last symbol.
fn check_code(input: &str) -> anyhow::Result<SurveyCode> {
    let code = SurveyCode::parse_any(input)?;
    if !verify(code.as_str())? {
        anyhow::bail!("check digit mismatch for {}", input);
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_code_valid() {
        let code = check_code("cn6w nq9l yh76").unwrap();
        assert_eq!(code.to_string(), "CN6W-NQ9L-YH76");
    }

    #[test]
    fn test_check_code_rejects_short_input() {
        let err = check_code("MY").unwrap_err();
        assert!(err.to_string().contains("length"), "{err}");
    }

    #[test]
    fn test_check_code_rejects_mismatch() {
        let err = check_code("CN6W-NQ9L-YH7M").unwrap_err();
        assert!(err.to_string().contains("mismatch"), "{err}");
    }
}
