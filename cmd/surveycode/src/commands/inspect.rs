//! Survey code inspection command.

use clap::Args;

use receipt_surveycode::{inspect, Layout, SurveyCode};

use super::{output_result, print_verbose};
use crate::Cli;

/// Decode the fields of a survey code.
///
/// Prints the store id, visit type, order id, purchase time (to the minute)
/// and whether the check digit is valid.
#[derive(Args)]
pub struct InspectCommand {
    /// Survey code, e.g. CN6W-NQ9L-YH76
    code: String,
    /// Read the code with a single-symbol order field (XXXX-XXXX-XXX)
    #[arg(long)]
    compact: bool,
}

impl InspectCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let layout = if self.compact {
            Layout::COMPACT
        } else {
            Layout::OBSERVED
        };
        let code = SurveyCode::parse_with_layout(&self.code, layout)?;
        print_verbose(cli, &format!("Layout: {:?}", layout));

        let decoded = inspect(&code)?;
        output_result(&decoded, cli)
    }
}
