//! Entry form mapping command.

use clap::Args;

use receipt_surveycode::{FormFields, SurveyCode};

use super::{get_context, output_result, print_fields, wants_record};
use crate::Cli;

/// Map a survey code and price onto the entry form.
///
/// The code fills CN1-CN3 and the price fills AmountSpent1 (whole units) and
/// AmountSpent2 (cents).
#[derive(Args)]
pub struct FieldsCommand {
    /// Survey code, e.g. CN6W-NQ9L-YH76
    code: String,
    /// Price paid, e.g. 2.99 (default: the context price)
    #[arg(long)]
    price: Option<String>,
}

impl FieldsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let price = match &self.price {
            Some(p) => p.clone(),
            None => match get_context(cli)? {
                Some(ctx) if !ctx.price.is_empty() => ctx.price,
                _ => anyhow::bail!("price is required, use --price or a context with one"),
            },
        };

        let code: SurveyCode = self.code.parse()?;
        let fields = FormFields::new(&code, &price)?;

        if wants_record(cli) {
            return output_result(&fields, cli);
        }
        print_fields(&fields);
        Ok(())
    }
}
