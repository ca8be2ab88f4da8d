//! Survey code generation command.

use chrono::Local;
use clap::Args;
use serde::Serialize;

use receipt_surveycode::{Assembler, FormFields, Receipt, SurveyCode, VisitType};

use super::{
    get_context, output_result, parse_timestamp, print_fields, print_verbose, random_order_id,
    wants_record,
};
use crate::Cli;

/// Generate a survey code for a receipt.
///
/// Store id, visit type and price fall back to the active context. Without
/// --order-id a random order id is drawn; without --purchased the current
/// local time is used.
#[derive(Args)]
pub struct GenerateCommand {
    /// Store id printed on the receipt
    #[arg(long)]
    store_id: Option<u64>,
    /// Order id printed on the receipt
    #[arg(long)]
    order_id: Option<u64>,
    /// Visit type (default: 3)
    #[arg(long)]
    visit_type: Option<u8>,
    /// Purchase time, e.g. 2024-09-01T13:47:52
    #[arg(long)]
    purchased: Option<String>,
    /// Price paid, e.g. 2.99; adds the entry form fields to the output
    #[arg(long)]
    price: Option<String>,
}

#[derive(Serialize)]
struct GenerateResult {
    receipt: Receipt,
    code: SurveyCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FormFields>,
}

impl GenerateCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?.unwrap_or_default();
        if !ctx.name.is_empty() {
            print_verbose(cli, &format!("Using context: {}", ctx.name));
        }

        let store_id = match self.store_id.or(ctx.store_id) {
            Some(id) => id,
            None => anyhow::bail!("store id is required, use --store-id or a context with one"),
        };
        let order_id = match self.order_id {
            Some(id) => id,
            None => {
                let id = random_order_id()?;
                print_verbose(cli, &format!("Random order id: {}", id));
                id
            }
        };
        let visit_type = self
            .visit_type
            .or(ctx.visit_type)
            .map(VisitType)
            .unwrap_or_default();
        let purchased = match &self.purchased {
            Some(ts) => parse_timestamp(ts)?,
            None => Local::now().naive_local(),
        };

        let receipt = Receipt::new(store_id, order_id, purchased).with_visit_type(visit_type.0);
        print_verbose(
            cli,
            &format!(
                "Store {}, order {}, visit type {}, purchased {}",
                store_id, order_id, visit_type, purchased
            ),
        );

        let code = Assembler::new().assemble(&receipt)?;

        let price = self
            .price
            .clone()
            .or_else(|| (!ctx.price.is_empty()).then(|| ctx.price.clone()));
        let fields = form_fields(&code, price.as_deref())?;

        if !wants_record(cli) {
            println!("{}", code);
            if let Some(fields) = &fields {
                print_fields(fields);
            }
            return Ok(());
        }

        output_result(
            &GenerateResult {
                receipt,
                code,
                fields,
            },
            cli,
        )
    }
}

/// Maps the code onto the entry form when a price is known. An invalid price
/// fails the command even when only the code is printed.
fn form_fields(code: &SurveyCode, price: Option<&str>) -> anyhow::Result<Option<FormFields>> {
    Ok(price.map(|p| FormFields::new(code, p)).transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_code() -> SurveyCode {
        "CN6W-NQ9L-YH76".parse().unwrap()
    }

    #[test]
    fn test_form_fields_with_price() {
        let fields = form_fields(&sample_code(), Some("2.99")).unwrap().unwrap();
        assert_eq!(fields.cn1, "CN6W");
        assert_eq!(fields.amount_spent1, "2");
        assert_eq!(fields.amount_spent2, "99");
    }

    #[test]
    fn test_form_fields_without_price() {
        assert!(form_fields(&sample_code(), None).unwrap().is_none());
    }

    #[test]
    fn test_form_fields_rejects_bad_price() {
        let err = form_fields(&sample_code(), Some("bad")).unwrap_err();
        assert!(err.to_string().contains("invalid price"), "{err}");
    }
}
