//! Utility functions for CLI commands.

use chrono::NaiveDateTime;
use receipt_cli::config::{load_config, Config, Context};
use receipt_cli::{Output, OutputFormat};
use receipt_surveycode::FormFields;

use crate::Cli;

const APP_NAME: &str = "surveycode";

/// Accepted purchase time formats, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Gets the global configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(APP_NAME, cli.config.as_deref())
}

/// Gets the context to use, if any.
///
/// A context named with `-c` must exist; without `-c` the current context is
/// used when one is set.
pub fn get_context(cli: &Cli) -> anyhow::Result<Option<Context>> {
    let cfg = get_config(cli)?;

    match cfg.resolve_context(cli.context.as_deref()) {
        Some(ctx) => Ok(Some(ctx.clone())),
        None => match cli.context.as_deref() {
            Some(name) if !name.is_empty() => anyhow::bail!("context '{}' not found", name),
            _ => Ok(None),
        },
    }
}

/// Parses a purchase time such as `2024-09-01T13:47:52`.
pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| {
            anyhow::anyhow!("invalid purchase time '{}', expected YYYY-MM-DDTHH:MM[:SS]", s)
        })
}

/// Draws a random order id in `0..100`.
pub fn random_order_id() -> anyhow::Result<u64> {
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf).map_err(|e| anyhow::anyhow!("random order id: {}", e))?;
    Ok(u64::from_le_bytes(buf) % 100)
}

/// Returns true if the result should be written as a structured record.
pub fn wants_record(cli: &Cli) -> bool {
    cli.json || cli.output.is_some()
}

/// Outputs result as JSON or YAML.
pub fn output_result<T: serde::Serialize>(result: &T, cli: &Cli) -> anyhow::Result<()> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Yaml
    };
    Output::new(format, cli.output.clone()).write(result)
}

/// Formats the entry form fields as aligned `name value` lines.
pub fn format_fields(fields: &FormFields) -> String {
    fields
        .pairs()
        .iter()
        .map(|(name, value)| format!("{:<14} {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the entry form fields.
pub fn print_fields(fields: &FormFields) {
    println!("{}", format_fields(fields));
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    receipt_cli::print_verbose(cli.verbose, msg);
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_timestamp_formats() {
        let full = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(13, 47, 52)
            .unwrap();
        assert_eq!(parse_timestamp("2024-09-01T13:47:52").unwrap(), full);
        assert_eq!(parse_timestamp(" 2024-09-01 13:47:52 ").unwrap(), full);

        let minute = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(13, 47, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-09-01T13:47").unwrap(), minute);
        assert_eq!(parse_timestamp("2024-09-01 13:47").unwrap(), minute);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("2024-09-01").is_err());
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2024-13-01T00:00:00").is_err());
    }

    #[test]
    fn test_format_fields() {
        let code = "CN6W-NQ9L-YH76".parse().unwrap();
        let fields = FormFields::new(&code, "2.99").unwrap();
        let text = format_fields(&fields);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "CN1            CN6W");
        assert_eq!(lines[4], "AmountSpent2   99");
    }

    #[test]
    fn test_random_order_id_range() {
        for _ in 0..50 {
            assert!(random_order_id().unwrap() < 100);
        }
    }
}
