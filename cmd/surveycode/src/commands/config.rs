//! Store profile management commands.

use clap::{Args, Subcommand};

use receipt_cli::config::Context as CliContext;
use receipt_surveycode::{codec, Field, Layout, VisitType};

use super::{get_config, print_success};
use crate::Cli;

/// Manage store profiles.
///
/// Contexts hold the store id, visit type and price for a store you visit
/// often, similar to kubectl's context management.
///
/// Configuration is stored in ~/.receipt-survey/surveycode/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Add a new context
    #[command(name = "add-context")]
    AddContext {
        /// Context name
        name: String,
        /// Store id (required)
        #[arg(long)]
        store_id: u64,
        /// Visit type
        #[arg(long)]
        visit_type: Option<u8>,
        /// Default price, e.g. 2.99
        #[arg(long)]
        price: Option<String>,
    },
    /// Delete a context
    #[command(name = "delete-context")]
    DeleteContext {
        /// Context name
        name: String,
    },
    /// Set the current context
    #[command(name = "use-context")]
    UseContext {
        /// Context name
        name: String,
    },
    /// Display the current context
    #[command(name = "get-context")]
    GetContext,
    /// List all contexts
    #[command(name = "list-contexts", alias = "get-contexts")]
    ListContexts,
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::AddContext {
                name,
                store_id,
                visit_type,
                price,
            } => {
                // Reject stores that can never produce a code.
                codec::encode_field(Field::Store, *store_id, Layout::OBSERVED.store_width)?;

                let mut cfg = get_config(cli)?;
                let ctx = CliContext {
                    store_id: Some(*store_id),
                    visit_type: *visit_type,
                    price: price.clone().unwrap_or_default(),
                    ..Default::default()
                };

                cfg.add_context(name, ctx)?;
                print_success(&format!("Context \"{}\" added successfully", name));
                Ok(())
            }

            ConfigSubcommand::DeleteContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.delete_context(name)?;
                print_success(&format!("Context \"{}\" deleted", name));
                Ok(())
            }

            ConfigSubcommand::UseContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.use_context(name)?;
                print_success(&format!("Switched to context \"{}\"", name));
                Ok(())
            }

            ConfigSubcommand::GetContext => {
                let cfg = get_config(cli)?;
                if cfg.current_context.is_empty() {
                    println!("No current context set");
                } else {
                    println!("{}", cfg.current_context);
                }
                Ok(())
            }

            ConfigSubcommand::ListContexts => {
                let cfg = get_config(cli)?;

                if cfg.contexts.is_empty() {
                    println!("No contexts configured");
                    return Ok(());
                }

                // Print table header
                println!("{:<8} {:<20} {:<10} {:<6} {}", "CURRENT", "NAME", "STORE", "VISIT", "PRICE");

                for name in cfg.list_contexts() {
                    let Some(ctx) = cfg.get_context(name) else {
                        continue;
                    };
                    let current = if name == cfg.current_context { "*" } else { "" };
                    let store = ctx.store_id.map(|s| s.to_string()).unwrap_or_default();
                    let visit = ctx.visit_type.unwrap_or(VisitType::DEFAULT.0);
                    println!(
                        "{:<8} {:<20} {:<10} {:<6} {}",
                        current, name, store, visit, ctx.price
                    );
                }

                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;

                println!("Config file: {}", cfg.path().display());
                println!("Current context: {}", cfg.current_context);
                println!("Contexts: {}", cfg.contexts.len());

                if !cfg.contexts.is_empty() {
                    println!("\nContext details:");

                    for name in cfg.list_contexts() {
                        let Some(ctx) = cfg.get_context(name) else {
                            continue;
                        };
                        println!("\n  {}:", name);
                        if let Some(store_id) = ctx.store_id {
                            println!("    Store ID: {}", store_id);
                        }
                        if let Some(visit_type) = ctx.visit_type {
                            println!("    Visit Type: {}", visit_type);
                        }
                        if !ctx.price.is_empty() {
                            println!("    Price: {}", ctx.price);
                        }
                    }
                }

                Ok(())
            }
        }
    }
}
