//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use solpick_core::{Wallet, WalletPartition};

use crate::{logging, wallets};

#[derive(Parser)]
#[command(name = "solpick")]
#[command(version)]
#[command(about = "Wallet selection picker for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON wallet list (defaults to a built-in sample set)
    #[arg(long, value_name = "FILE", global = true)]
    wallets: Option<PathBuf>,

    /// Style-class token forwarded to the dialog service (repeatable)
    #[arg(long = "class", value_name = "TOKEN")]
    panel_class: Vec<String>,

    /// Write logs to this file (the picker owns the terminal, so logging
    /// is file-only)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the partition and default recommendation without opening the picker
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref())?;

    let wallets = wallets::load(cli.wallets.as_deref())?;

    match cli.command {
        Some(Commands::List) => {
            list_wallets(&wallets);
            Ok(())
        }
        None => pick(wallets, cli.panel_class),
    }
}

fn pick(wallets: Vec<Wallet>, panel_class: Vec<String>) -> Result<()> {
    match solpick_tui::run_picker(wallets, panel_class)? {
        Some(name) => {
            tracing::info!(wallet = %name, "wallet selected");
            println!("{name}");
        }
        None => eprintln!("No wallet selected."),
    }
    Ok(())
}

fn list_wallets(wallets: &[Wallet]) {
    let partition = WalletPartition::new(wallets);

    if partition.installed.is_empty() {
        println!("installed: (none)");
    } else {
        println!("installed:");
        for wallet in &partition.installed {
            println!("  {}", wallet.name);
        }
    }

    if partition.other.is_empty() {
        println!("other: (none)");
    } else {
        println!("other:");
        for wallet in &partition.other {
            println!("  {} ({})", wallet.name, wallet.ready_state.label());
        }
    }

    match &partition.recommended {
        Some(wallet) => println!("recommended: {}", wallet.name),
        None => println!("recommended: (none)"),
    }
}
