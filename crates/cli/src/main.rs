//! Magma CLI - terminal storefront adapter for the cart engine.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart
//! magma-cli add --name "Remera" --price 15000
//!
//! # Show the rendered cart
//! magma-cli show
//!
//! # Remove the item at display index 0
//! magma-cli remove 0
//!
//! # Empty the cart (prompts unless --yes)
//! magma-cli clear
//!
//! # Print the WhatsApp hand-off link for the current cart
//! magma-cli send
//! ```
//!
//! The binary owns everything the engine treats as UI glue: argument
//! parsing, the clear-confirmation prompt, and writing to the terminal.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is this binary's UI.
#![allow(clippy::print_stdout)]

use std::io::{self, Write as _};

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use magma_cart::{
    CartConfig, CartStore, CartView, ClearOutcome, JsonFileStorage, PaymentInfo, format_order,
    whatsapp_url,
};

#[derive(Parser)]
#[command(name = "magma-cli")]
#[command(author, version, about = "Magma Fit House cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rendered cart
    Show,
    /// Add a product to the cart
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price in pesos, above zero
        #[arg(short, long)]
        price: Decimal,
    },
    /// Remove the item at a display index
    Remove {
        /// 0-based index from `show`
        index: usize,
    },
    /// Empty the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print the WhatsApp hand-off link for the current cart
    Send,
    /// Print bank transfer details
    Payment,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let mut store = CartStore::hydrate(JsonFileStorage::new(&config.slot_path));

    match cli.command {
        Commands::Show => print_view(&store.view()),
        Commands::Add { name, price } => {
            let item = store.add_item(&name, price)?;
            println!("Agregado: {} - {}", item.name, item.unit_price);
        }
        Commands::Remove { index } => match store.remove_item(index) {
            Some(item) => println!("Eliminado: {}", item.name),
            None => println!("No hay producto en la posición {index}"),
        },
        Commands::Clear { yes } => {
            let outcome = store.clear(|| yes || confirm_clear());
            match outcome {
                ClearOutcome::Cleared { removed } => {
                    println!("Carrito vaciado ({removed} productos)");
                }
                ClearOutcome::AlreadyEmpty => println!("El carrito ya está vacío"),
                ClearOutcome::Declined => println!("Carrito sin cambios"),
            }
        }
        Commands::Send => {
            let message = format_order(store.items())?;
            let url = whatsapp_url(&message, &config.whatsapp_phone)?;
            println!("{url}");
        }
        Commands::Payment => println!("{}", PaymentInfo::MAGMA.message()),
    }

    Ok(())
}

fn print_view(view: &CartView) {
    if let Some(placeholder) = view.placeholder {
        println!("{placeholder}");
        return;
    }
    for line in &view.lines {
        println!("[{}] {} - {}", line.index, line.name, line.price);
    }
    if let Some(total) = &view.total {
        println!("{} {}", total.label, total.amount);
    }
    println!("Productos: {}", view.item_count);
}

/// Synchronous decision prompt injected into `clear`.
fn confirm_clear() -> bool {
    print!("¿Estás seguro de que quieres vaciar el carrito? [s/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(
        line.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}
