use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// foodgram - recipes, shopping carts and printable shopping lists
#[derive(Parser)]
#[command(name = "foodgram")]
#[command(about = "Recipe sharing service with printable shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Write a user's shopping list PDF to a file
    ShoppingList {
        /// User id whose cart is exported
        #[arg(long)]
        user: String,

        /// Destination file
        #[arg(long, default_value = "shopping_list.pdf")]
        output: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodgram::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodgram::observability::init_observability(
        "foodgram",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(config).await,
        Commands::Reset => cli::migrate::reset(config).await,
        Commands::ShoppingList { user, output } => {
            cli::shopping_list::export(config, user, output).await
        }
    }
}
