use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "breadbox-cli", version, about = "Breadbox CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Bread ledger and progression
    Bakery {
        #[command(subcommand)]
        action: commands::bakery::BakeryAction,
    },
    /// User settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action).await,
        Commands::Bakery { action } => commands::bakery::run(action).await,
        Commands::Settings { action } => commands::settings::run(action).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
