use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "boltbox", version)]
#[command(about = "Lightning stack development environment CLI", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a development environment
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Check out only the production repository
        #[arg(long)]
        production: bool,

        /// Clone over SSH instead of HTTPS
        #[arg(long)]
        ssh: bool,
    },

    /// Boot the development VM
    Boot {
        /// Network to run (mainnet, testnet, regtest, simnet)
        #[arg(short, long, default_value = "regtest")]
        network: String,
    },

    /// Halt the development VM
    Shutdown,

    /// Destroy the development VM
    Destroy {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List the service containers
    Containers,

    /// Rebuild and restart one service container
    Rebuild {
        /// Service name
        service: String,
    },

    /// Recreate the service containers
    Reload,

    /// Invoke the application CLI inside its container
    App {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Follow service logs
    Logs {
        /// Extra arguments for `docker-compose logs` (defaults to following all services)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run a command inside the VM
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Open an interactive shell in the VM
    Ssh,

    /// Invoke bitcoin-cli inside the bitcoind container
    BitcoinCli {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Invoke lncli inside the lnd container
    Lncli {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Mine a block on a fixed interval
    AutoMine {
        /// Seconds to sleep between blocks
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        interval_seconds: u64,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BOLTBOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    // Parse errors exit 1 (help and version displays exit 0), matching the
    // wrapper's documented exit-code contract rather than clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    match dispatch(cli.command) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            process::exit(1);
        }
    }
}

fn dispatch(command: Commands) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;

    match command {
        Commands::Init { dir, production, ssh } => commands::init(&dir, production, ssh),
        Commands::Boot { network } => commands::boot(&cwd, &network),
        Commands::Shutdown => commands::shutdown(&cwd),
        Commands::Destroy { force } => commands::destroy(&cwd, force),
        Commands::Containers => commands::containers(&cwd),
        Commands::Rebuild { service } => commands::rebuild(&cwd, &service),
        Commands::Reload => commands::reload(&cwd),
        Commands::App { args } => commands::app(&cwd, &args),
        Commands::Logs { args } => commands::logs(&cwd, &args),
        Commands::Run { command } => commands::run(&cwd, &command),
        Commands::Ssh => commands::ssh(&cwd),
        Commands::BitcoinCli { args } => commands::bitcoin_cli(&cwd, &args),
        Commands::Lncli { args } => commands::lncli(&cwd, &args),
        Commands::AutoMine { interval_seconds } => commands::auto_mine(&cwd, interval_seconds),
    }
}
