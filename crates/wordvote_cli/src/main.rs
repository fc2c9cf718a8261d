//! WordVote CLI
//!
//! Runs the submission endpoint and offers offline helpers.
//!
//! # Commands
//!
//! - `serve` - Run the HTTP submission endpoint
//! - `submit` - Record one submission without going through HTTP
//! - `lookup` - Check whether a word is in the dictionary
//!
//! Settings not given as flags come from `WORDVOTE_*` environment variables.

mod commands;

use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordvote_server::{ServerConfig, ServerResult};

/// WordVote submission endpoint and tools.
#[derive(Parser)]
#[command(name = "wordvote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dictionary file (one word per line)
    #[arg(global = true, short, long)]
    dictionary: Option<PathBuf>,

    /// Directory receiving pending submissions
    #[arg(global = true, short, long)]
    queue_dir: Option<PathBuf>,

    /// Scan the dictionary file on every lookup instead of loading it
    #[arg(global = true, long)]
    scan_dictionary: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP submission endpoint
    Serve {
        /// Address to listen on
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Skip fsync when publishing records
        #[arg(long)]
        no_sync: bool,
    },

    /// Record one submission and print the JSON response
    Submit {
        /// Slot identifier
        #[arg(short, long)]
        slot: String,

        /// Word guess
        #[arg(short, long)]
        word: String,

        /// User identifier
        #[arg(short, long)]
        user: String,

        /// Origin address written into the record
        #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        origin: IpAddr,
    },

    /// Check whether a word is in the dictionary
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Show version information
    Version,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    fn config(&self) -> ServerResult<ServerConfig> {
        let mut config = ServerConfig::from_env()?;
        if let Some(path) = &self.dictionary {
            config = config.with_dictionary(path);
        }
        if let Some(path) = &self.queue_dir {
            config = config.with_queue_dir(path);
        }
        if self.scan_dictionary {
            config = config.with_scan_dictionary(true);
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Serve { bind, no_sync } => {
            let mut config = cli.config()?;
            if let Some(addr) = bind {
                config = config.with_bind_addr(*addr);
            }
            if *no_sync {
                config = config.with_sync_writes(false);
            }
            commands::serve::run(config)?;
        }
        Commands::Submit {
            slot,
            word,
            user,
            origin,
        } => {
            commands::submit::run(&cli.config()?, *origin, slot, word, user)?;
        }
        Commands::Lookup { word } => {
            commands::lookup::run(&cli.config()?, word)?;
        }
        Commands::Version => {
            println!("WordVote CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("WordVote Core v{}", wordvote_core::VERSION);
        }
    }

    Ok(())
}
