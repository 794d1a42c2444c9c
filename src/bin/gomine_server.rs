//! gomine Server Binary
//!
//! Bind TCP listener dan accept koneksi. Client handler masih no-op.
//!
//! Usage:
//!   cargo run --release --bin gomine_server [OPTIONS]

use std::net::SocketAddr;

use gomine::network::{Server, ServerConfig};
use tracing_subscriber::EnvFilter;

struct Args {
    config: ServerConfig,
    verbose: bool,
}

fn print_help() {
    println!("gomine server - game server accept loop\n");
    println!("Usage: gomine_server [OPTIONS]\n");
    println!("Options:");
    println!("  -b, --bind <ADDR>     Bind address (default: 0.0.0.0:25565)");
    println!("  -v, --verbose         Debug logging (RUST_LOG overrides)");
    println!("  -h, --help            Show this help");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        config: ServerConfig::default(),
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} needs an address", args[i]))?;
                parsed.config.bind_addr = value
                    .parse::<SocketAddr>()
                    .map_err(|e| format!("invalid bind address {:?}: {}", value, e))?;
                i += 1;
            }
            "--verbose" | "-v" => {
                parsed.verbose = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown option {:?}", other)),
        }
        i += 1;
    }

    Ok(parsed)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            print_help();
            std::process::exit(2);
        }
    };

    init_tracing(args.verbose);

    let result = Server::bind(&args.config).and_then(|mut server| server.run());
    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
