//! Command-line interface for querying IP2Location and IP2Proxy BIN
//! databases.

#![forbid(unsafe_code)]

use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::bail;
use clap::Parser;
use ip2bin::Database;

#[derive(Parser, Debug)]
#[command(name = "ip2bin", version, about = "Query IP2Location and IP2Proxy binary databases")]
struct Cli {
    /// Path to the BIN database file.
    db_path: PathBuf,

    /// IP addresses to look up. With no addresses, print information about
    /// the database instead.
    addresses: Vec<String>,

    /// JSON output, one object per address.
    #[arg(long)]
    json: bool,

    /// Single-line text output, or unindented JSON.
    #[arg(long)]
    compact: bool,

    /// Exit with an error on the first address without a record.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ip2bin: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let db = Database::open(&cli.db_path)?;

    if cli.addresses.is_empty() {
        match cli.json {
            true => println!("{}", serde_json::Value::from(db.to_string())),
            false => println!("{db}"),
        }
        return Ok(());
    }

    for addr in &cli.addresses {
        // an unparseable address can't have a record, so treat it as a miss
        let record = match addr.parse::<IpAddr>() {
            Ok(ip) => db.lookup(ip)?,
            Err(_) => None,
        };
        match record {
            Some(record) => match cli.json {
                true => {
                    let obj = record.to_json()?;
                    match cli.compact {
                        true => println!("{}", serde_json::to_string(&obj)?),
                        false => println!("{}", serde_json::to_string_pretty(&obj)?),
                    }
                }
                false => println!("{}", record.format(true, !cli.compact)),
            },
            None if cli.strict => bail!("lookup {addr:?}: not found"),
            None => {}
        }
    }
    Ok(())
}
