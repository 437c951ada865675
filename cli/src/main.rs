//! wirerpc CLI — send ad-hoc JSON-RPC calls from the terminal.
//!
//! Usage:
//! ```bash
//! # Send a single call
//! wirerpc call --url https://cloudflare-eth.com --method eth_blockNumber
//!
//! # With parameters (JSON array or object)
//! wirerpc call --url https://cloudflare-eth.com \
//!     --method eth_getBlockByNumber --params '["0x1", false]'
//!
//! # Send several calls as one HTTP batch
//! wirerpc batch --url https://cloudflare-eth.com \
//!     --calls '[{"method":"eth_chainId"},{"method":"eth_blockNumber"}]'
//! ```

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use wirerpc_core::Params;
use wirerpc_http::{BatchCall, HttpProvider};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "call" => cmd_call(&args[2..]).await,
        "batch" => cmd_batch(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("wirerpc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("wirerpc {}", env!("CARGO_PKG_VERSION"));
    println!("Send JSON-RPC 2.0 calls from the terminal\n");
    println!("USAGE:");
    println!("    wirerpc <COMMAND>\n");
    println!("COMMANDS:");
    println!("    call       Send a single JSON-RPC call");
    println!("    batch      Send several calls as one HTTP batch");
    println!("    version    Print version");
    println!("    help       Print this help\n");
    println!("CALL FLAGS:");
    println!("    --url <URL>        RPC endpoint URL        [required]");
    println!("    --method <NAME>    Method name             [required]");
    println!("    --params <JSON>    Parameters (array/object)");
    println!("    --rps <N>          Max requests per second\n");
    println!("BATCH FLAGS:");
    println!("    --url <URL>        RPC endpoint URL        [required]");
    println!("    --calls <JSON>     Array of {{\"method\", \"params\"?}} entries  [required]");
}

async fn cmd_call(args: &[String]) -> Result<(), String> {
    let url = parse_flag(args, "--url").ok_or("--url is required")?;
    let method = parse_flag(args, "--method").ok_or("--method is required")?;

    let params = match parse_flag(args, "--params") {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(&raw).map_err(|e| format!("--params is not JSON: {e}"))?;
            Params::from_serialize(value).map_err(|e| e.to_string())?
        }
        None => None,
    };

    let provider = HttpProvider::new(&*url, options_from(args)?);
    let result = provider
        .request(&method, params)
        .await
        .map_err(|e| e.to_string())?;

    println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
    Ok(())
}

async fn cmd_batch(args: &[String]) -> Result<(), String> {
    let url = parse_flag(args, "--url").ok_or("--url is required")?;
    let raw = parse_flag(args, "--calls").ok_or("--calls is required")?;

    let calls: Vec<BatchCall> =
        serde_json::from_str(&raw).map_err(|e| format!("--calls is not a call list: {e}"))?;

    let provider = HttpProvider::new(&*url, options_from(args)?);
    let results = provider
        .request_batch(calls)
        .await
        .map_err(|e| e.to_string())?;

    println!("{}", serde_json::to_string_pretty(&results).unwrap_or_default());
    Ok(())
}

fn options_from(args: &[String]) -> Result<wirerpc_core::ClientOptions, String> {
    let mut options = wirerpc_core::ClientOptions::default();
    if let Some(raw) = parse_flag(args, "--rps") {
        let rate: u32 = raw.parse().map_err(|_| "--rps must be a positive integer")?;
        if rate == 0 {
            return Err("--rps must be a positive integer".into());
        }
        options.requests_per_second = Some(rate);
    }
    Ok(options)
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}
