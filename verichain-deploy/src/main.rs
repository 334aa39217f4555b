// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `verichain-deploy`.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod common_args;
mod constants;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "verichain-deploy")]
#[command(about = "Deploy VeriChain contracts to EVM test networks", long_about = None)]
#[command(propagate_version = true)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: commands::Command,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Pick up PRIVATE_KEY and friends from a local .env, if there is one
    dotenv::dotenv().ok();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = simple_logger::init_with_level(log_level) {
        utils::print_error(&err);
        return ExitCode::FAILURE;
    }

    // One deployment per invocation, so a single-threaded runtime is enough
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(commands::exec(args.command)));

    // Report any error and return proper exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
