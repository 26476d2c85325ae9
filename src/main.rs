//! CLI entry point for the webfetch tool.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use webfetch::{Client, Content, DownloadOptions, RequestOptions, Response, StatusCode};

mod cli;

use cli::{Args, Command};

fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let client = Client::new();

    let response = match args.command {
        Command::Get {
            ref url,
            ref headers,
            ref body,
            timeout,
        } => client.get_with(
            url,
            &RequestOptions {
                headers: headers.clone(),
                body: body.clone(),
                timeout_secs: timeout,
            },
        ),
        Command::Post {
            ref url,
            ref headers,
            ref body,
            timeout,
        } => client.post_with(
            url,
            &RequestOptions {
                headers: headers.clone(),
                body: body.clone(),
                timeout_secs: timeout,
            },
        ),
        Command::Download {
            ref url,
            ref headers,
            timeout,
            ref dest,
        } => client.download_with(
            url,
            &DownloadOptions {
                headers: headers.clone(),
                timeout_secs: timeout,
                dest_dir: dest.clone(),
            },
        ),
    };

    info!(status = %response.status, "request finished");
    print_response(&response, args.json)?;

    if response.status == StatusCode::UNDEFINED_ERROR {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_response(response: &Response, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }
    match &response.content {
        Content::Body(text) => println!("{text}"),
        Content::SavedPath(path) => println!("{}", path.display()),
    }
    Ok(())
}
