//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use webfetch::{DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Fetch URLs and download files from the command line.
///
/// Webfetch sends a single HTTP request per invocation and prints the
/// response body (or the saved file path for downloads). Timeouts and
/// transport failures are reported in-band as the NONE and UNDEFINED_ERROR
/// status codes.
#[derive(Parser, Debug)]
#[command(name = "webfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the full response as JSON instead of the body text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a GET request and print the response body
    Get {
        /// URL to request
        url: String,

        /// Header line in "Name: Value" form (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Request body to send
        #[arg(short = 'd', long = "data")]
        body: Option<String>,

        /// Timeout in seconds for the whole request
        #[arg(short = 't', long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
        timeout: f64,
    },

    /// Send a POST request and print the response body
    Post {
        /// URL to request
        url: String,

        /// Header line in "Name: Value" form (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Request body to send
        #[arg(short = 'd', long = "data")]
        body: Option<String>,

        /// Timeout in seconds for the whole request
        #[arg(short = 't', long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
        timeout: f64,
    },

    /// Download a file and print where it was saved
    Download {
        /// URL to download
        url: String,

        /// Header line in "Name: Value" form (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Timeout in seconds for the whole request
        #[arg(short = 't', long, default_value_t = DEFAULT_DOWNLOAD_TIMEOUT_SECS)]
        timeout: f64,

        /// Destination directory (default: the user's Downloads folder)
        #[arg(long)]
        dest: Option<PathBuf>,
    },
}
