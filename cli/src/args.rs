use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use curlgen_core::{DataFormat, FormError, Header, Method};

#[derive(Parser, Debug)]
#[command(name = "curlgen", author, version, about = "Build curl command lines from request options", long_about = None)]
pub struct Cli {
    /// TOML file with default options for `build`
    #[arg(long, global = true, env = "CURLGEN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Copy the printed output to the system clipboard
    #[arg(long, global = true)]
    pub copy: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a command from curl-style flags
    Build(BuildArgs),

    /// Format a JSON options document
    Render {
        /// Options file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Show the starting form
    Example {
        /// Print the options document instead of the command
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// HTTP method
    #[arg(short = 'X', long = "request", value_name = "METHOD", value_parser = parse_method)]
    pub method: Option<Method>,

    /// Header as `Key: Value`, repeatable
    #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
    pub headers: Vec<Header>,

    /// Request body (POST, PUT and PATCH only)
    #[arg(short = 'd', long = "data")]
    pub data: Option<String>,

    /// How the body is passed: raw, binary or urlencoded
    #[arg(long = "data-format", value_name = "FORMAT", value_parser = parse_data_format)]
    pub data_format: Option<DataFormat>,

    /// Skip TLS verification (-k)
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Verbose curl output (-v)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Request a compressed response (--compressed)
    #[arg(long)]
    pub compressed: bool,

    /// File to read cookies from (-b)
    #[arg(short = 'b', long = "cookie", value_name = "FILE")]
    pub cookie_input_file: Option<String>,

    /// File to write cookies to (-c)
    #[arg(short = 'c', long = "cookie-jar", value_name = "FILE")]
    pub cookie_output_file: Option<String>,

    /// File to write the response to (-o)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    pub url: String,
}

fn parse_method(s: &str) -> Result<Method, FormError> {
    s.parse()
}

fn parse_header(s: &str) -> Result<Header, FormError> {
    s.parse()
}

fn parse_data_format(s: &str) -> Result<DataFormat, FormError> {
    s.parse()
}
