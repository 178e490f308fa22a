use anyhow::{Context, Result};
use clap::Parser;
use fullurl::{resolve_maybe_url_arg, ResolveContext};
use log::info;
use owo_colors::{colors::BrightCyan, OwoColorize};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Parser)]
#[clap(author,version,about,long_about=None)]
struct Cli {
    /// Endpoint path or URL to resolve; omit it to get the default API path
    url: Option<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Browser-like current-page origin to resolve relative input against
    #[clap(long, value_parser)]
    page_origin: Option<String>,

    /// Deployment host; takes precedence over the VERCEL_URL environment
    /// variable
    #[clap(long, value_parser)]
    host: Option<String>,

    /// Emit the resolved URL as JSON
    #[clap(short, long)]
    json: bool,
}

#[derive(Serialize)]
struct ResolvedOutput<'a> {
    href: &'a str,
    origin: String,
    pathname: &'a str,
}

fn main() -> Result<()> {
    let cli = &Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    // Explicit flags outrank ambient environment state.
    let mut context = ResolveContext::from_env();
    if cli.page_origin.is_some() {
        context.page_origin = cli.page_origin.clone();
    }
    if cli.host.is_some() {
        context.host_override = cli.host.clone();
    }

    let input = cli.url.as_deref();
    let resolved = resolve_maybe_url_arg(input, &context).with_context(|| {
        format!(
            "[ ERROR ] Unable to resolve ({}), check the value is a valid URL or path.",
            input.unwrap_or("")
        )
    })?;
    info!("[ INFO ] Resolved URL: {resolved}");

    let stdout = io::stdout();
    let mut stdout_handle = io::BufWriter::new(stdout);
    if cli.json {
        let output = ResolvedOutput {
            href: resolved.as_str(),
            origin: resolved.origin().ascii_serialization(),
            pathname: resolved.path(),
        };
        writeln!(stdout_handle, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(stdout_handle, "{}", resolved.as_str().fg::<BrightCyan>())?;
    }
    stdout_handle.flush()?;

    Ok(())
}
