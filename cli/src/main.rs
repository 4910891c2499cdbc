use clap::Parser;
use std::path::PathBuf;

use tracing::debug;
use wl_vapi::{generate_vapi, load_protocol_file, render_json, write_output_file, VapiError};

#[derive(Parser)]
#[command(name = "wl-vapi-gen", version)]
#[command(about = "Generate VAPI files from Wayland protocol XML.", long_about = None)]
struct Cli {
    /// Path to the Wayland protocol XML file
    #[arg(long)]
    protocol: PathBuf,

    /// Path to the output VAPI file
    #[arg(long)]
    vapi: PathBuf,

    /// The C header file name generated by wayland-scanner
    #[arg(long)]
    cheader: String,

    /// Also write the parsed protocol as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), VapiError> {
    debug!(protocol = %cli.protocol.display(), cheader = cli.cheader.as_str(), "generating");

    let protocol = load_protocol_file(&cli.protocol)?;
    let vapi = generate_vapi(&protocol, &cli.cheader)?;
    let json = match &cli.json {
        Some(_) => Some(render_json(&protocol)?),
        None => None,
    };

    write_output_file(&cli.vapi, &vapi)?;
    println!("Generated VAPI written to {}", cli.vapi.display());

    if let (Some(json_path), Some(json)) = (&cli.json, &json) {
        write_output_file(json_path, json)?;
        println!("Protocol JSON written to {}", json_path.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
