use clap::{Parser, Subcommand};
use image_manifest::{config, output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "image-manifest")]
#[command(about = "Write images.json from the images/ directory")]
#[command(long_about = "\
Write images.json from the images/ directory

Scans images/ recursively and writes a JSON array with one entry per image,
sorted by path:

  [
    {
      \"src\": \"images/icons/my_icon-file.png\",
      \"title\": \"My Icon File\"
    }
  ]

Included extensions (any case): webp, avif, png, jpg, jpeg, gif, svg.
Titles come from the filename: extension dropped, '_' and '-' become spaces,
each word capitalized.

Run with no arguments from the project root. Paths can be changed in an
optional image-manifest.toml; run 'image-manifest gen-config' for a template.")]
#[command(version = version_string())]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Image directory, relative to the root
    #[arg(long, global = true)]
    images_dir: Option<String>,

    /// Manifest file, relative to the root
    #[arg(long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan images and write the manifest (default)
    Build,
    /// List the manifest entries without writing anything
    Check,
    /// Print a stock image-manifest.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let layout = resolve_layout(cli.root, cli.images_dir, cli.output)?;
            let summary = pipeline::build(&layout)?;
            output::print_build_summary(&summary);
        }
        Command::Check => {
            let layout = resolve_layout(cli.root, cli.images_dir, cli.output)?;
            let records = pipeline::check(&layout)?;
            output::print_check_output(&records, &layout.output);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve paths: config file under the root, then CLI overrides on top.
fn resolve_layout(
    root: Option<PathBuf>,
    images_dir: Option<String>,
    output: Option<String>,
) -> Result<config::Layout, Box<dyn std::error::Error>> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let manifest_config = config::load_config(&root)?.with_overrides(images_dir, output);
    manifest_config.validate()?;
    Ok(manifest_config.layout(&root))
}
