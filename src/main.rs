//! Pixgen - AI image generation CLI.

use std::path::Path;
use std::process;

use clap::Parser;

use pixgen::cli::Cli;
use pixgen::config::{self, Config, ConfigFile};
use pixgen::context::ServiceContext;
use pixgen::error::ImageError;
use pixgen::output::resolve_output_path;
use pixgen::service::ImageService;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ImageError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let file = ConfigFile::load(&config_path).map_err(ImageError::Config)?;
    let mut config = Config::resolve(&file);
    if let Some(ref model) = cli.model {
        config.model = model.clone();
    }

    // Resolve prompt
    let prompt = cli.resolve_prompt().map_err(ImageError::Io)?;

    if cli.verbose {
        eprintln!("Model: {}", config.model);
        eprintln!("Endpoint: {}", config.base_url);
    }

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("PIXGEN_REPLAY").ok();
    let is_recording = std::env::var("PIXGEN_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if cli.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if cli.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    // Generate and save
    let output_path = resolve_output_path(cli.output.as_deref(), &prompt);
    let service = ImageService::new(ctx.generator, config.model);
    let saved = service.generate_and_save_image(&prompt, &output_path).await?;
    eprintln!("Saved: {}", saved.display());

    // Finish recording if active
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}
