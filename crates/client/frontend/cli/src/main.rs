//! Terminal client entry point.

use std::io;

use anyhow::{Context, Result};

use gem_cli::{CliApp, CliConfig, Renderer, logging};
use gem_content::{ContentFactory, DefaultContent};
use gem_runtime::Session;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let content = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_all()
            .with_context(|| format!("Failed to load content from {}", dir.display()))?,
        None => DefaultContent::content(),
    };

    let mut builder = Session::builder().content(content);
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    let session = builder.build().context("Failed to start session")?;

    tracing::info!(
        seed = session.seed(),
        output = %config.output,
        "Starting gem-cli"
    );

    let renderer = Renderer::new(config.output, config.color);
    CliApp::new(session, renderer).run(io::stdin().lock(), io::stdout().lock())
}
