//! Build command - generates the static site

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use docsite_core::Site;
use docsite_generator::{BuildError, Builder};

/// Run the build command.
///
/// Loads the site (with `DOCSITE__*` environment overrides), validates it and
/// writes the generated pages to the output directory.
pub fn run(config_path: &Path, output: &Path, base_url: Option<&str>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?base_url, "Starting build");

    let mut site = Site::load_with_env(config_path).wrap_err("Failed to load site")?;

    // Override base_url if specified via CLI
    if let Some(url) = base_url {
        let url = normalize_base_url(url);
        tracing::info!(base_url = %url, "Overriding site base_url from CLI");
        site.config.site.base_url = url;
    }

    let stats = match Builder::new(site, output).build() {
        Ok(stats) => stats,
        Err(BuildError::Validation(report)) => {
            println!();
            println!("  Build failed: the site has broken references");
            println!();
            for error in report.errors() {
                println!("  ✗ {error}");
            }
            println!();
            return Err(BuildError::Validation(report)).wrap_err("Build failed");
        }
        Err(e) => return Err(e).wrap_err("Build failed"),
    };

    let duration = start.elapsed();

    // Print build statistics
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Sidebars:   {}", stats.sidebars);
    println!("  Documents:  {}", stats.documents);
    println!("  Cards:      {}", stats.cards);
    println!("  Warnings:   {}", stats.warnings);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}

/// Ensure a base URL starts and ends with `/`.
fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
