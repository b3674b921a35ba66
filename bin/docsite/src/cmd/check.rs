//! Check command - validate configuration and cross references

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use docsite_core::{Site, ValidationReport, validate_site};

/// Run the check command.
///
/// Loads the configuration and site data, then reports every inconsistent
/// reference without writing any output.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking site");

    println!("Checking configuration and site data...");
    let site = match Site::load(config_path) {
        Ok(site) => {
            println!("  ✓ Configuration valid");
            println!(
                "  ✓ {} sidebar(s), {} document(s), {} card(s)",
                site.sidebars.len(),
                site.sidebars.all_doc_ids().len(),
                site.landing.card_count()
            );
            site
        }
        Err(e) => {
            println!("  ✗ Failed to load site: {e}");
            bail!("Validation failed: {e}");
        }
    };

    println!("\nChecking cross references...");
    let report = validate_site(&site);
    print_report(&report);

    let errors = report.errors().count();
    let warnings = report.warnings().count();

    // Determine exit status
    if errors > 0 {
        bail!("Validation failed with {errors} error(s)");
    }

    if strict && warnings > 0 {
        bail!("Validation failed with {warnings} warning(s) (strict mode)");
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!();
    println!("Summary:");
    println!("  Errors:   {}", report.errors().count());
    println!("  Warnings: {}", report.warnings().count());

    if report.has_errors() {
        println!();
        println!("Errors:");
        for err in report.errors() {
            println!("  ✗ {err}");
        }
    }

    if report.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in report.warnings() {
            println!("  ⚠ {warn}");
        }
    }
}
