//! Tree command - print sidebar navigation outlines

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use docsite_core::Site;
use docsite_generator::{ExpansionState, SidebarRenderer};

/// Run the tree command.
pub fn run(config_path: &Path, sidebar: Option<&str>, expand_all: bool) -> Result<()> {
    tracing::info!(?config_path, ?sidebar, expand_all, "Printing sidebar tree");

    let site = Site::load(config_path).wrap_err("Failed to load site")?;
    print!("{}", render(&site, sidebar, expand_all)?);

    Ok(())
}

/// Outline of one sidebar, or of every sidebar under its id.
fn render(site: &Site, sidebar: Option<&str>, expand_all: bool) -> Result<String> {
    let renderer = SidebarRenderer::new(&site.config);
    let state = if expand_all {
        ExpansionState::expanded_all()
    } else {
        ExpansionState::new()
    };

    if let Some(id) = sidebar {
        let Some(tree) = site.sidebars.get(id) else {
            let known: Vec<&str> = site.sidebars.ids().collect();
            bail!("Unknown sidebar '{id}' (available: {})", known.join(", "));
        };
        return Ok(renderer.to_text_tree(&renderer.render(tree, &state)));
    }

    let mut out = String::new();
    for (id, tree) in site.sidebars.iter() {
        out.push_str(&format!("{id}\n"));
        for line in renderer.to_text_tree(&renderer.render(tree, &state)).lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    Ok(out)
}
