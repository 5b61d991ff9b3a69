use std::path::Path;

use anyhow::{Context, Result};

use flixkit_core::bindings::generator_for;
use flixkit_core::config::FlixkitConfig;
use flixkit_core::template::InteractionTemplate;

use crate::output;

/// Generate a client binding for an interaction template.
///
/// Language and template directory come from the flags, then the config. The binding
/// loads the template from `location` at runtime; without one it imports the local
/// template file by relative path. A location with an `http://` or `https://` scheme is remote.
pub fn run(
    config: &FlixkitConfig,
    template_path: &Path,
    lang: Option<&str>,
    template_dir: Option<&Path>,
    location: Option<&str>,
    output_path: Option<&Path>,
) -> Result<()> {
    output::print_header("flixkit generate");

    let lang = lang.unwrap_or(&config.bindings.lang);
    let template_dir = template_dir.or(config.bindings.template_dir.as_deref());
    let location = location
        .map(str::to_string)
        .unwrap_or_else(|| local_location(template_path));
    let is_local = !is_remote(&location);

    output::print_key_value("Language", lang);
    output::print_key_value("Location", &location);
    if let Some(dir) = template_dir {
        output::print_key_value("Templates", &dir.display().to_string());
    }

    output::print_step(1, 2, "Loading interaction template...");
    let template = InteractionTemplate::load(template_path)?;

    output::print_step(2, 2, "Rendering binding...");
    let generator = generator_for(lang, template_dir)?;
    let binding = generator.generate(&template, &location, is_local)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &binding)
                .with_context(|| format!("failed to write binding to {}", path.display()))?;
            output::print_success(&format!("Binding written to {}", path.display()));
        }
        None => {
            print!("{binding}");
            output::print_success("Binding generated");
        }
    }

    Ok(())
}

/// Module path for a local template. Bare relative paths get a `./` prefix so JavaScript
/// resolves them as files rather than packages.
fn local_location(path: &Path) -> String {
    let location = path.display().to_string();
    if path.is_absolute() || location.starts_with('.') || location.starts_with('/') {
        location
    } else {
        format!("./{location}")
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
