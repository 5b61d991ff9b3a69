use std::path::Path;

use anyhow::Result;

use flixkit_core::arguments::transform_arguments;
use flixkit_core::bindings::DEFAULT_TITLE;
use flixkit_core::template::InteractionTemplate;

use crate::output;

/// Summarize an interaction template: metadata, ordered parameters and dependencies.
pub fn run(template_path: &Path) -> Result<()> {
    let template = InteractionTemplate::load(template_path)?;

    output::print_header(&format!("flixkit inspect: {}", template_path.display()));
    output::print_key_value("ID", &template.id);
    output::print_key_value("Version", &template.f_version);
    output::print_key_value("Kind", template.kind().as_str());
    output::print_key_value("Title", &template.title_value(DEFAULT_TITLE));
    output::print_key_value("Description", &template.description());
    output::print_key_value("Cadence hash", &template.cadence_hash());

    let parameters = transform_arguments(&template.data.arguments);
    if !parameters.is_empty() {
        eprintln!("\n  Parameters:");
        for p in &parameters {
            eprintln!("    {}: {} ({})", p.name, p.fcl_type, p.js_type);
        }
    }

    if !template.data.dependencies.is_empty() {
        eprintln!("\n  Dependencies:");
        for (placeholder, contracts) in &template.data.dependencies {
            for (contract, networks) in contracts {
                let names: Vec<&str> = networks.keys().map(String::as_str).collect();
                eprintln!("    {contract} from {placeholder} [{}]", names.join(", "));
            }
        }
    }

    Ok(())
}
