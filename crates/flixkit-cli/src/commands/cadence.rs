use std::path::Path;

use anyhow::Result;

use flixkit_core::config::FlixkitConfig;
use flixkit_core::template::InteractionTemplate;

use crate::output;

/// Print the template's cadence with every dependency import resolved for a network.
pub fn run(config: &FlixkitConfig, template_path: &Path, network: Option<&str>) -> Result<()> {
    output::print_header("flixkit cadence");

    let network = network.unwrap_or(&config.network);
    output::print_key_value("Network", network);

    let template = InteractionTemplate::load(template_path)?;
    let cadence = template.cadence_for_network(network)?;

    print!("{cadence}");
    Ok(())
}
