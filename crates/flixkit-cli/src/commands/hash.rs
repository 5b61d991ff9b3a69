use std::path::Path;

use anyhow::{Context, Result};

use flixkit_core::hash::gen_hash;
use flixkit_core::template::InteractionTemplate;

/// Print the SHA3-256 hash of a file, or of the canonical JSON of the template it holds.
pub fn run(path: &Path, canonical: bool) -> Result<()> {
    let digest = if canonical {
        InteractionTemplate::load(path)?.content_hash()?
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        gen_hash(&text)
    };

    println!("{digest}");
    Ok(())
}
