//! Cadence import rewriting.
//!
//! Template cadence imports its contracts from placeholder addresses
//! (`import FungibleToken from 0xFUNGIBLETOKENADDRESS`). Before the code can be sent to
//! a network every placeholder must be swapped for the contract's address on that
//! network, taken from the template's `dependencies` block.
//!
//! Rewriting is all-or-nothing: if any dependency lacks a binding for the network,
//! no text is returned. Text that has already been rewritten is left untouched by a
//! second pass for the same network, unless a resolved address is itself another
//! dependency's placeholder. Rewriting for a second network on top of the first is
//! not supported.

use regex::{NoExpand, Regex};

use crate::error::{FlixError, Result};
use crate::template::{Dependencies, InteractionTemplate};

impl InteractionTemplate {
    /// Cadence with every dependency import resolved for `network`.
    pub fn cadence_for_network(&self, network: &str) -> Result<String> {
        replace_imports(&self.data.cadence, &self.data.dependencies, network)
    }
}

/// Rewrite `import <Contract> from <placeholder>` statements in `cadence` to the
/// addresses `dependencies` lists for `network`.
pub fn replace_imports(cadence: &str, dependencies: &Dependencies, network: &str) -> Result<String> {
    let mut cadence = cadence.to_string();

    for (placeholder, contracts) in dependencies {
        for (contract, networks) in contracts {
            let binding = networks
                .get(network)
                .ok_or_else(|| FlixError::NetworkNotFound {
                    network: network.to_string(),
                    contract: contract.clone(),
                })?;

            let re = import_pattern(contract, placeholder)?;
            let replacement = format!("import {contract} from {}", binding.address);
            tracing::debug!("resolving {contract} from {placeholder} to {}", binding.address);
            cadence = re.replace_all(&cadence, NoExpand(&replacement)).into_owned();
        }
    }

    Ok(cadence)
}

/// Pattern matching `import <contract> from <address>` with any whitespace between
/// tokens. Both names are matched literally and must end on a token boundary.
fn import_pattern(contract: &str, address: &str) -> Result<Regex> {
    let pattern = format!(
        r"\bimport\s+{}\s+from\s+{}",
        bounded(contract),
        bounded(address)
    );
    Regex::new(&pattern).map_err(|e| FlixError::InvalidPattern { pattern, source: e })
}

fn bounded(token: &str) -> String {
    let escaped = regex::escape(token);
    match token.chars().last() {
        Some(c) if c.is_alphanumeric() || c == '_' => format!(r"{escaped}\b"),
        _ => escaped,
    }
}
