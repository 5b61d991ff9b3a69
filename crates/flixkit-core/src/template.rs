//! Interaction template model.
//!
//! An interaction template (FLIX) is a versioned JSON document describing a Cadence
//! script or transaction: its source code, typed arguments, localized messages and
//! the per-network addresses of every contract it imports.
//!
//! ```text
//! {
//!   "f_type": "InteractionTemplate",
//!   "f_version": "1.0.0",
//!   "id": "...",
//!   "data": {
//!     "type": "transaction",
//!     "messages": { "title": { "i18n": { "en-US": "Transfer Tokens" } } },
//!     "cadence": "import FungibleToken from 0xFUNGIBLETOKENADDRESS ...",
//!     "dependencies": { "0xFUNGIBLETOKENADDRESS": { "FungibleToken": { "testnet": { ... } } } },
//!     "arguments": { "amount": { "index": 0, "type": "UFix64", ... } }
//!   }
//! }
//! ```
//!
//! The model is read-only once parsed. All maps are ordered so iteration and
//! serialization are deterministic; anything order-sensitive still sorts explicitly.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FlixError, Result};
use crate::hash::gen_hash;

/// Locale used by the default message accessors.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Missing and `null` fields both take the type's default.
fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Address binding of one contract on one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkBinding {
    /// Resolved account address, e.g. `0x9a0766d93b6608b7`.
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    /// Fully-qualified address, e.g. `A.9a0766d93b6608b7.FungibleToken`.
    #[serde(deserialize_with = "null_default")]
    pub fq_address: String,
    #[serde(deserialize_with = "null_default")]
    pub contract: String,
    /// Content hash of the contract and its dependency tree.
    #[serde(deserialize_with = "null_default")]
    pub pin: String,
    #[serde(deserialize_with = "null_default")]
    pub pin_block_height: u64,
}

/// Network name → binding.
pub type Networks = BTreeMap<String, NetworkBinding>;
/// Contract name → networks.
pub type Contracts = BTreeMap<String, Networks>;
/// Placeholder address (as written in the cadence) → contracts.
pub type Dependencies = BTreeMap<String, Contracts>;
/// Argument name → argument.
pub type Arguments = BTreeMap<String, Argument>;

/// A locale-keyed message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<BTreeMap<String, String>>,
}

impl LocalizedText {
    /// Look up the text for `locale`.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.i18n.as_ref()?.get(locale).map(String::as_str)
    }
}

/// Human-readable messages attached to a template or an argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
}

impl Messages {
    /// Title for `locale`, if the title block has an entry for it.
    pub fn title_in(&self, locale: &str) -> Option<&str> {
        self.title.as_ref()?.get(locale)
    }

    /// Description for `locale`, if the description block has an entry for it.
    pub fn description_in(&self, locale: &str) -> Option<&str> {
        self.description.as_ref()?.get(locale)
    }

    /// Title in the default locale, or `placeholder` when there is none.
    pub fn title_value(&self, placeholder: &str) -> String {
        self.title_in(DEFAULT_LOCALE)
            .unwrap_or(placeholder)
            .to_string()
    }
}

/// One named parameter of the interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argument {
    /// Zero-based position of the argument in the cadence signature.
    #[serde(deserialize_with = "null_default")]
    pub index: i64,
    /// Cadence type, e.g. `UFix64` or `[Address]`.
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub cadence_type: String,
    #[serde(deserialize_with = "null_default")]
    pub messages: Messages,
    /// Balance constraint, e.g. `"0x1654653399040a61.FlowToken"`.
    #[serde(deserialize_with = "null_default")]
    pub balance: String,
}

/// Kind of interaction a template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Script,
    Transaction,
    /// Any `type` value other than `script` or `transaction`.
    Unknown,
}

impl InteractionKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "script" => Self::Script,
            "transaction" => Self::Transaction,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Transaction => "transaction",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `data` block of an interaction template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Data {
    /// Raw interaction kind; see [`InteractionTemplate::kind`].
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub interaction_type: String,
    #[serde(deserialize_with = "null_default")]
    pub interface: String,
    #[serde(deserialize_with = "null_default")]
    pub messages: Messages,
    #[serde(deserialize_with = "null_default")]
    pub cadence: String,
    #[serde(deserialize_with = "null_default")]
    pub dependencies: Dependencies,
    #[serde(deserialize_with = "null_default")]
    pub arguments: Arguments,
}

/// A parsed Flow interaction template.
///
/// Every field is optional in the JSON document: a missing or `null` field takes its
/// empty value, so a template without `data.type` parses as [`InteractionKind::Unknown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionTemplate {
    #[serde(deserialize_with = "null_default")]
    pub f_type: String,
    #[serde(deserialize_with = "null_default")]
    pub f_version: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub data: Data,
}

impl InteractionTemplate {
    /// Parse a template from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FlixError::InvalidTemplate)
    }

    /// Load and parse a template from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FlixError::TemplateNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| FlixError::TemplateParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn kind(&self) -> InteractionKind {
        InteractionKind::parse(&self.data.interaction_type)
    }

    pub fn is_script(&self) -> bool {
        self.kind() == InteractionKind::Script
    }

    pub fn is_transaction(&self) -> bool {
        self.kind() == InteractionKind::Transaction
    }

    /// Description in the default locale, or an empty string when there is none.
    pub fn description(&self) -> String {
        self.data
            .messages
            .description_in(DEFAULT_LOCALE)
            .unwrap_or_default()
            .to_string()
    }

    /// Title in the default locale, or `placeholder` when there is none.
    pub fn title_value(&self, placeholder: &str) -> String {
        self.data.messages.title_value(placeholder)
    }

    /// Compact JSON with map keys in sorted order.
    pub fn canonical_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(FlixError::InvalidTemplate)
    }

    /// SHA3-256 of [`canonical_json`](Self::canonical_json).
    pub fn content_hash(&self) -> Result<String> {
        Ok(gen_hash(&self.canonical_json()?))
    }

    /// SHA3-256 of the raw cadence text, before any import rewriting.
    pub fn cadence_hash(&self) -> String {
        gen_hash(&self.data.cadence)
    }
}

#[cfg(test)]
pub(crate) const TRANSFER_TEMPLATE: &str = r#"{
  "f_type": "InteractionTemplate",
  "f_version": "1.0.0",
  "id": "290b6b6222b2a77b16db896a80ddf29ebd1fa3038c9e6625a933fa213fce51fa",
  "data": {
    "type": "transaction",
    "interface": "",
    "messages": {
      "title": { "i18n": { "en-US": "Transfer Tokens" } },
      "description": { "i18n": { "en-US": "Transfer tokens from one account to another" } }
    },
    "cadence": "import FungibleToken from 0xFUNGIBLETOKENADDRESS\nimport FlowToken from 0xFLOWTOKENADDRESS\n\ntransaction(amount: UFix64, to: Address) {\n  prepare(signer: AuthAccount) {}\n}\n",
    "dependencies": {
      "0xFUNGIBLETOKENADDRESS": {
        "FungibleToken": {
          "mainnet": {
            "address": "0xf233dcee88fe0abe",
            "fq_address": "A.0xf233dcee88fe0abe.FungibleToken",
            "contract": "FungibleToken",
            "pin": "83c9e3d61d3b5ebf24356a9f17b5b57b12d6d56547abc73e05f820a0ae7d9cf5",
            "pin_block_height": 34166296
          },
          "testnet": {
            "address": "0x9a0766d93b6608b7",
            "fq_address": "A.0x9a0766d93b6608b7.FungibleToken",
            "contract": "FungibleToken",
            "pin": "83c9e3d61d3b5ebf24356a9f17b5b57b12d6d56547abc73e05f820a0ae7d9cf5",
            "pin_block_height": 74776482
          }
        }
      },
      "0xFLOWTOKENADDRESS": {
        "FlowToken": {
          "mainnet": {
            "address": "0x1654653399040a61",
            "fq_address": "A.0x1654653399040a61.FlowToken",
            "contract": "FlowToken",
            "pin": "e7cd6a5fa1b6c2c5b5f8f6e1e0a9d7f4c3b2a1908f7e6d5c4b3a29180706f5e4",
            "pin_block_height": 34166296
          },
          "testnet": {
            "address": "0x7e60df042a9c0868",
            "fq_address": "A.0x7e60df042a9c0868.FlowToken",
            "contract": "FlowToken",
            "pin": "e7cd6a5fa1b6c2c5b5f8f6e1e0a9d7f4c3b2a1908f7e6d5c4b3a29180706f5e4",
            "pin_block_height": 74776482
          }
        }
      }
    },
    "arguments": {
      "amount": {
        "index": 1,
        "type": "UFix64",
        "messages": { "title": { "i18n": { "en-US": "The amount of FLOW tokens to send" } } },
        "balance": "0xFLOWTOKENADDRESS.FlowToken"
      },
      "to": {
        "index": 0,
        "type": "Address",
        "messages": { "title": { "i18n": { "en-US": "The Flow account the tokens will go to" } } },
        "balance": ""
      }
    }
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn localized(locale: &str, text: &str) -> LocalizedText {
        LocalizedText {
            i18n: Some(BTreeMap::from([(locale.to_string(), text.to_string())])),
        }
    }

    #[test]
    fn test_parse_transfer_template() {
        let t = InteractionTemplate::from_json(TRANSFER_TEMPLATE).unwrap();
        assert_eq!(t.f_type, "InteractionTemplate");
        assert_eq!(t.f_version, "1.0.0");
        assert_eq!(t.data.arguments.len(), 2);
        assert_eq!(t.data.arguments["amount"].cadence_type, "UFix64");
        assert_eq!(t.data.arguments["to"].index, 0);

        let testnet = &t.data.dependencies["0xFUNGIBLETOKENADDRESS"]["FungibleToken"]["testnet"];
        assert_eq!(testnet.address, "0x9a0766d93b6608b7");
        assert_eq!(testnet.pin_block_height, 74776482);
    }

    #[test]
    fn test_parse_minimal_template() {
        let json = r#"{
            "f_type": "InteractionTemplate",
            "f_version": "1.0.0",
            "id": "abc",
            "data": { "type": "script", "cadence": "pub fun main(): Int { return 1 }" }
        }"#;
        let t = InteractionTemplate::from_json(json).unwrap();
        assert!(t.is_script());
        assert!(t.data.arguments.is_empty());
        assert!(t.data.dependencies.is_empty());
        assert_eq!(t.data.interface, "");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let t = InteractionTemplate::from_json(r#"{ "data": { "cadence": "c" } }"#).unwrap();
        assert_eq!(t.kind(), InteractionKind::Unknown);
        assert!(!t.is_script() && !t.is_transaction());
        assert_eq!(t.data.cadence, "c");
        assert_eq!(t.f_version, "");

        let json = r#"{ "data": { "type": "script", "arguments": { "x": {} } } }"#;
        let t = InteractionTemplate::from_json(json).unwrap();
        assert_eq!(t.data.cadence, "");
        assert_eq!(t.data.arguments["x"], Argument::default());
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let json = r#"{
            "f_type": null,
            "f_version": "1.0.0",
            "id": null,
            "data": {
                "type": null,
                "interface": null,
                "messages": null,
                "cadence": null,
                "dependencies": null,
                "arguments": {
                    "amount": { "index": null, "type": null, "messages": null, "balance": null }
                }
            }
        }"#;
        let t = InteractionTemplate::from_json(json).unwrap();
        assert_eq!(t.kind(), InteractionKind::Unknown);
        assert_eq!(t.data.interface, "");
        assert_eq!(t.data.messages, Messages::default());
        assert!(t.data.dependencies.is_empty());
        assert_eq!(t.data.arguments["amount"], Argument::default());
        assert_eq!(t.description(), "");
        assert_eq!(t.title_value("Request"), "Request");
    }

    #[test]
    fn test_null_network_binding_fields() {
        let json = r#"{ "address": "0x01", "fq_address": null, "pin": null, "pin_block_height": null }"#;
        let binding: NetworkBinding = serde_json::from_str(json).unwrap();
        assert_eq!(binding.address, "0x01");
        assert_eq!(binding.pin_block_height, 0);
        assert_eq!(binding.contract, "");
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = InteractionTemplate::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FlixError::InvalidTemplate(_)));
    }

    #[test]
    fn test_load_nonexistent() {
        let err = InteractionTemplate::load(Path::new("/tmp/nonexistent_flixkit_template.json"))
            .unwrap_err();
        assert!(matches!(err, FlixError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transfer.json");
        std::fs::write(&path, TRANSFER_TEMPLATE).unwrap();
        let t = InteractionTemplate::load(&path).unwrap();
        assert!(t.is_transaction());

        std::fs::write(&path, "42").unwrap();
        let err = InteractionTemplate::load(&path).unwrap_err();
        assert!(matches!(err, FlixError::TemplateParse { .. }));
    }

    #[test]
    fn test_interaction_kind() {
        let mut t = InteractionTemplate::default();
        t.data.interaction_type = "script".into();
        assert_eq!(t.kind(), InteractionKind::Script);
        assert!(t.is_script() && !t.is_transaction());

        t.data.interaction_type = "transaction".into();
        assert_eq!(t.kind(), InteractionKind::Transaction);
        assert!(t.is_transaction() && !t.is_script());

        t.data.interaction_type = "Script".into();
        assert_eq!(t.kind(), InteractionKind::Unknown);
        assert!(!t.is_script() && !t.is_transaction());
    }

    #[test]
    fn test_description_default_locale() {
        let t = InteractionTemplate::from_json(TRANSFER_TEMPLATE).unwrap();
        assert_eq!(t.description(), "Transfer tokens from one account to another");
    }

    #[test]
    fn test_description_missing_locale_is_empty() {
        let mut t = InteractionTemplate::default();
        assert_eq!(t.description(), "");

        t.data.messages.description = Some(LocalizedText { i18n: None });
        assert_eq!(t.description(), "");

        t.data.messages.description = Some(localized("fr-FR", "Transférer"));
        assert_eq!(t.description(), "");
        assert_eq!(t.data.messages.description_in("fr-FR"), Some("Transférer"));
    }

    #[test]
    fn test_title_value_falls_back_to_placeholder() {
        let mut messages = Messages::default();
        assert_eq!(messages.title_value("fallback"), "fallback");

        messages.title = Some(localized("de-DE", "Überweisen"));
        assert_eq!(messages.title_value("fallback"), "fallback");

        messages.title = Some(localized(DEFAULT_LOCALE, "Transfer"));
        assert_eq!(messages.title_value("fallback"), "Transfer");
    }

    #[test]
    fn test_null_i18n_is_accepted() {
        let json = r#"{ "title": { "i18n": null } }"#;
        let messages: Messages = serde_json::from_str(json).unwrap();
        assert_eq!(messages.title_value("Request"), "Request");
    }

    #[test]
    fn test_canonical_json_is_stable() {
        let a = InteractionTemplate::from_json(TRANSFER_TEMPLATE).unwrap();
        let b = InteractionTemplate::from_json(&a.canonical_json().unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.canonical_json().unwrap(), b.canonical_json().unwrap());
        assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());
    }

    #[test]
    fn test_cadence_hash_tracks_cadence() {
        let mut t = InteractionTemplate::from_json(TRANSFER_TEMPLATE).unwrap();
        let before = t.cadence_hash();
        assert_eq!(before, gen_hash(&t.data.cadence));
        t.data.cadence.push(' ');
        assert_ne!(before, t.cadence_hash());
    }
}
