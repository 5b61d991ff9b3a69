//! Argument transformation for binding generation.
//!
//! Turns a template's argument map into the ordered, flattened parameter list the
//! binding templates iterate over. Order comes from each argument's `index`, never
//! from map order.
//!
//! ## Type mapping
//!
//! | Cadence      | JavaScript |
//! |--------------|------------|
//! | `Bool`       | `boolean`  |
//! | `Void`       | `void`     |
//! | `Dictionary` | `object`   |
//! | `Struct`     | `object`   |
//! | `Enum`       | `object`   |
//! | anything else| `string`   |
//!
//! Numbers, addresses and paths are all passed to FCL as strings, so the catch-all
//! is `string`. Arrays are written `[T]` and map to `Array<js(T)>`.

use serde::Serialize;

use crate::template::{Argument, Arguments};

/// One binding parameter derived from a template argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleParameter {
    /// Argument name as declared in the template.
    pub name: String,
    /// JavaScript type for the generated signature, e.g. `string` or `Array<boolean>`.
    pub js_type: String,
    /// English title of the argument, or empty.
    pub description: String,
    /// FCL type expression without the `t.` prefix, e.g. `UFix64` or `Array(t.Bool)`.
    pub fcl_type: String,
    /// Cadence type; the element type for arrays.
    pub cadence_type: String,
    pub is_array: bool,
}

/// Order the arguments by `index` and derive a [`SimpleParameter`] for each.
///
/// The sort is stable, so arguments sharing an index keep their name order.
pub fn transform_arguments(args: &Arguments) -> Vec<SimpleParameter> {
    let mut ordered: Vec<(&String, &Argument)> = args.iter().collect();
    ordered.sort_by_key(|(_, arg)| arg.index);

    ordered
        .into_iter()
        .map(|(name, arg)| to_parameter(name, arg))
        .collect()
}

fn to_parameter(name: &str, arg: &Argument) -> SimpleParameter {
    let description = arg.messages.title_value("");

    match array_element_type(&arg.cadence_type) {
        Some(element) => SimpleParameter {
            name: name.to_string(),
            js_type: format!("Array<{}>", cadence_to_js_type(element)),
            description,
            fcl_type: format!("Array(t.{element})"),
            cadence_type: element.to_string(),
            is_array: true,
        },
        None => SimpleParameter {
            name: name.to_string(),
            js_type: cadence_to_js_type(&arg.cadence_type).to_string(),
            description,
            fcl_type: arg.cadence_type.clone(),
            cadence_type: arg.cadence_type.clone(),
            is_array: false,
        },
    }
}

/// Element type of an array type string (`[UFix64]` → `UFix64`).
///
/// Anything not starting with `[` is a scalar. A missing closing bracket is tolerated.
pub fn array_element_type(cadence_type: &str) -> Option<&str> {
    let inner = cadence_type.strip_prefix('[')?;
    Some(inner.strip_suffix(']').unwrap_or(inner))
}

/// JavaScript type used for a Cadence type in generated bindings.
pub fn cadence_to_js_type(cadence_type: &str) -> &'static str {
    match cadence_type {
        "Bool" => "boolean",
        // return type only
        "Void" => "void",
        "Dictionary" | "Struct" | "Enum" => "object",
        _ => "string",
    }
}
