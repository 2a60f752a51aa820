use super::context::BuildContext;
use serde_json::Value;
use std::collections::BTreeMap;

/// `components.parameters`, ordered by name.
pub type Parameters = BTreeMap<String, Value>;

/// Parameter table of the run, sorted by name.
///
/// Always a mapping, including when nothing was registered.
pub fn build_parameters(ctx: &BuildContext) -> Parameters {
    ctx.parameters()
        .iter()
        .map(|(name, definition)| (name.clone(), definition.clone()))
        .collect()
}
