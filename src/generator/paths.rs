use super::context::BuildContext;
use super::document::{Operation, Paths};
use super::schema::build_schema;
use crate::error::{GeneratorError, Result};
use crate::registry::{Collection, ModelResolver};

/// Build the `paths` map from the registry, in registry order.
///
/// Each backing model is resolved and its schema added to `ctx` the first
/// time its name is seen. Collections sharing a path merge their verbs into
/// one entry. An unresolvable model aborts the whole build.
pub fn build_paths<R>(ctx: &mut BuildContext, collections: &[Collection], resolver: &R) -> Result<Paths>
where
    R: ModelResolver + ?Sized,
{
    let mut paths = Paths::new();

    for collection in collections {
        if let Some(model_ref) = &collection.backing_model {
            let model = resolver
                .resolve(model_ref)
                .map_err(|source| GeneratorError::Resolution {
                    collection: collection.name.clone(),
                    source,
                })?;
            build_schema(ctx, &model);
        }

        let entry = paths.entry(collection.path()).or_default();
        for verb in &collection.verbs {
            entry.insert(verb.clone(), Operation::default());
        }
        tracing::debug!(
            collection = %collection.name,
            verbs = collection.verbs.len(),
            "built path entry"
        );
    }

    Ok(paths)
}
