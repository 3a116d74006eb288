//! Identifier decoding plus lookup, shared by every entity handler.

use bizlink_model::{BusinessEntity, EntityStore};
use bizlink_types::{EntityKind, Guid};

use crate::ResolveError;

/// Decodes `id_text` and finds the entity of `kind` it names.
pub fn resolve_entity<'a>(
    store: &'a dyn EntityStore,
    kind: EntityKind,
    id_text: &str,
) -> Result<&'a BusinessEntity, ResolveError> {
    let guid = Guid::parse(id_text).map_err(|_| ResolveError::MalformedId)?;
    store.lookup(kind, &guid).ok_or(ResolveError::NotFound)
}
