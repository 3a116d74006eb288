//! The `owner=<tag>:<guid>` parameter of owner-report links.

use bizlink_model::{EntityStore, Owner};
use bizlink_types::{EntityKind, Guid};

/// What could be read out of an owner parameter.
///
/// The pieces are decoded independently: a bad GUID does not hide a valid
/// tag, so callers can still name the kind the link asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerParam {
    pub kind: Option<EntityKind>,
    pub guid: Option<Guid>,
}

impl OwnerParam {
    /// Parses `c:<guid>`, `v:<guid>`, `e:<guid>` or `j:<guid>`.
    pub fn parse(text: &str) -> Self {
        let mut chars = text.chars();
        let kind = chars.next().and_then(EntityKind::from_owner_tag);
        let guid = chars
            .as_str()
            .strip_prefix(':')
            .and_then(|id| Guid::parse(id).ok());
        Self { kind, guid }
    }

    pub fn is_well_formed(&self) -> bool {
        self.kind.is_some() && self.guid.is_some()
    }

    /// Name used in type-mismatch messages.
    pub fn kind_name(&self) -> &'static str {
        self.kind.map_or("unknown", |k| k.display_name())
    }
}

/// Looks an owner up in the collection for `kind`.
///
/// `None` when the entity is absent. Invoices never resolve to an owner.
pub fn resolve_owner<'a>(store: &'a dyn EntityStore, kind: EntityKind, guid: &Guid) -> Option<Owner<'a>> {
    if !kind.is_owner_kind() {
        return None;
    }
    store.lookup(kind, guid).map(Owner::from_entity)
}
