//! The in-memory book: one collection per entity kind, plus accounts.

use bizlink_types::{EntityKind, Guid};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{Account, BusinessEntity, ModelError, ModelResult};

/// Read-only lookups the link router needs from the current book.
pub trait EntityStore {
    /// Finds an entity of `kind` by key. Entities of other kinds sharing the
    /// key are never returned.
    fn lookup(&self, kind: EntityKind, guid: &Guid) -> Option<&BusinessEntity>;

    /// Finds an account by key.
    fn lookup_account(&self, guid: &Guid) -> Option<&Account>;
}

/// All entities of one kind, keyed by GUID.
#[derive(Debug, Clone)]
pub struct Collection {
    kind: EntityKind,
    entities: HashMap<Guid, BusinessEntity>,
}

impl Collection {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            entities: HashMap::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Adds an entity. Rejects foreign kinds and duplicate keys.
    pub fn insert(&mut self, entity: BusinessEntity) -> ModelResult<Guid> {
        if entity.kind != self.kind {
            return Err(ModelError::KindMismatch {
                expected: self.kind,
                found: entity.kind,
            });
        }
        let guid = entity.guid;
        match self.entities.entry(guid) {
            Entry::Occupied(_) => Err(ModelError::DuplicateEntity {
                kind: self.kind.to_string(),
                guid,
            }),
            Entry::Vacant(slot) => {
                slot.insert(entity);
                Ok(guid)
            }
        }
    }

    pub fn lookup(&self, guid: &Guid) -> Option<&BusinessEntity> {
        self.entities.get(guid)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BusinessEntity> {
        self.entities.values()
    }
}

/// Every business entity and account of one open data file.
#[derive(Debug, Clone, Default)]
pub struct Book {
    collections: HashMap<EntityKind, Collection>,
    accounts: HashMap<Guid, Account>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collection for `kind`, if anything of that kind was inserted.
    pub fn collection(&self, kind: EntityKind) -> Option<&Collection> {
        self.collections.get(&kind)
    }

    /// Adds an entity to the collection of its kind.
    pub fn insert(&mut self, entity: BusinessEntity) -> ModelResult<Guid> {
        self.collections
            .entry(entity.kind)
            .or_insert_with(|| Collection::new(entity.kind))
            .insert(entity)
    }

    pub fn insert_account(&mut self, account: Account) -> ModelResult<Guid> {
        let guid = account.guid;
        match self.accounts.entry(guid) {
            Entry::Occupied(_) => Err(ModelError::DuplicateEntity {
                kind: "Account".to_string(),
                guid,
            }),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(guid)
            }
        }
    }

    /// Total number of business entities across all kinds.
    pub fn entity_count(&self) -> usize {
        self.collections.values().map(Collection::len).sum()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl EntityStore for Book {
    fn lookup(&self, kind: EntityKind, guid: &Guid) -> Option<&BusinessEntity> {
        self.collections.get(&kind).and_then(|c| c.lookup(guid))
    }

    fn lookup_account(&self, guid: &Guid) -> Option<&Account> {
        self.accounts.get(guid)
    }
}
