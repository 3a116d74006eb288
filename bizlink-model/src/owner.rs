use bizlink_types::{EntityKind, Guid};

use crate::BusinessEntity;

/// The party a report is about.
///
/// At most one variant is ever populated. `Undefined` is a valid state: it is
/// what an owner lookup leaves behind when the tag or the entity was bad.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Owner<'a> {
    #[default]
    Undefined,
    Customer(&'a BusinessEntity),
    Vendor(&'a BusinessEntity),
    Employee(&'a BusinessEntity),
    Job(&'a BusinessEntity),
}

impl<'a> Owner<'a> {
    /// Wraps an entity in the variant matching its kind.
    ///
    /// Invoices cannot own anything and produce `Undefined`.
    pub fn from_entity(entity: &'a BusinessEntity) -> Self {
        match entity.kind {
            EntityKind::Customer => Self::Customer(entity),
            EntityKind::Vendor => Self::Vendor(entity),
            EntityKind::Employee => Self::Employee(entity),
            EntityKind::Job => Self::Job(entity),
            EntityKind::Invoice => Self::Undefined,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::Undefined => None,
            Self::Customer(_) => Some(EntityKind::Customer),
            Self::Vendor(_) => Some(EntityKind::Vendor),
            Self::Employee(_) => Some(EntityKind::Employee),
            Self::Job(_) => Some(EntityKind::Job),
        }
    }

    pub fn entity(&self) -> Option<&'a BusinessEntity> {
        match *self {
            Self::Undefined => None,
            Self::Customer(e) | Self::Vendor(e) | Self::Employee(e) | Self::Job(e) => Some(e),
        }
    }

    pub fn guid(&self) -> Option<Guid> {
        self.entity().map(|e| e.guid)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.entity().map(|e| e.name.as_str())
    }
}
