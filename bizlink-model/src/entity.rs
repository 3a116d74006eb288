use bizlink_types::{EntityKind, Guid};
use serde::{Deserialize, Serialize};

/// A business object held in a book.
///
/// The fields every kind shares are typed. Kind-specific details (addresses,
/// terms, invoice totals) live in `data` as arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessEntity {
    pub guid: Guid,
    pub kind: EntityKind,
    /// Human-facing number, e.g. "000042".
    pub id: String,
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl BusinessEntity {
    /// Creates an active entity with a fresh GUID and no extra data.
    pub fn new(kind: EntityKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: Guid::new(),
            kind,
            id: id.into(),
            name: name.into(),
            active: true,
            data: serde_json::Value::Null,
        }
    }
}

/// A ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub guid: Guid,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            guid: Guid::new(),
            name: name.into(),
            code: String::new(),
        }
    }
}
