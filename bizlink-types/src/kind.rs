//! The closed set of business entity kinds a link can reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A business object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customer,
    Vendor,
    Employee,
    Job,
    Invoice,
}

impl EntityKind {
    /// Every kind, in URL registration order.
    pub const ALL: [EntityKind; 5] = [
        Self::Customer,
        Self::Vendor,
        Self::Employee,
        Self::Job,
        Self::Invoice,
    ];

    /// The hypertext URL type id, which doubles as the link protocol.
    pub fn url_type(&self) -> &'static str {
        match self {
            Self::Customer => "gncCustomer",
            Self::Vendor => "gncVendor",
            Self::Employee => "gncEmployee",
            Self::Job => "gncJob",
            Self::Invoice => "gncInvoice",
        }
    }

    /// Fixed tag that must open a location of this kind, separator included.
    pub fn url_tag(&self) -> &'static str {
        match self {
            Self::Customer => "customer=",
            Self::Vendor => "vendor=",
            Self::Employee => "employee=",
            Self::Job => "job=",
            Self::Invoice => "invoice=",
        }
    }

    /// Human-readable name used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Vendor => "Vendor",
            Self::Employee => "Employee",
            Self::Job => "Job",
            Self::Invoice => "Invoice",
        }
    }

    /// Single-character owner tag. Invoices cannot own a report.
    pub fn owner_tag(&self) -> Option<char> {
        match self {
            Self::Customer => Some('c'),
            Self::Vendor => Some('v'),
            Self::Employee => Some('e'),
            Self::Job => Some('j'),
            Self::Invoice => None,
        }
    }

    /// Inverse of [`EntityKind::owner_tag`].
    pub fn from_owner_tag(tag: char) -> Option<Self> {
        match tag {
            'c' => Some(Self::Customer),
            'v' => Some(Self::Vendor),
            'e' => Some(Self::Employee),
            'j' => Some(Self::Job),
            _ => None,
        }
    }

    /// Looks a kind up by its URL type id.
    pub fn from_url_type(url_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.url_type() == url_type)
    }

    pub fn is_owner_kind(&self) -> bool {
        self.owner_tag().is_some()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
