//! Builders for the links the router understands, for report code that
//! renders them.

use bizlink_model::Owner;
use bizlink_types::{EntityKind, Guid};

/// `gncCustomer:customer=<guid>` and friends.
pub fn entity_link(kind: EntityKind, guid: &Guid) -> String {
    format!("{}:{}{}", kind.url_type(), kind.url_tag(), guid)
}

/// `<protocol>?owner=<tag>:<guid>[&acct=<guid>]`.
///
/// `None` for an undefined owner. Use
/// [`SchemeRouter::owner_report_link`](crate::SchemeRouter::owner_report_link)
/// to build links with the protocol a router was configured with.
pub fn owner_report_link(
    protocol: &str,
    owner: &Owner<'_>,
    account: Option<&Guid>,
) -> Option<String> {
    let tag = owner.kind()?.owner_tag()?;
    let guid = owner.guid()?;
    let mut link = format!("{protocol}?owner={tag}:{guid}");
    if let Some(acct) = account {
        link.push_str("&acct=");
        link.push_str(&acct.to_string());
    }
    Some(link)
}
