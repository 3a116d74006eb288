//! Handlers for the business URL types.
//!
//! Each handler receives the link location with the protocol already
//! stripped, e.g. `customer=<guid>` or `owner=c:<guid>&acct=<guid>`.

use bizlink_model::Owner;
use bizlink_types::{EntityKind, Guid};
use tracing::debug;

use crate::owner::{OwnerParam, resolve_owner};
use crate::{DispatchContext, LinkError, ResolveError, UrlResult, parse_parameters, resolve_entity};

/// Opens the edit dialog for the entity a `<tag>=<guid>` location names.
///
/// The tag is re-checked even though the router already matched the
/// protocol, because the location text is what actually carries it.
pub fn handle_entity(
    kind: EntityKind,
    ctx: &DispatchContext<'_>,
    location: &str,
    result: &mut UrlResult,
) -> bool {
    result.load_to_stream = false;

    let Some(id_text) = location.strip_prefix(kind.url_tag()) else {
        result.fail(LinkError::MalformedUrl(location.to_string()));
        return false;
    };

    let entity = match resolve_entity(ctx.store, kind, id_text) {
        Ok(entity) => entity,
        Err(ResolveError::MalformedId) => {
            result.fail(LinkError::MalformedIdentifier(location.to_string()));
            return false;
        }
        Err(ResolveError::NotFound) => {
            result.fail(LinkError::EntityNotFound(location.to_string()));
            return false;
        }
    };

    debug!(%kind, guid = %entity.guid, new_window = ctx.new_window, "opening edit view");
    ctx.presenter.open_edit_view(kind, entity, result.parent);
    true
}

pub fn customer_handler(ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool {
    handle_entity(EntityKind::Customer, ctx, location, result)
}

pub fn vendor_handler(ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool {
    handle_entity(EntityKind::Vendor, ctx, location, result)
}

pub fn employee_handler(ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool {
    handle_entity(EntityKind::Employee, ctx, location, result)
}

pub fn job_handler(ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool {
    handle_entity(EntityKind::Job, ctx, location, result)
}

pub fn invoice_handler(ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool {
    handle_entity(EntityKind::Invoice, ctx, location, result)
}

/// Runs the owner report for `owner=<tag>:<guid>[&acct=<guid>]`.
///
/// Every check runs, in order, even after one has failed. Each failure
/// overwrites the message left by the previous one, while the decision not to
/// show the report is never reversed. Returns whether the report was shown.
pub fn handle_owner_report(ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool {
    result.load_to_stream = false;

    let params = parse_parameters(location);
    let mut show_report = true;

    let mut account = None;
    if let Some(acct) = params.get("acct") {
        match Guid::parse(acct) {
            Ok(guid) => account = ctx.store.lookup_account(&guid),
            Err(_) => {
                result.fail(LinkError::MalformedUrl(location.to_string()));
                show_report = false;
            }
        }
    }

    let param = params.get("owner").map(|text| OwnerParam::parse(text));
    if !param.is_some_and(|p| p.is_well_formed()) {
        result.fail(LinkError::MalformedUrl(location.to_string()));
        show_report = false;
    }

    let mut owner = Owner::Undefined;
    if let Some(OwnerParam {
        kind: Some(kind),
        guid: Some(guid),
    }) = param
    {
        match resolve_owner(ctx.store, kind, &guid) {
            Some(found) => owner = found,
            None => {
                result.fail(LinkError::OwnerNotFound(location.to_string()));
                show_report = false;
            }
        }
    }

    if owner.is_undefined() {
        let kind = param.map_or("unknown", |p| p.kind_name());
        result.fail(LinkError::OwnerTypeMismatch {
            kind: kind.to_string(),
            link: location.to_string(),
        });
        show_report = false;
    }

    if show_report {
        debug!(owner = ?owner.kind(), has_account = account.is_some(), "opening owner report");
        ctx.presenter.open_owner_report(&owner, account, result.parent);
    }
    show_report
}
