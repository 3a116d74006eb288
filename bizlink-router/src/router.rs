//! Registration table from URL type to protocol prefix to handler.
//!
//! The table is an explicit object built once while wiring the application
//! and then handed to the hypertext engine, rather than process-wide state.

use std::fmt;
use std::sync::Arc;

use bizlink_model::Owner;
use bizlink_types::{EntityKind, Guid};
use tracing::{debug, info, warn};

use crate::handlers::{
    customer_handler, employee_handler, handle_owner_report, invoice_handler, job_handler,
    vendor_handler,
};
use crate::links;
use crate::{DispatchContext, RouterConfig, RouterError, RouterResult, UrlResult};

/// URL type id of the owner report.
pub const URL_TYPE_OWNER_REPORT: &str = "owner-report";

/// Default protocol of owner-report links.
pub const OWNER_REPORT_PROTOCOL: &str = "gnc-ownerreport";

/// Identifies a class of links to the hypertext engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlType(String);

impl UrlType {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlType {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<EntityKind> for UrlType {
    fn from(kind: EntityKind) -> Self {
        Self::new(kind.url_type())
    }
}

impl fmt::Display for UrlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can follow a link location.
pub trait UrlHandler: Send + Sync {
    /// Returns whether the link was followed. On failure the reason is left
    /// in `result.error_message`.
    fn handle(&self, ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool;
}

impl<F> UrlHandler for F
where
    F: Fn(&DispatchContext<'_>, &str, &mut UrlResult) -> bool + Send + Sync,
{
    fn handle(&self, ctx: &DispatchContext<'_>, location: &str, result: &mut UrlResult) -> bool {
        self(ctx, location, result)
    }
}

/// The two registration calls the hypertext engine exposes.
pub trait HtmlEngine {
    /// Teaches the engine that links starting with `protocol` are internal.
    fn register_url_type(&mut self, url_type: &UrlType, protocol: &str);

    /// Installs the callback for links of `url_type`.
    fn register_url_handler(&mut self, url_type: &UrlType, handler: Arc<dyn UrlHandler>);
}

/// One row of the table.
#[derive(Clone)]
pub struct SchemeEntry {
    pub url_type: UrlType,
    pub protocol: String,
    pub handler: Option<Arc<dyn UrlHandler>>,
}

impl fmt::Debug for SchemeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeEntry")
            .field("url_type", &self.url_type)
            .field("protocol", &self.protocol)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Ordered table of link schemes.
#[derive(Debug, Clone, Default)]
pub struct SchemeRouter {
    entries: Vec<SchemeEntry>,
}

impl SchemeRouter {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The business URL types with their default protocols.
    pub fn business() -> Self {
        Self::from_config(&RouterConfig::default())
    }

    /// The business URL types, minus any the config disables.
    pub fn from_config(config: &RouterConfig) -> Self {
        type Row = (UrlType, String, fn(&DispatchContext<'_>, &str, &mut UrlResult) -> bool);
        let rows: [Row; 6] = [
            (EntityKind::Customer.into(), EntityKind::Customer.url_type().into(), customer_handler),
            (EntityKind::Vendor.into(), EntityKind::Vendor.url_type().into(), vendor_handler),
            (EntityKind::Employee.into(), EntityKind::Employee.url_type().into(), employee_handler),
            (EntityKind::Job.into(), EntityKind::Job.url_type().into(), job_handler),
            (EntityKind::Invoice.into(), EntityKind::Invoice.url_type().into(), invoice_handler),
            (
                URL_TYPE_OWNER_REPORT.into(),
                config.owner_report_protocol.clone(),
                handle_owner_report,
            ),
        ];

        let mut router = Self::new();
        for (url_type, protocol, handler) in rows {
            if config.is_disabled(url_type.as_str()) {
                debug!(%url_type, "URL type disabled by configuration");
                continue;
            }
            if protocol.is_empty() {
                warn!(%url_type, "empty protocol in configuration; URL type not registered");
                continue;
            }
            router.entries.push(SchemeEntry {
                url_type,
                protocol,
                handler: Some(Arc::new(handler)),
            });
        }
        router
    }

    /// First registration pass: associates `url_type` with a link prefix.
    ///
    /// Registering a type again replaces its protocol in place.
    pub fn register_url_type(&mut self, url_type: UrlType, protocol: &str) -> RouterResult<()> {
        if protocol.is_empty() {
            return Err(RouterError::EmptyProtocol(url_type.to_string()));
        }
        match self.entries.iter_mut().find(|e| e.url_type == url_type) {
            Some(entry) => entry.protocol = protocol.to_string(),
            None => self.entries.push(SchemeEntry {
                url_type,
                protocol: protocol.to_string(),
                handler: None,
            }),
        }
        Ok(())
    }

    /// Second registration pass: installs the handler for a known type.
    pub fn register_url_handler<H>(&mut self, url_type: &UrlType, handler: H) -> RouterResult<()>
    where
        H: UrlHandler + 'static,
    {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| &e.url_type == url_type)
            .ok_or_else(|| RouterError::UnknownUrlType(url_type.to_string()))?;
        entry.handler = Some(Arc::new(handler));
        Ok(())
    }

    /// Replays both registration passes against the hypertext engine: every
    /// protocol first, then every handler.
    pub fn initialize(&self, engine: &mut dyn HtmlEngine) {
        for entry in &self.entries {
            engine.register_url_type(&entry.url_type, &entry.protocol);
        }
        for entry in &self.entries {
            if let Some(handler) = &entry.handler {
                engine.register_url_handler(&entry.url_type, Arc::clone(handler));
            }
        }
        info!(url_types = self.entries.len(), "registered business URL types");
    }

    /// Finds the entry for `link` and splits off its location.
    ///
    /// Entries are tried in registration order; the first protocol that
    /// prefixes the link wins. One `:` or `?` after the protocol is dropped.
    pub fn match_link<'l>(&self, link: &'l str) -> Option<(&SchemeEntry, &'l str)> {
        self.entries.iter().find_map(|entry| {
            let rest = link.strip_prefix(entry.protocol.as_str())?;
            let location = rest
                .strip_prefix(':')
                .or_else(|| rest.strip_prefix('?'))
                .unwrap_or(rest);
            Some((entry, location))
        })
    }

    /// Dispatches `link` to its handler and returns the handler's verdict.
    ///
    /// `Err` only when no registered protocol matches or the matching type
    /// has no handler; handler failures are reported through `result`.
    pub fn route(&self, ctx: &DispatchContext<'_>, link: &str, result: &mut UrlResult) -> RouterResult<bool> {
        result.load_to_stream = false;

        let (entry, location) = self
            .match_link(link)
            .ok_or_else(|| RouterError::UnknownScheme(link.to_string()))?;
        let handler = entry
            .handler
            .as_ref()
            .ok_or_else(|| RouterError::NoHandler(entry.url_type.to_string()))?;

        debug!(
            url_type = %entry.url_type,
            location,
            label = ctx.label.unwrap_or(""),
            new_window = ctx.new_window,
            "dispatching business link"
        );
        result.url_type = Some(entry.url_type.clone());
        result.location = Some(location.to_string());
        let handled = handler.handle(ctx, location, result);
        result.load_to_stream = false;
        Ok(handled)
    }

    pub fn protocol_for(&self, url_type: &UrlType) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.url_type == url_type)
            .map(|e| e.protocol.as_str())
    }

    /// Builds an owner-report link with this table's owner-report protocol.
    ///
    /// `None` when the owner is undefined or the owner report is not
    /// registered.
    pub fn owner_report_link(&self, owner: &Owner<'_>, account: Option<&Guid>) -> Option<String> {
        let protocol = self.protocol_for(&URL_TYPE_OWNER_REPORT.into())?;
        links::owner_report_link(protocol, owner, account)
    }

    pub fn entries(&self) -> &[SchemeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
