//! What a handler gets to work with, and where it reports back.

use bizlink_model::{Account, BusinessEntity, EntityStore, Owner};
use bizlink_types::EntityKind;
use tracing::warn;

use crate::{LinkError, UrlType};

/// Opaque reference to a top-level window of the host application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// The dialog and report layer that handlers hand resolved entities to.
///
/// Calls are fire-and-forget open requests.
pub trait Presenter {
    /// Opens the edit dialog for a customer, vendor, employee, job or invoice.
    fn open_edit_view(&self, kind: EntityKind, entity: &BusinessEntity, parent: WindowHandle);

    /// Runs the owner report, optionally restricted to one account.
    fn open_owner_report(&self, owner: &Owner<'_>, account: Option<&Account>, parent: WindowHandle);
}

/// Borrowed collaborators plus the per-activation details of one link.
#[derive(Clone, Copy)]
pub struct DispatchContext<'a> {
    pub store: &'a dyn EntityStore,
    pub presenter: &'a dyn Presenter,
    /// Anchor text of the activated link, if the engine supplied it.
    pub label: Option<&'a str>,
    /// Whether the user asked for the link to open in a new window.
    pub new_window: bool,
}

impl<'a> DispatchContext<'a> {
    pub fn new(store: &'a dyn EntityStore, presenter: &'a dyn Presenter) -> Self {
        Self {
            store,
            presenter,
            label: None,
            new_window: false,
        }
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_new_window(mut self, new_window: bool) -> Self {
        self.new_window = new_window;
        self
    }
}

/// Out-parameters of one dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlResult {
    /// Whether the engine should stream the link target itself. Business
    /// links are handled entirely by side effect, so this always ends false.
    pub load_to_stream: bool,
    /// Message for the status bar when the link could not be followed.
    pub error_message: Option<String>,
    /// Window any dialog or report should be parented to.
    pub parent: WindowHandle,
    /// URL type of the handler that received the link.
    pub url_type: Option<UrlType>,
    /// Link text with the protocol and separator removed.
    pub location: Option<String>,
}

impl UrlResult {
    pub fn new(parent: WindowHandle) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }

    /// Records `err` as the user-facing message, replacing any earlier one.
    pub(crate) fn fail(&mut self, err: LinkError) {
        warn!(error = %err, "business link rejected");
        self.error_message = Some(err.to_string());
    }
}
