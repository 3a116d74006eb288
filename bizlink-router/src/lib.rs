//! Business hyperlink router for the embedded report view.
//!
//! Reports render links such as `gncCustomer:customer=<guid>` or
//! `gnc-ownerreport?owner=c:<guid>&acct=<guid>`. When one is activated the
//! hypertext engine hands it to a [`SchemeRouter`], which picks the handler
//! registered for the link's protocol. The handler resolves the referenced
//! entity in the current book and asks the [`Presenter`] to open an editor or
//! an owner report. Failures never escape a handler: they land in the
//! [`UrlResult`] as a user-facing message.
//!
//! The hypertext engine, the presentation layer and the book are external
//! collaborators, reached through [`HtmlEngine`], [`Presenter`] and
//! [`bizlink_model::EntityStore`].

mod config;
mod context;
mod error;
pub mod handlers;
pub mod links;
pub mod logging;
pub mod owner;
pub mod query;
pub mod resolve;
mod router;

pub use config::RouterConfig;
pub use context::{DispatchContext, Presenter, UrlResult, WindowHandle};
pub use error::{LinkError, ResolveError, RouterError, RouterResult};
pub use query::{ParameterMap, parse_parameters};
pub use resolve::resolve_entity;
pub use router::{HtmlEngine, OWNER_REPORT_PROTOCOL, SchemeEntry, SchemeRouter, URL_TYPE_OWNER_REPORT, UrlHandler, UrlType};
