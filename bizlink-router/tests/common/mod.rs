//! Shared fakes for router tests.

#![allow(dead_code)]

use bizlink_model::{Account, Book, BusinessEntity, Owner};
use bizlink_router::{HtmlEngine, Presenter, UrlHandler, UrlType, WindowHandle};
use bizlink_types::{EntityKind, Guid};
use std::cell::RefCell;
use std::sync::Arc;

/// A presentation call, captured by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EditView {
        kind: EntityKind,
        guid: Guid,
        parent: WindowHandle,
    },
    OwnerReport {
        owner_kind: Option<EntityKind>,
        owner_guid: Option<Guid>,
        account: Option<Guid>,
        parent: WindowHandle,
    },
}

/// Presenter that only remembers what it was asked to open.
#[derive(Default)]
pub struct RecordingPresenter {
    calls: RefCell<Vec<Call>>,
}

impl RecordingPresenter {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

impl Presenter for RecordingPresenter {
    fn open_edit_view(&self, kind: EntityKind, entity: &BusinessEntity, parent: WindowHandle) {
        self.calls.borrow_mut().push(Call::EditView {
            kind,
            guid: entity.guid,
            parent,
        });
    }

    fn open_owner_report(&self, owner: &Owner<'_>, account: Option<&Account>, parent: WindowHandle) {
        self.calls.borrow_mut().push(Call::OwnerReport {
            owner_kind: owner.kind(),
            owner_guid: owner.guid(),
            account: account.map(|a| a.guid),
            parent,
        });
    }
}

/// Hypertext engine that logs registrations in arrival order.
#[derive(Default)]
pub struct RecordingEngine {
    pub url_types: Vec<(String, String)>,
    pub handlers: Vec<(String, Arc<dyn UrlHandler>)>,
}

impl HtmlEngine for RecordingEngine {
    fn register_url_type(&mut self, url_type: &UrlType, protocol: &str) {
        self.url_types
            .push((url_type.to_string(), protocol.to_string()));
    }

    fn register_url_handler(&mut self, url_type: &UrlType, handler: Arc<dyn UrlHandler>) {
        self.handlers.push((url_type.to_string(), handler));
    }
}

/// Known entities of every kind, plus one account.
pub struct Fixture {
    pub book: Book,
    pub customer: Guid,
    pub vendor: Guid,
    pub employee: Guid,
    pub job: Guid,
    pub invoice: Guid,
    pub account: Guid,
}

impl Fixture {
    pub fn new() -> Self {
        let mut book = Book::new();
        let customer = book
            .insert(BusinessEntity::new(EntityKind::Customer, "000001", "Acme Corp"))
            .unwrap();
        let vendor = book
            .insert(BusinessEntity::new(EntityKind::Vendor, "000002", "Parts Ltd"))
            .unwrap();
        let employee = book
            .insert(BusinessEntity::new(EntityKind::Employee, "000003", "Pat Doe"))
            .unwrap();
        let job = book
            .insert(BusinessEntity::new(EntityKind::Job, "000004", "Roof repair"))
            .unwrap();
        let invoice = book
            .insert(BusinessEntity::new(EntityKind::Invoice, "INV-0005", ""))
            .unwrap();
        let account = book
            .insert_account(Account::new("Accounts Receivable"))
            .unwrap();
        Self {
            book,
            customer,
            vendor,
            employee,
            job,
            invoice,
            account,
        }
    }

    pub fn guid_of(&self, kind: EntityKind) -> Guid {
        match kind {
            EntityKind::Customer => self.customer,
            EntityKind::Vendor => self.vendor,
            EntityKind::Employee => self.employee,
            EntityKind::Job => self.job,
            EntityKind::Invoice => self.invoice,
        }
    }
}
