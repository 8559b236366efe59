use crate::config::AppConfig;
use crate::domain::customer::{Customer, CustomerId};
use crate::domain::dialog::DialogState;
use crate::domain::navigation::NavPayload;
use crate::domain::page_view::{self, PageView};
use crate::domain::status_message::StatusMessage;
use crate::repository::customer_repository::CustomerSource;
use crate::services::customer_store::CustomerStore;
use crate::services::error_handling::{LogHelper, UserErrorFormatter};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Ready,
}

/// Issued when a fetch starts. Only the most recent ticket may apply its
/// result; older completions are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub removed: bool,
    /// Generation of the status message to expire later.
    pub status_generation: Option<u64>,
    /// Set when the delete emptied the collection.
    pub refetch: Option<FetchTicket>,
}

/// State machine behind the customer table: when to fetch, which rows the
/// current page shows, the detail dialog and the transient status line.
#[derive(Clone)]
pub struct ListController {
    store: CustomerStore,
    quantity: u32,
    delete_message: String,
    phase: ListPhase,
    view: PageView,
    dialog: DialogState,
    status: StatusMessage,
    latest_ticket: u64,
    last_error: Option<String>,
}

impl PartialEq for ListController {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
            && self.phase == other.phase
            && self.view == other.view
            && self.dialog == other.dialog
            && self.status == other.status
            && self.latest_ticket == other.latest_ticket
            && self.last_error == other.last_error
    }
}

impl ListController {
    pub fn new(store: CustomerStore, config: &AppConfig) -> Self {
        Self {
            store,
            quantity: config.quantity,
            delete_message: config.delete_message.clone(),
            phase: ListPhase::Idle,
            view: PageView::empty(config.page_size),
            dialog: DialogState::default(),
            status: StatusMessage::new(config.status_ttl()),
            latest_ticket: 0,
            last_error: None,
        }
    }

    /// Called each time the list screen is shown, with the payload addressed
    /// to it (if any). Returns a ticket when a fetch must be started.
    pub fn enter(&mut self, payload: Option<NavPayload>) -> Option<FetchTicket> {
        if matches!(payload, Some(NavPayload::Saved)) {
            debug!(page = self.view.page, "Returning from save, skipping fetch");
            self.reslice(self.view.page);
            self.phase = ListPhase::Ready;
            return None;
        }
        self.ensure_loaded()
    }

    /// Starts a fetch if the shared collection is empty and none is running,
    /// otherwise rebuilds the current page from the collection.
    pub fn ensure_loaded(&mut self) -> Option<FetchTicket> {
        if self.phase == ListPhase::Loading {
            return None;
        }
        if self.store.is_empty() {
            return Some(self.begin_fetch());
        }
        self.reslice(self.view.page);
        self.phase = ListPhase::Ready;
        None
    }

    /// Explicit user refresh: always fetches.
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    /// Gives up on a running fetch whose task went away with the screen.
    /// Its ticket is retired and the next entry starts over.
    pub fn abandon_fetch(&mut self) -> bool {
        if self.phase != ListPhase::Loading {
            return false;
        }
        debug!(ticket = self.latest_ticket, "Abandoning in-flight fetch");
        self.latest_ticket += 1;
        self.phase = if self.store.is_empty() { ListPhase::Idle } else { ListPhase::Ready };
        true
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.phase = ListPhase::Loading;
        info!(ticket = self.latest_ticket, quantity = self.quantity, "Fetching customers");
        FetchTicket(self.latest_ticket)
    }

    /// Applies a fetch result. Returns `false` if the ticket was superseded.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Customer>>) -> bool {
        if ticket.0 != self.latest_ticket {
            warn!(ticket = ticket.0, latest = self.latest_ticket, "Discarding superseded fetch result");
            return false;
        }

        match result {
            Ok(customers) => {
                let page_size = self.view.page_size;
                self.store.replace_all(customers);
                // a new collection always starts on page one
                self.view = self.store.with(|all| PageView::first_page(all, page_size));
                self.status.clear();
                self.last_error = None;
            }
            Err(e) => {
                LogHelper::log_error_with_context("fetch customers", &e);
                self.last_error = Some(UserErrorFormatter::format_for_ui(&e));
                self.reslice(self.view.page);
            }
        }
        self.phase = ListPhase::Ready;
        true
    }

    /// Runs a started fetch to completion against `source`.
    pub async fn fetch_with<S>(&mut self, ticket: FetchTicket, source: &S) -> bool
    where
        S: CustomerSource + ?Sized,
    {
        let result = source.fetch_batch(self.quantity).await;
        self.complete_fetch(ticket, result)
    }

    pub fn next_page(&mut self) -> bool {
        if self.view.page >= self.total_pages() {
            return false;
        }
        self.reslice(self.view.page + 1);
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.view.page <= 1 {
            return false;
        }
        self.reslice(self.view.page - 1);
        true
    }

    /// Removes a record locally. The page number stays put even when the
    /// page becomes short, and only moves back when the page no longer exists.
    pub fn delete(&mut self, id: &CustomerId, now: DateTime<Utc>) -> DeleteOutcome {
        let removed = self.store.remove_by_id(id);
        if !removed {
            return DeleteOutcome {
                removed,
                status_generation: None,
                refetch: None,
            };
        }

        if self.view.page > self.total_pages() {
            let last = self.total_pages();
            self.reslice(last);
        } else {
            self.view.rows.retain(|c| &c.id != id);
        }
        if self.dialog.selected().is_some_and(|c| &c.id == id) {
            self.dialog.close();
        }
        let generation = self.status.set(self.delete_message.clone(), now);
        let refetch = if self.store.is_empty() { self.ensure_loaded() } else { None };

        DeleteOutcome {
            removed,
            status_generation: Some(generation),
            refetch,
        }
    }

    pub fn open_dialog(&mut self, customer: Customer) {
        self.dialog.open(customer);
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    /// Payload to send along with the navigation to the profile screen.
    pub fn request_edit(&self, customer: Customer) -> NavPayload {
        NavPayload::Edit(customer)
    }

    pub fn set_status(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.status.set(text, now)
    }

    pub fn expire_status(&mut self, generation: u64) -> bool {
        self.status.expire(generation)
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    fn reslice(&mut self, page: usize) {
        let page_size = self.view.page_size;
        self.view = self.store.with(|all| PageView::compute(all, page, page_size));
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn page(&self) -> usize {
        self.view.page
    }

    pub fn page_size(&self) -> usize {
        self.view.page_size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_pages(&self) -> usize {
        page_view::total_pages(self.store.len(), self.view.page_size)
    }

    pub fn can_prev(&self) -> bool {
        self.view.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.view.page < self.total_pages()
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn rows(&self) -> &[Customer] {
        &self.view.rows
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn store(&self) -> &CustomerStore {
        &self.store
    }
}
