//! Application state and logic for the TUI.
//!
//! [`App`] owns the [`InventoryState`] snapshot and is the only writer of
//! it. Page requests run on spawned tokio tasks and come back as
//! [`AppMessage`]s over an unbounded channel, so every state transition
//! happens on the UI loop.

mod handlers;
mod messages;

pub use handlers::{is_near_bottom, NEAR_BOTTOM_ROWS};
pub use messages::AppMessage;

use std::sync::Arc;

use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::{AvailabilityFilter, CatalogClient, InventoryState};

/// Main application state
pub struct App {
    /// Catalog snapshot (catalog, summary, filtered view, pagination)
    pub state: InventoryState,
    /// Catalog API client shared with fetch tasks
    pub client: Arc<CatalogClient>,
    /// Selection and offset of the book table
    pub table: TableState,
    /// Table rows visible in the last frame (for page up/down)
    pub table_viewport_rows: usize,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into fetch tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Task for the request currently in flight
    in_flight: Option<JoinHandle<()>>,
}

impl App {
    /// Create the app around a catalog client. Nothing is fetched until
    /// [`App::mount`].
    pub fn new(client: Arc<CatalogClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: InventoryState::new(),
            client,
            table: TableState::default(),
            table_viewport_rows: 0,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            in_flight: None,
        }
    }

    /// Show the dashboard for the first time: loads page 1.
    pub fn mount(&mut self) {
        self.transition(InventoryState::on_mount);
    }

    /// The table reached its end; loads the next page if allowed.
    pub fn scroll_near_bottom(&mut self) {
        self.transition(InventoryState::on_scroll_near_bottom);
    }

    /// Retry the page whose request failed.
    pub fn retry(&mut self) {
        self.transition(InventoryState::on_retry);
    }

    /// Switch the availability filter and reset the table selection.
    pub fn set_filter(&mut self, filter: AvailabilityFilter) {
        let state = std::mem::take(&mut self.state);
        self.state = state.on_filter_change(filter);
        let first = if self.state.filtered().is_empty() {
            None
        } else {
            Some(0)
        };
        self.table = TableState::default().with_selected(first);
        self.mark_dirty();
    }

    /// Apply a message from a fetch task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PageLoaded { page, result } => {
                if self.state.phase().in_flight() == Some(page) {
                    self.in_flight = None;
                }
                let state = std::mem::take(&mut self.state);
                self.state = state.on_fetch_resolved(page, result);
                self.clamp_selection();
                self.mark_dirty();
            }
        }
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.loading() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Abort the request in flight, if any. Called on teardown so a late
    /// response does not touch a dashboard that is going away.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            tracing::debug!("aborting in-flight page request");
            handle.abort();
        }
    }

    /// True while a fetch task is alive.
    pub fn has_request_in_flight(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Run a state transition and start the fetch it asks for.
    fn transition<F>(&mut self, f: F)
    where
        F: FnOnce(InventoryState) -> (InventoryState, Option<u32>),
    {
        let state = std::mem::take(&mut self.state);
        let (state, fetch) = f(state);
        self.state = state;
        if let Some(page) = fetch {
            self.spawn_fetch(page);
        }
        self.mark_dirty();
    }

    fn spawn_fetch(&mut self, page: u32) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let handle = tokio::spawn(async move {
            let result = client.load_page(page).await;
            // receiver gone means the app is shutting down
            let _ = tx.send(AppMessage::PageLoaded { page, result });
        });
        self.in_flight = Some(handle);
    }

    /// Keep the selection inside the filtered rows.
    fn clamp_selection(&mut self) {
        let len = self.state.filtered().len();
        let selected = match (self.table.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.table.select(selected);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
