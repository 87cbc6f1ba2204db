//! Shared request state.

use crate::message::{ports::MessageStore, services::MessageBoardService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Board service over a type-erased store, as used by the handlers.
pub type BoardService = MessageBoardService<dyn MessageStore, DefaultClock>;

/// State handed to every handler.
///
/// Built once per server (or per test) from an explicit store instance.
#[derive(Clone)]
pub struct AppState {
    board: BoardService,
}

impl AppState {
    /// Creates state backed by `store`.
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self {
            board: MessageBoardService::new(store, Arc::new(DefaultClock)),
        }
    }

    /// Returns the board service.
    #[must_use]
    pub const fn board(&self) -> &BoardService {
        &self.board
    }
}
