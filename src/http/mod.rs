//! HTTP surface of the message board.
//!
//! Maps the `/messages` routes onto [`MessageBoardService`] operations and
//! serialises results as JSON.
//!
//! | Route                    | Success                     |
//! |--------------------------|-----------------------------|
//! | `GET /messages`          | `200` array of messages     |
//! | `POST /messages`         | `201` created message       |
//! | `GET /messages/:id`      | `200` message               |
//! | `PATCH /messages/:id`    | `200` updated message       |
//! | `DELETE /messages/:id`   | `204` empty body            |
//!
//! [`MessageBoardService`]: crate::message::services::MessageBoardService

mod error;
mod routes;
mod server;
mod state;


pub use error::ApiError;
pub use routes::router;
pub use server::Server;
pub use state::{AppState, BoardService};
