//! Application services for the message board.

mod board;

pub use board::{
    CreateMessageRequest, MessageBoardError, MessageBoardResult, MessageBoardService,
    UpdateMessageRequest,
};
