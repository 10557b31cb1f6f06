pub mod contact;
pub mod handlers;
pub mod preview;
