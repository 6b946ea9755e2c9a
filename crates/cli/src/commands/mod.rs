pub mod detect;
pub mod message;
pub mod render;
pub mod send;
