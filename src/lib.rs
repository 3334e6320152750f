pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod slug;
pub mod table;
