pub mod list;
pub mod details;
