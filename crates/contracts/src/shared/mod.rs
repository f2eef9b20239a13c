pub mod export;
pub mod list_query;
