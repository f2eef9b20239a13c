pub mod api_utils;
pub mod components;
pub mod data_table;
pub mod date_utils;
pub mod export;
pub mod form_validation;
pub mod icons;
pub mod page_frame;
pub mod query_state;
pub mod request_seq;
