pub mod cell_renderers;
pub mod date_range_filter;
pub mod modal_dialog;
pub mod pagination_controls;
pub mod table;
