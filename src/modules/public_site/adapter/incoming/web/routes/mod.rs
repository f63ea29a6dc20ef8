mod get_details;
mod get_index;

pub use get_details::get_details_handler;
pub use get_index::get_index_handler;
