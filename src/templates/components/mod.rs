pub mod breadcrumb;
pub mod error;
pub mod filter_list;
pub mod pagination;
pub mod property_card;
pub mod search_bar;
pub mod widgets;

pub use breadcrumb::breadcrumb;
pub use error::html_error_response;
pub use filter_list::filter_list;
pub use pagination::pagination;
pub use search_bar::search_bar;
