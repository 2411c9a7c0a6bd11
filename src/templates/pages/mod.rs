pub mod city;
pub mod home;
pub mod hospitable_search;
pub mod property;
pub mod search;

pub use city::{city_page, CityVm};
pub use home::{home_page, HomeVm};
pub use hospitable_search::hospitable_search_page;
pub use property::{property_page, PropertyVm};
pub use search::{search_page, SearchVm};
