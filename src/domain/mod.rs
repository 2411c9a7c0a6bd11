pub mod city;
pub mod favorite;
pub mod neighborhood;
pub mod property;
pub mod review;
pub mod slug;
pub mod user;
pub mod validation;

pub use city::{City, CityInput, CityPatch, NewCity};
pub use favorite::{Favorite, FavoriteInput, FavoriteKey, NewFavorite};
pub use neighborhood::{Neighborhood, NeighborhoodInput, NewNeighborhood};
pub use property::{NewProperty, Property, PropertyInput, PropertyPatch};
pub use review::{NewReview, Review, ReviewInput};
pub use slug::slugify;
pub use user::{NewUser, User, UserInput};
