// Domain layer: entities and the loader port. No I/O happens here.

pub mod ingredient;
pub mod lunch;
pub mod ports;
pub mod recipe;

pub use ingredient::Ingredient;
pub use lunch::Lunch;
pub use ports::DataLoader;
pub use recipe::Recipe;
