pub mod admin;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod categories;
pub mod cms;
pub mod media;
pub mod menu;
pub mod orders;
pub mod payments;
pub mod products;
pub mod quick_orders;
pub mod settings;
pub mod wishlist;
