pub mod blog_posts;
pub mod cart_items;
pub mod categories;
pub mod footer_links;
pub mod hero_sections;
pub mod media_files;
pub mod menu_items;
pub mod orders;
pub mod page_contents;
pub mod products;
pub mod quick_orders;
pub mod site_settings;
pub mod wishlist_items;

pub use blog_posts::Entity as BlogPosts;
pub use cart_items::Entity as CartItems;
pub use categories::Entity as Categories;
pub use footer_links::Entity as FooterLinks;
pub use hero_sections::Entity as HeroSections;
pub use media_files::Entity as MediaFiles;
pub use menu_items::Entity as MenuItems;
pub use orders::Entity as Orders;
pub use page_contents::Entity as PageContents;
pub use products::Entity as Products;
pub use quick_orders::Entity as QuickOrders;
pub use site_settings::Entity as SiteSettings;
pub use wishlist_items::Entity as WishlistItems;
