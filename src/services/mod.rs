pub mod admin_service;
pub mod auth_service;
pub mod blog_service;
pub mod cart_service;
pub mod category_service;
pub mod cms_service;
pub mod media_service;
pub mod menu_service;
pub mod order_service;
pub mod payment_service;
pub mod product_service;
pub mod quick_order_service;
pub mod wishlist_service;
