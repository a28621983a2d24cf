use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{
            DashboardStats, ImageUploadResponse, OrderStats, OrdersByStatus, RevenueChart,
            RevenuePoint, StatusBreakdown, TopCustomer, TopCustomerList, TopProduct,
            TopProductList, UpdateOrderStatusRequest,
        },
        auth::{LoginRequest, LoginResponse, VerifyResponse},
        blog::{BlogPostCreated, BlogPostList, CreateBlogPostRequest, UpdateBlogPostRequest},
        cart::{AddToCartRequest, CartList, UpdateCartItemRequest},
        categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
        cms::{
            CreateFooterLinkRequest, CreatePageRequest, CreatedResponse, FooterLinkList,
            HeroSectionRequest, PageList, UpdateFooterLinkRequest, UpdatePageRequest,
        },
        media::{MediaFileList, MediaStats, MediaTypeCounts, UpdateMediaRequest},
        menu::{CreateMenuItemRequest, MenuItemList, UpdateMenuItemRequest},
        orders::{CreateOrderRequest, OrderList},
        payments::{CallbackRequest, CallbackResponse, CheckoutResponse, PaymentStatusResponse},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        quick_orders::{CreateQuickOrderRequest, QuickOrderList},
        settings::UpdateSiteSettingsRequest,
        wishlist::{AddToWishlistRequest, WishlistList},
    },
    models::{
        Badge, BlogPost, CartItem, Category, FooterLink, HeroSection, MediaFile, MenuItem, Order,
        OrderLine, PageContent, Product, QuickOrder, SiteSettings, WishlistItem,
    },
    response::{ApiResponse, Meta},
    routes::{
        admin, auth, blog, cart, categories, cms, health, media, menu, orders, payments,
        products, quick_orders, settings, wishlist,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        cart::clear_cart,
        wishlist::list_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        quick_orders::create_quick_order,
        quick_orders::list_quick_orders,
        quick_orders::get_quick_order,
        auth::login,
        auth::verify,
        admin::dashboard_stats,
        admin::revenue_chart,
        admin::top_products,
        admin::list_orders,
        admin::update_order_status,
        admin::order_stats,
        admin::orders_by_status,
        admin::top_customers,
        admin::upload_image,
        admin::get_site_settings,
        admin::save_site_settings,
        settings::public_settings,
        cms::list_pages,
        cms::get_page,
        cms::create_page,
        cms::update_page,
        cms::delete_page,
        cms::get_hero,
        cms::save_hero,
        cms::list_footer_links,
        cms::create_footer_link,
        cms::update_footer_link,
        cms::delete_footer_link,
        blog::list_posts,
        blog::get_post,
        blog::create_post,
        blog::update_post,
        blog::delete_post,
        menu::list_items,
        menu::create_item,
        menu::update_item,
        menu::delete_item,
        media::list_files,
        media::get_file,
        media::upload_file,
        media::update_file,
        media::delete_file,
        media::media_stats,
        payments::create_checkout,
        payments::callback,
        payments::payment_status
    ),
    components(
        schemas(
            Badge,
            Product,
            Category,
            CartItem,
            WishlistItem,
            OrderLine,
            Order,
            QuickOrder,
            PageContent,
            HeroSection,
            FooterLink,
            BlogPost,
            MenuItem,
            MediaFile,
            SiteSettings,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CategoryList,
            AddToCartRequest,
            UpdateCartItemRequest,
            CartList,
            AddToWishlistRequest,
            WishlistList,
            CreateOrderRequest,
            OrderList,
            CreateQuickOrderRequest,
            QuickOrderList,
            LoginRequest,
            LoginResponse,
            VerifyResponse,
            DashboardStats,
            RevenuePoint,
            RevenueChart,
            TopProduct,
            TopProductList,
            OrderStats,
            OrdersByStatus,
            StatusBreakdown,
            TopCustomer,
            TopCustomerList,
            UpdateOrderStatusRequest,
            ImageUploadResponse,
            UpdateSiteSettingsRequest,
            CreatePageRequest,
            UpdatePageRequest,
            PageList,
            HeroSectionRequest,
            CreateFooterLinkRequest,
            UpdateFooterLinkRequest,
            FooterLinkList,
            CreatedResponse,
            CreateBlogPostRequest,
            UpdateBlogPostRequest,
            BlogPostCreated,
            BlogPostList,
            CreateMenuItemRequest,
            UpdateMenuItemRequest,
            MenuItemList,
            UpdateMediaRequest,
            MediaTypeCounts,
            MediaStats,
            MediaFileList,
            CheckoutResponse,
            CallbackRequest,
            CallbackResponse,
            PaymentStatusResponse,
            health::HealthData,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog"),
        (name = "Categories", description = "Product categories"),
        (name = "Cart", description = "Guest and user carts"),
        (name = "Wishlist", description = "Saved products"),
        (name = "Orders", description = "Checkout and quick orders"),
        (name = "Auth", description = "Admin authentication"),
        (name = "Admin", description = "Dashboard and order management"),
        (name = "Settings", description = "Storefront settings"),
        (name = "CMS", description = "Pages, hero banner and footer links"),
        (name = "Blog", description = "Blog posts"),
        (name = "Menu", description = "Navigation menu"),
        (name = "Media", description = "Media library"),
        (name = "Payments", description = "LiqPay sandbox checkout"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
