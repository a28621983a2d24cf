use chrono::Utc;
use nursery_storefront_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{
        BlogPosts, Categories, FooterLinks, HeroSections, MenuItems, PageContents, Products,
        blog_posts, categories, footer_links, hero_sections, menu_items, page_contents, products,
    },
    services::blog_service::slugify,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::json;
use uuid::Uuid;

const CATEGORIES: &[(&str, &str)] = &[
    ("Бонсай Нівакі", "https://images.prom.ua/6510283244_w640_h640_bonsaj-nivaki-pinus.jpg"),
    ("Туя Колумна", "https://images.prom.ua/5107358816_w640_h640_tuya-kolumna-columna.jpg"),
    ("Туя Смарагд", "https://images.prom.ua/5107353705_w640_h640_tuya-smaragd-smaragd.jpg"),
    ("Самшит", "https://images.prom.ua/5027226901_w640_h640_samshit-vichnozelenij-arborestsens.jpg"),
    ("Хвойні рослини", "https://images.prom.ua/713633902_w640_h640_hvojni-roslini.jpg"),
    ("Кімнатні рослини", "https://images.prom.ua/6901216283_w640_h640_kimnatni-roslini.jpg"),
];

struct SeedProduct {
    article: &'static str,
    name: &'static str,
    category: &'static str,
    price: f64,
    old_price: Option<f64>,
    badges: &'static [&'static str],
    stock: i32,
    image: &'static str,
}

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        article: "prod-b001",
        name: "Нівакі з сосни звичайної 185-190см",
        category: "Бонсай Нівакі",
        price: 47000.0,
        old_price: None,
        badges: &["hit"],
        stock: 1,
        image: "https://images.prom.ua/6815175822_w640_h640_nivaki-z-sosni.jpg",
    },
    SeedProduct {
        article: "prod-b003",
        name: "Нівакі з туї Міккі",
        category: "Бонсай Нівакі",
        price: 1200.0,
        old_price: Some(1400.0),
        badges: &["sale"],
        stock: 5,
        image: "https://images.prom.ua/5914702282_w640_h640_nivaki-z-tuyi.jpg",
    },
    SeedProduct {
        article: "prod-tc001",
        name: "Туя Колумна 80-100см",
        category: "Туя Колумна",
        price: 350.0,
        old_price: None,
        badges: &["hit"],
        stock: 50,
        image: "https://images.prom.ua/5107358816_w640_h640_tuya-kolumna-columna.jpg",
    },
    SeedProduct {
        article: "prod-tc003",
        name: "Туя Колумна 120-140см",
        category: "Туя Колумна",
        price: 550.0,
        old_price: None,
        badges: &["new"],
        stock: 40,
        image: "https://images.prom.ua/5107358816_w640_h640_tuya-kolumna-columna.jpg",
    },
    SeedProduct {
        article: "prod-ts001",
        name: "Туя Смарагд 100-120см",
        category: "Туя Смарагд",
        price: 420.0,
        old_price: Some(500.0),
        badges: &["sale", "hit"],
        stock: 60,
        image: "https://images.prom.ua/5107353705_w640_h640_tuya-smaragd-smaragd.jpg",
    },
    SeedProduct {
        article: "prod-s001",
        name: "Самшит вічнозелений куля 30см",
        category: "Самшит",
        price: 650.0,
        old_price: None,
        badges: &[],
        stock: 25,
        image: "https://images.prom.ua/5027226901_w640_h640_samshit-vichnozelenij-arborestsens.jpg",
    },
    SeedProduct {
        article: "prod-h001",
        name: "Ялина колюча Глаука 80см",
        category: "Хвойні рослини",
        price: 1800.0,
        old_price: None,
        badges: &["new"],
        stock: 7,
        image: "https://images.prom.ua/713633902_w640_h640_hvojni-roslini.jpg",
    },
    SeedProduct {
        article: "prod-k001",
        name: "Монстера делікатесна",
        category: "Кімнатні рослини",
        price: 900.0,
        old_price: None,
        badges: &[],
        stock: 12,
        image: "https://images.prom.ua/6901216283_w640_h640_kimnatni-roslini.jpg",
    },
];

const PAGES: &[(&str, &str, &str)] = &[
    ("about", "Про нас", "<p>Розсадник PlatanSad вирощує декоративні рослини для вашого саду.</p>"),
    ("delivery", "Доставка та оплата", "<p>Доставляємо рослини Новою Поштою по всій Україні.</p>"),
    ("contacts", "Контакти", "<p>Телефон: +380 (63) 650-74-49</p>"),
    ("return", "Обмін та повернення", "<p>Повернення можливе протягом 14 днів з моменту отримання.</p>"),
];

const FOOTER_LINKS: &[(&str, &str, &str, i32)] = &[
    ("company", "Про нас", "/about", 1),
    ("company", "Блог", "/blog", 2),
    ("company", "Контакти", "/contacts", 3),
    ("help", "Доставка та оплата", "/delivery", 1),
    ("help", "Обмін та повернення", "/return", 2),
    ("help", "Каталог", "/catalog", 3),
    ("social", "Instagram", "https://www.instagram.com/platansad.uaa", 1),
    ("social", "TikTok", "https://www.tiktok.com/@platansad.ua", 2),
];

const MENU: &[(&str, &str, i32)] = &[
    ("Головна", "/", 1),
    ("Каталог", "/catalog", 2),
    ("Блог", "/blog", 3),
    ("Контакти", "/contacts", 4),
];

const POSTS: &[(&str, &str, &str)] = &[
    (
        "Як посадити тую навесні",
        "Догляд",
        "<p>Туя добре приживається, якщо висадити її у вологий ґрунт на початку квітня.</p>",
    ),
    (
        "Формування нівакі: перші кроки",
        "Поради",
        "<p>Нівакі формують поступово, прорізаючи гілки двічі на рік.</p>",
    ),
];

#[derive(Default)]
struct Tally {
    inserted: usize,
    skipped: usize,
    failed: usize,
}

impl Tally {
    fn record(&mut self, label: &str, result: anyhow::Result<bool>) {
        match result {
            Ok(true) => self.inserted += 1,
            Ok(false) => self.skipped += 1,
            Err(err) => {
                self.failed += 1;
                eprintln!("Failed to seed {label}: {err}");
            }
        }
    }

    fn report(&self, what: &str) {
        println!(
            "Seeded {what}: {} inserted, {} already present, {} failed",
            self.inserted, self.skipped, self.failed
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, 1).await?;
    run_migrations(&orm).await?;

    seed_categories(&orm).await;
    seed_products(&orm).await;
    seed_pages(&orm).await;
    seed_hero(&orm).await;
    seed_footer_links(&orm).await;
    seed_menu(&orm).await;
    seed_posts(&orm).await;

    println!("Seed completed");
    Ok(())
}

async fn seed_categories(orm: &OrmConn) {
    let mut tally = Tally::default();
    for (name, icon) in CATEGORIES {
        tally.record(name, ensure_category(orm, name, icon).await);
    }
    tally.report("categories");
}

async fn ensure_category(orm: &OrmConn, name: &str, icon: &str) -> anyhow::Result<bool> {
    let existing = Categories::find()
        .filter(categories::Column::Name.eq(name))
        .one(orm)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }
    let count = PRODUCTS.iter().filter(|p| p.category == name).count() as i32;
    categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        icon: Set(icon.to_owned()),
        count: Set(count),
    }
    .insert(orm)
    .await?;
    Ok(true)
}

async fn seed_products(orm: &OrmConn) {
    let mut tally = Tally::default();
    for product in PRODUCTS {
        tally.record(product.article, ensure_product(orm, product).await);
    }
    tally.report("products");
}

async fn ensure_product(orm: &OrmConn, product: &SeedProduct) -> anyhow::Result<bool> {
    let existing = Products::find()
        .filter(products::Column::Article.eq(product.article))
        .one(orm)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }
    let discount = product
        .old_price
        .map(|old| ((old - product.price) / old * 100.0).round() as i32)
        .unwrap_or(0);
    products::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(product.name.to_owned()),
        article: Set(product.article.to_owned()),
        price: Set(product.price),
        old_price: Set(product.old_price),
        discount: Set(discount),
        image: Set(product.image.to_owned()),
        category: Set(product.category.to_owned()),
        badges: Set(json!(product.badges)),
        description: Set(format!(
            "{}. Вирощено у розсаднику PlatanSad.",
            product.name
        )),
        stock: Set(product.stock),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    Ok(true)
}

async fn seed_pages(orm: &OrmConn) {
    let mut tally = Tally::default();
    for (key, title, content) in PAGES {
        tally.record(key, ensure_page(orm, key, title, content).await);
    }
    tally.report("pages");
}

async fn ensure_page(orm: &OrmConn, key: &str, title: &str, content: &str) -> anyhow::Result<bool> {
    let existing = PageContents::find()
        .filter(page_contents::Column::PageKey.eq(key))
        .one(orm)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }
    page_contents::ActiveModel {
        id: Set(Uuid::new_v4()),
        page_key: Set(key.to_owned()),
        title: Set(title.to_owned()),
        content: Set(content.to_owned()),
        meta_description: Set(Some(format!("{title} | PlatanSad"))),
        meta_keywords: Set(None),
        updated_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    Ok(true)
}

async fn seed_hero(orm: &OrmConn) {
    let mut tally = Tally::default();
    tally.record("hero", ensure_hero(orm).await);
    tally.report("hero section");
}

async fn ensure_hero(orm: &OrmConn) -> anyhow::Result<bool> {
    if HeroSections::find_by_id("main").one(orm).await?.is_some() {
        return Ok(false);
    }
    hero_sections::ActiveModel {
        id: Set("main".to_owned()),
        title: Set("Розсадник PlatanSad".to_owned()),
        subtitle: Set(Some("Декоративні рослини для вашого саду".to_owned())),
        button_text: Set(Some("Перейти до каталогу".to_owned())),
        button_link: Set(Some("/catalog".to_owned())),
        background_image: Set(None),
        updated_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    Ok(true)
}

async fn seed_footer_links(orm: &OrmConn) {
    let mut tally = Tally::default();
    for (section, title, url, order) in FOOTER_LINKS {
        tally.record(title, ensure_footer_link(orm, section, title, url, *order).await);
    }
    tally.report("footer links");
}

async fn ensure_footer_link(
    orm: &OrmConn,
    section: &str,
    title: &str,
    url: &str,
    order: i32,
) -> anyhow::Result<bool> {
    let existing = FooterLinks::find()
        .filter(footer_links::Column::Section.eq(section))
        .filter(footer_links::Column::Title.eq(title))
        .one(orm)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }
    footer_links::ActiveModel {
        id: Set(Uuid::new_v4()),
        section: Set(section.to_owned()),
        title: Set(title.to_owned()),
        url: Set(url.to_owned()),
        sort_order: Set(order),
        is_active: Set(true),
        updated_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    Ok(true)
}

async fn seed_menu(orm: &OrmConn) {
    let mut tally = Tally::default();
    for (title, url, order) in MENU {
        tally.record(title, ensure_menu_item(orm, title, url, *order).await);
    }
    tally.report("menu items");
}

async fn ensure_menu_item(orm: &OrmConn, title: &str, url: &str, order: i32) -> anyhow::Result<bool> {
    let existing = MenuItems::find()
        .filter(menu_items::Column::Url.eq(url))
        .one(orm)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }
    menu_items::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_owned()),
        url: Set(url.to_owned()),
        icon: Set(None),
        sort_order: Set(order),
        is_active: Set(true),
        parent_id: Set(None),
        updated_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    Ok(true)
}

async fn seed_posts(orm: &OrmConn) {
    let mut tally = Tally::default();
    for (title, category, content) in POSTS {
        tally.record(title, ensure_post(orm, title, category, content).await);
    }
    tally.report("blog posts");
}

async fn ensure_post(orm: &OrmConn, title: &str, category: &str, content: &str) -> anyhow::Result<bool> {
    let slug = slugify(title);
    let existing = BlogPosts::find()
        .filter(blog_posts::Column::Slug.eq(slug.as_str()))
        .one(orm)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }
    let now = Utc::now();
    blog_posts::ActiveModel {
        id: Set(Uuid::new_v4()),
        slug: Set(slug),
        title: Set(title.to_owned()),
        excerpt: Set(None),
        content: Set(content.to_owned()),
        image_url: Set(None),
        author: Set("PlatanSad".to_owned()),
        category: Set(Some(category.to_owned())),
        tags: Set(json!([category])),
        is_published: Set(true),
        views: Set(0),
        meta_description: Set(None),
        meta_keywords: Set(None),
        published_at: Set(now.into()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(orm)
    .await?;
    Ok(true)
}
