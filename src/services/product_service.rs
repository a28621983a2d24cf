use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::{Badge, Product},
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (skip, limit) = query.window();
    let mut condition = Condition::all();

    if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let pattern = contains_pattern(search);
        condition = condition.add(
            Condition::any()
                .add(lower(Column::Name).like(pattern.clone()))
                .add(lower(Column::Description).like(pattern.clone()))
                .add(lower(Column::Article).like(pattern)),
        );
    }

    if let Some(category) = query.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        condition = condition.add(lower(Column::Category).like(contains_pattern(category)));
    }

    if let Some(badge) = query.badge {
        condition = condition.add(
            Expr::expr(Expr::col(Column::Badges).cast_as(Alias::new("text")))
                .like(format!("%\"{}\"%", badge.as_str())),
        );
    }

    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }

    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }

    let finder = Products::find().filter(condition);
    let finder = match query.sort() {
        ProductSortBy::NameAsc => finder.order_by_asc(Column::Name),
        ProductSortBy::PriceAsc => finder.order_by_asc(Column::Price),
        ProductSortBy::PriceDesc => finder.order_by_desc(Column::Price),
    };

    let items = finder
        .offset(skip)
        .limit(limit)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(Meta::window(skip, limit)),
    ))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = find_product(state, id).await?;
    Ok(ApiResponse::success(
        "Product",
        product_from_entity(product),
        None,
    ))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    validate_price(payload.price)?;
    validate_stock(payload.stock)?;
    ensure_article_free(state, &payload.article, None).await?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        article: Set(payload.article),
        price: Set(payload.price),
        old_price: Set(payload.old_price),
        discount: Set(payload.discount),
        image: Set(payload.image),
        category: Set(payload.category),
        badges: Set(encode_badges(&payload.badges)),
        description: Set(payload.description),
        stock: Set(payload.stock),
        created_at: Set(Utc::now().into()),
    };
    let product = active.insert(&state.orm).await?;
    tracing::info!(product_id = %product.id, article = %product.article, "product created");

    Ok(ApiResponse::success(
        "Product created",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = find_product(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(article) = payload.article {
        ensure_article_free(state, &article, Some(id)).await?;
        active.article = Set(article);
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
        active.price = Set(price);
    }
    if let Some(old_price) = payload.old_price {
        active.old_price = Set(old_price);
    }
    if let Some(discount) = payload.discount {
        active.discount = Set(discount);
    }
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(badges) = payload.badges {
        active.badges = Set(encode_badges(&badges));
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(stock) = payload.stock {
        validate_stock(stock)?;
        active.stock = Set(stock);
    }

    let product = active.update(&state.orm).await?;
    tracing::debug!(product_id = %product.id, "product updated");

    Ok(ApiResponse::success(
        "Updated",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Product"));
    }
    tracing::info!(product_id = %id, "product deleted");

    Ok(ApiResponse::success(
        "Product deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub(crate) async fn find_product(state: &AppState, id: Uuid) -> AppResult<ProductModel> {
    Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Product"))
}

async fn ensure_article_free(state: &AppState, article: &str, except: Option<Uuid>) -> AppResult<()> {
    let mut finder = Products::find().filter(Column::Article.eq(article));
    if let Some(id) = except {
        finder = finder.filter(Column::Id.ne(id));
    }
    if finder.one(&state.orm).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Product with article {article} already exists"
        )));
    }
    Ok(())
}

/// Case-insensitive substring pattern. `%`, `_` and `\` in the input match
/// literally.
fn contains_pattern(input: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(&input.to_lowercase()))).escape('\\')
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `LOWER(column)`, portable across Postgres and SQLite.
fn lower(column: Column) -> Expr {
    Expr::expr(Func::lower(Expr::col(column)))
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest("Price must be a non-negative number".into()));
    }
    Ok(())
}

fn validate_stock(stock: i32) -> AppResult<()> {
    if stock < 0 {
        return Err(AppError::BadRequest("Stock cannot be negative".into()));
    }
    Ok(())
}

pub(crate) fn encode_badges(badges: &[Badge]) -> serde_json::Value {
    let mut names: Vec<&str> = Vec::with_capacity(badges.len());
    for name in badges.iter().map(Badge::as_str) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    serde_json::json!(names)
}

/// Unknown badge names in stored rows are skipped.
pub(crate) fn decode_badges(value: &serde_json::Value) -> Vec<Badge> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<Badge>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn product_from_entity(model: ProductModel) -> Product {
    Product {
        badges: decode_badges(&model.badges),
        id: model.id,
        name: model.name,
        article: model.article,
        price: model.price,
        old_price: model.old_price,
        discount: model.discount,
        image: model.image,
        category: model.category,
        description: model.description,
        stock: model.stock,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_round_trip_through_json() {
        let value = encode_badges(&[Badge::Hit, Badge::Sale]);
        assert_eq!(value, serde_json::json!(["hit", "sale"]));
        assert_eq!(decode_badges(&value), vec![Badge::Hit, Badge::Sale]);

        let value = encode_badges(&[Badge::Hit, Badge::Sale, Badge::Hit, Badge::New, Badge::Sale]);
        assert_eq!(value, serde_json::json!(["hit", "sale", "new"]));
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("r_1"), "r\\_1");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("thuja"), "thuja");
    }

    #[test]
    fn unknown_badges_are_skipped() {
        let value = serde_json::json!(["hit", "bestseller", 3]);
        assert_eq!(decode_badges(&value), vec![Badge::Hit]);
        assert!(decode_badges(&serde_json::json!({})).is_empty());
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(0.0).is_ok());
    }
}
