use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::{
        admin::{
            AdminOrderQuery, DashboardStats, OrderStats, OrdersByStatus, RevenueChart,
            RevenuePoint, StatusBreakdown, TopCustomer, TopCustomerList, TopProduct,
            TopProductList, UpdateOrderStatusRequest,
        },
        orders::OrderList,
        settings::UpdateSiteSettingsRequest,
    },
    entity::{
        categories::Entity as Categories,
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::{Column as ProdCol, Entity as Products},
        site_settings::{ActiveModel as SettingsActive, Entity as SiteSettingsEntity, Model as SettingsModel},
    },
    error::{AppError, AppResult},
    models::{Order, SiteSettings},
    response::{ApiResponse, Meta},
    services::order_service::{STATUS_CANCELLED, STATUS_PENDING, find_order, order_from_entity, order_lines},
    state::AppState,
};

pub const LOW_STOCK_THRESHOLD: i32 = 10;
pub const SETTINGS_ROW_ID: &str = "main";
const RECENT_ORDERS: u64 = 5;

pub async fn dashboard_stats(state: &AppState) -> AppResult<ApiResponse<DashboardStats>> {
    let total_products = Products::find().count(&state.orm).await?;
    let total_orders = Orders::find().count(&state.orm).await?;
    let total_categories = Categories::find().count(&state.orm).await?;
    let pending_orders = Orders::find()
        .filter(OrderCol::Status.eq(STATUS_PENDING))
        .count(&state.orm)
        .await?;
    let low_stock_products = Products::find()
        .filter(ProdCol::Stock.lt(LOW_STOCK_THRESHOLD))
        .count(&state.orm)
        .await?;

    let totals: Vec<f64> = Orders::find()
        .select_only()
        .column(OrderCol::TotalAmount)
        .filter(OrderCol::Status.ne(STATUS_CANCELLED))
        .into_tuple()
        .all(&state.orm)
        .await?;
    let total_revenue = totals.into_iter().sum();

    let recent_orders = Orders::find()
        .order_by_desc(OrderCol::CreatedAt)
        .limit(RECENT_ORDERS)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let stats = DashboardStats {
        total_products,
        total_orders,
        total_revenue,
        pending_orders,
        low_stock_products,
        total_categories,
        recent_orders,
    };
    Ok(ApiResponse::success("Dashboard stats", stats, None))
}

/// Daily revenue for the last `days` days (today included), oldest first.
/// Days without orders are reported with zero values.
pub async fn revenue_chart(state: &AppState, days: Option<i64>) -> AppResult<ApiResponse<RevenueChart>> {
    let days = days.unwrap_or(7).clamp(1, 365);
    let today = Utc::now().date_naive();
    let first_day = today - Duration::days(days - 1);
    let since = first_day
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().fixed_offset())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("invalid chart start date")))?;

    let orders = Orders::find()
        .filter(OrderCol::CreatedAt.gte(since))
        .filter(OrderCol::Status.ne(STATUS_CANCELLED))
        .all(&state.orm)
        .await?;

    let items = bucket_revenue(first_day, days, &orders);
    Ok(ApiResponse::success("Revenue chart", RevenueChart { items }, None))
}

pub async fn top_products(state: &AppState, limit: Option<usize>) -> AppResult<ApiResponse<TopProductList>> {
    let limit = limit.unwrap_or(5).clamp(1, 100);
    let orders = Orders::find()
        .filter(OrderCol::Status.ne(STATUS_CANCELLED))
        .all(&state.orm)
        .await?;

    let items = rank_products(&orders, limit);
    Ok(ApiResponse::success("Top products", TopProductList { items }, None))
}

pub async fn list_orders(state: &AppState, query: AdminOrderQuery) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::Status.eq(status.clone()));
    }

    let finder = Orders::find()
        .filter(condition)
        .order_by_desc(OrderCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

/// Any non-empty status is accepted; transitions are not constrained.
pub async fn update_order_status(
    state: &AppState,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let status = payload.status.trim();
    if status.is_empty() {
        return Err(AppError::BadRequest("Status is required".into()));
    }

    let existing = find_order(state, id).await?;
    let previous = existing.status.clone();
    let mut active: OrderActive = existing.into();
    active.status = Set(status.to_string());
    let order = active.update(&state.orm).await?;
    tracing::info!(order_id = %id, from = %previous, to = %order.status, "order status changed");

    Ok(ApiResponse::success(
        "Order status updated",
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn order_stats(state: &AppState) -> AppResult<ApiResponse<OrderStats>> {
    let statuses: Vec<String> = Orders::find()
        .select_only()
        .column(OrderCol::Status)
        .into_tuple()
        .all(&state.orm)
        .await?;

    let mut stats = OrderStats::default();
    for status in statuses {
        match status.as_str() {
            "pending" => stats.pending += 1,
            "confirmed" => stats.confirmed += 1,
            "processing" => stats.processing += 1,
            "shipped" => stats.shipped += 1,
            "delivered" => stats.delivered += 1,
            "cancelled" => stats.cancelled += 1,
            _ => {}
        }
    }
    Ok(ApiResponse::success("Order stats", stats, None))
}

pub async fn orders_by_status(state: &AppState) -> AppResult<ApiResponse<StatusBreakdown>> {
    let statuses: Vec<String> = Orders::find()
        .select_only()
        .column(OrderCol::Status)
        .into_tuple()
        .all(&state.orm)
        .await?;

    let items = status_breakdown(&statuses);
    Ok(ApiResponse::success("Orders by status", StatusBreakdown { items }, None))
}

pub async fn top_customers(state: &AppState, limit: Option<usize>) -> AppResult<ApiResponse<TopCustomerList>> {
    let limit = limit.unwrap_or(10).clamp(1, 100);
    let orders = Orders::find()
        .order_by_asc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?;

    let items = rank_customers(&orders, limit);
    Ok(ApiResponse::success("Top customers", TopCustomerList { items }, None))
}

pub async fn get_site_settings(state: &AppState) -> AppResult<ApiResponse<SiteSettings>> {
    let settings = SiteSettingsEntity::find_by_id(SETTINGS_ROW_ID.to_string())
        .one(&state.orm)
        .await?
        .map(settings_from_entity)
        .unwrap_or_else(|| SiteSettings {
            id: SETTINGS_ROW_ID.to_string(),
            settings_data: serde_json::json!({}),
            updated_at: None,
        });
    Ok(ApiResponse::success("Site settings", settings, None))
}

/// Public view of the settings document: the stored object, or `{}`.
pub async fn public_settings(state: &AppState) -> AppResult<ApiResponse<serde_json::Value>> {
    let data = SiteSettingsEntity::find_by_id(SETTINGS_ROW_ID.to_string())
        .one(&state.orm)
        .await?
        .map(|row| row.settings_data)
        .unwrap_or_else(|| serde_json::json!({}));
    Ok(ApiResponse::success("Settings", data, None))
}

pub async fn save_site_settings(
    state: &AppState,
    payload: UpdateSiteSettingsRequest,
) -> AppResult<ApiResponse<SiteSettings>> {
    if !payload.settings_data.is_object() {
        return Err(AppError::BadRequest("settings_data must be a JSON object".into()));
    }

    let existing = SiteSettingsEntity::find_by_id(SETTINGS_ROW_ID.to_string())
        .one(&state.orm)
        .await?;

    let saved = match existing {
        Some(row) => {
            let mut active: SettingsActive = row.into();
            active.settings_data = Set(payload.settings_data);
            active.updated_at = Set(Utc::now().into());
            active.update(&state.orm).await?
        }
        None => {
            SettingsActive {
                id: Set(SETTINGS_ROW_ID.to_string()),
                settings_data: Set(payload.settings_data),
                updated_at: Set(Utc::now().into()),
            }
            .insert(&state.orm)
            .await?
        }
    };
    tracing::info!("site settings saved");

    Ok(ApiResponse::success(
        "Site settings saved",
        settings_from_entity(saved),
        Some(Meta::empty()),
    ))
}

fn bucket_revenue(first_day: NaiveDate, days: i64, orders: &[OrderModel]) -> Vec<RevenuePoint> {
    let mut buckets: BTreeMap<NaiveDate, (u64, f64)> = (0..days)
        .map(|offset| (first_day + Duration::days(offset), (0, 0.0)))
        .collect();

    for order in orders {
        let day = order.created_at.with_timezone(&Utc).date_naive();
        if let Some(bucket) = buckets.get_mut(&day) {
            bucket.0 += 1;
            bucket.1 += order.total_amount;
        }
    }

    buckets
        .into_iter()
        .map(|(day, (orders, revenue))| RevenuePoint {
            date: day.format("%Y-%m-%d").to_string(),
            orders,
            revenue,
        })
        .collect()
}

fn rank_products(orders: &[OrderModel], limit: usize) -> Vec<TopProduct> {
    let mut totals: HashMap<String, TopProduct> = HashMap::new();
    for order in orders {
        for line in order_lines(order) {
            let entry = totals
                .entry(line.product_id.clone())
                .or_insert_with(|| TopProduct {
                    id: line.product_id.clone(),
                    name: line.product_name.clone(),
                    sales: 0,
                    revenue: 0.0,
                });
            entry.sales += i64::from(line.quantity);
            entry.revenue += line.price * f64::from(line.quantity);
        }
    }

    let mut ranked: Vec<TopProduct> = totals.into_values().collect();
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

/// Groups orders by customer phone. `orders` must be oldest first so the
/// most recent name wins.
fn rank_customers(orders: &[OrderModel], limit: usize) -> Vec<TopCustomer> {
    let mut customers: HashMap<String, TopCustomer> = HashMap::new();
    for order in orders {
        let entry = customers
            .entry(order.customer_phone.clone())
            .or_insert_with(|| TopCustomer {
                name: order.customer_name.clone(),
                phone: order.customer_phone.clone(),
                total_orders: 0,
                total_spent: 0.0,
            });
        entry.name = order.customer_name.clone();
        entry.total_orders += 1;
        if order.status != STATUS_CANCELLED {
            entry.total_spent += order.total_amount;
        }
    }

    let mut ranked: Vec<TopCustomer> = customers.into_values().collect();
    ranked.sort_by(|a, b| {
        b.total_spent
            .total_cmp(&a.total_spent)
            .then_with(|| b.total_orders.cmp(&a.total_orders))
            .then_with(|| a.phone.cmp(&b.phone))
    });
    ranked.truncate(limit);
    ranked
}

fn status_breakdown(statuses: &[String]) -> Vec<OrdersByStatus> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for status in statuses {
        *counts.entry(status.as_str()).or_default() += 1;
    }

    let total = statuses.len() as f64;
    let mut items: Vec<OrdersByStatus> = counts
        .into_iter()
        .map(|(status, count)| OrdersByStatus {
            status: status.to_string(),
            count,
            percentage: ((count as f64 / total) * 1000.0).round() / 10.0,
        })
        .collect();
    items.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));
    items
}

fn settings_from_entity(model: SettingsModel) -> SiteSettings {
    SiteSettings {
        id: model.id,
        settings_data: model.settings_data,
        updated_at: Some(model.updated_at.with_timezone(&Utc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(phone: &str, name: &str, total: f64, status: &str, items: serde_json::Value) -> OrderModel {
        OrderModel {
            id: Uuid::new_v4(),
            user_id: "guest".into(),
            items,
            total_amount: total,
            customer_name: name.into(),
            customer_phone: phone.into(),
            customer_email: None,
            delivery_address: "Kyiv".into(),
            delivery_method: "pickup".into(),
            payment_method: "cash".into(),
            status: status.into(),
            payment_status: "pending".into(),
            liqpay_status: None,
            paid_at: None,
            notes: None,
            created_at: Utc::now().into(),
        }
    }

    fn line(id: &str, name: &str, price: f64, quantity: i32) -> serde_json::Value {
        serde_json::json!({
            "productId": id,
            "productName": name,
            "productImage": "",
            "price": price,
            "quantity": quantity,
        })
    }

    #[test]
    fn breakdown_reports_rounded_percentages() {
        let statuses = vec!["pending".to_string(), "pending".to_string(), "shipped".to_string()];
        let items = status_breakdown(&statuses);
        assert_eq!(items[0].status, "pending");
        assert_eq!(items[0].count, 2);
        assert_eq!(items[0].percentage, 66.7);
        assert_eq!(items[1].percentage, 33.3);
    }

    #[test]
    fn products_ranked_by_units_sold() {
        let orders = vec![
            order("1", "A", 0.0, "pending", serde_json::json!([line("p1", "Thuja", 100.0, 1), line("p2", "Rose", 50.0, 3)])),
            order("2", "B", 0.0, "pending", serde_json::json!([line("p1", "Thuja", 100.0, 1)])),
        ];
        let ranked = rank_products(&orders, 5);
        assert_eq!(ranked[0].id, "p2");
        assert_eq!(ranked[0].sales, 3);
        assert_eq!(ranked[0].revenue, 150.0);
        assert_eq!(ranked[1].sales, 2);
        assert_eq!(rank_products(&orders, 1).len(), 1);
    }

    #[test]
    fn customers_grouped_by_phone() {
        let orders = vec![
            order("+380501", "Olena", 300.0, "delivered", serde_json::json!([])),
            order("+380502", "Ivan", 100.0, "pending", serde_json::json!([])),
            order("+380501", "Olena K.", 200.0, "cancelled", serde_json::json!([])),
        ];
        let ranked = rank_customers(&orders, 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].phone, "+380501");
        assert_eq!(ranked[0].name, "Olena K.");
        assert_eq!(ranked[0].total_orders, 2);
        assert_eq!(ranked[0].total_spent, 300.0);
    }

    #[test]
    fn revenue_buckets_cover_every_day() {
        let today = Utc::now().date_naive();
        let first_day = today - Duration::days(6);
        let orders = vec![order("1", "A", 120.0, "pending", serde_json::json!([]))];
        let points = bucket_revenue(first_day, 7, &orders);
        assert_eq!(points.len(), 7);
        let last = points.last().expect("today");
        assert_eq!(last.date, today.format("%Y-%m-%d").to_string());
        assert_eq!(last.orders, 1);
        assert_eq!(last.revenue, 120.0);
        assert!(points[..6].iter().all(|p| p.orders == 0));
    }
}
