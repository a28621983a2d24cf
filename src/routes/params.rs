use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Badge;

pub const DEFAULT_PRODUCT_LIMIT: u64 = 100;
pub const MAX_PRODUCT_LIMIT: u64 = 1000;
/// Largest row offset the database drivers accept (`OFFSET` binds as i64).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Caps a client supplied `skip`/`offset` at [`MAX_OFFSET`].
pub fn clamp_offset(offset: Option<u64>) -> u64 {
    offset.unwrap_or(0).min(MAX_OFFSET)
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortBy {
    NameAsc,
    PriceAsc,
    PriceDesc,
}

impl ProductSortBy {
    /// Unknown values fall back to name ascending instead of failing.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("price") => ProductSortBy::PriceAsc,
            Some("-price") => ProductSortBy::PriceDesc,
            _ => ProductSortBy::NameAsc,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub badge: Option<Badge>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<String>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

impl ProductQuery {
    pub fn sort(&self) -> ProductSortBy {
        ProductSortBy::parse(self.sort_by.as_deref())
    }

    /// `(skip, limit)` with the default page size and an upper bound.
    pub fn window(&self) -> (u64, u64) {
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PRODUCT_LIMIT)
            .clamp(1, MAX_PRODUCT_LIMIT);
        (clamp_offset(self.skip), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_accepts_known_values() {
        assert_eq!(ProductSortBy::parse(Some("price")), ProductSortBy::PriceAsc);
        assert_eq!(ProductSortBy::parse(Some("-price")), ProductSortBy::PriceDesc);
        assert_eq!(ProductSortBy::parse(Some("name")), ProductSortBy::NameAsc);
    }

    #[test]
    fn sort_by_defaults_to_name() {
        assert_eq!(ProductSortBy::parse(None), ProductSortBy::NameAsc);
        assert_eq!(ProductSortBy::parse(Some("rating")), ProductSortBy::NameAsc);
    }

    #[test]
    fn window_defaults_and_clamps() {
        let query = ProductQuery::default();
        assert_eq!(query.window(), (0, DEFAULT_PRODUCT_LIMIT));

        let query = ProductQuery {
            limit: Some(50_000),
            skip: Some(7),
            ..Default::default()
        };
        assert_eq!(query.window(), (7, MAX_PRODUCT_LIMIT));
    }

    #[test]
    fn pagination_normalizes_bounds() {
        let pagination = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(pagination.normalize(), (1, 100, 0));
    }

    #[test]
    fn pagination_offset_saturates() {
        let pagination = Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        };
        assert_eq!(pagination.normalize(), (i64::MAX, 100, i64::MAX));
    }

    #[test]
    fn offsets_are_capped_at_i64_max() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(u64::MAX)), MAX_OFFSET);

        let query = ProductQuery {
            skip: Some(u64::MAX),
            ..Default::default()
        };
        assert_eq!(query.window(), (MAX_OFFSET, DEFAULT_PRODUCT_LIMIT));
    }
}
