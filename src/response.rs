use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    /// Page position derived from a `skip`/`limit` window. No total is known.
    pub fn window(skip: u64, limit: u64) -> Self {
        let per_page = limit.max(1);
        Self {
            page: Some(((skip / per_page) as i64).saturating_add(1)),
            per_page: Some(per_page as i64),
            total: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Meta;

    #[test]
    fn window_maps_skip_to_page() {
        let meta = Meta::window(40, 20);
        assert_eq!(meta.page, Some(3));
        assert_eq!(meta.per_page, Some(20));
        assert_eq!(meta.total, None);
    }

    #[test]
    fn window_tolerates_zero_limit() {
        let meta = Meta::window(5, 0);
        assert_eq!(meta.page, Some(6));
        assert_eq!(meta.per_page, Some(1));
    }

    #[test]
    fn window_page_saturates() {
        let meta = Meta::window(i64::MAX as u64, 1);
        assert_eq!(meta.page, Some(i64::MAX));
    }
}
