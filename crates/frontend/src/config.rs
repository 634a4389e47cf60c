//! Конфигурация галереи
//!
//! Эндпоинт списка публичный и фиксированный; URL запроса собирается здесь.

use contracts::gallery::ListQuery;

pub const IMAGE_LIST_ENDPOINT: &str = "https://picsum.photos/v2/list";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub endpoint: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            endpoint: IMAGE_LIST_ENDPOINT.to_string(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl GalleryConfig {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            limit: self.limit,
        }
    }

    /// Полный URL списка, например `https://picsum.photos/v2/list?page=1&limit=100`
    pub fn list_url(&self) -> String {
        let query = serde_qs::to_string(&self.query()).unwrap_or_default();
        if query.is_empty() {
            return self.endpoint.clone();
        }
        format!("{}?{}", self.endpoint, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_url() {
        assert_eq!(
            GalleryConfig::default().list_url(),
            "https://picsum.photos/v2/list?page=1&limit=100"
        );
    }

    #[test]
    fn test_custom_page_and_limit() {
        let config = GalleryConfig {
            endpoint: "http://localhost:8080/list".to_string(),
            page: 3,
            limit: 10,
        };
        assert_eq!(config.list_url(), "http://localhost:8080/list?page=3&limit=10");
    }
}
