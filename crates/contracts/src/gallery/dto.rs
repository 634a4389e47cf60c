use super::error::{FetchError, FetchResult};
use serde::{Deserialize, Serialize};

/// Запись ответа picsum `/v2/list`.
///
/// Галерее нужен только `download_url`; остальные поля опциональны.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Страница фото на unsplash
    #[serde(default)]
    pub url: Option<String>,
    pub download_url: String,
}

/// Параметры запроса списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
}

/// Разобрать тело ответа в список download_url в порядке ответа.
///
/// Возвращает не более `limit` URL. Запись без строкового `download_url`
/// делает ошибочным весь разбор.
pub fn parse_image_list(body: &str, limit: usize) -> FetchResult<Vec<String>> {
    let records: Vec<ImageRecord> = serde_json::from_str(body)
        .map_err(|e| FetchError::parse("Failed to parse response").with_details(e.to_string()))?;

    Ok(records
        .into_iter()
        .take(limit)
        .map(|record| record.download_url)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let body = r#"[{"download_url":"a"},{"download_url":"b"},{"download_url":"c"}]"#;
        assert_eq!(parse_image_list(body, 100).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_full_record() {
        let body = r#"[{
            "id": "0",
            "author": "Alejandro Escamilla",
            "width": 5000,
            "height": 3333,
            "url": "https://unsplash.com/photos/yC-Yzbqy7PY",
            "download_url": "https://picsum.photos/id/0/5000/3333"
        }]"#;
        let urls = parse_image_list(body, 100).unwrap();
        assert_eq!(urls, vec!["https://picsum.photos/id/0/5000/3333"]);
    }

    #[test]
    fn test_parse_truncates_to_limit() {
        let records: Vec<String> = (0..120)
            .map(|i| format!(r#"{{"download_url":"u{}"}}"#, i))
            .collect();
        let body = format!("[{}]", records.join(","));

        let urls = parse_image_list(&body, 100).unwrap();
        assert_eq!(urls.len(), 100);
        assert_eq!(urls[0], "u0");
        assert_eq!(urls[99], "u99");
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let body = r#"[{"download_url":"a"},{"download_url":"a"}]"#;
        assert_eq!(parse_image_list(body, 100).unwrap(), vec!["a", "a"]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_image_list("[]", 100).unwrap().is_empty());
    }

    #[test]
    fn test_missing_download_url_is_parse_error() {
        let body = r#"[{"download_url":"a"},{"author":"x"}]"#;
        let err = parse_image_list(body, 100).unwrap_err();
        assert_eq!(err.code, "PARSE_ERROR");
        assert!(err.details.is_some());
    }

    #[test]
    fn test_non_string_download_url_is_parse_error() {
        let err = parse_image_list(r#"[{"download_url":42}]"#, 100).unwrap_err();
        assert_eq!(err.code, "PARSE_ERROR");
    }

    #[test]
    fn test_non_array_body_is_parse_error() {
        let err = parse_image_list(r#"{"error":"rate limited"}"#, 100).unwrap_err();
        assert_eq!(err.code, "PARSE_ERROR");
        assert!(parse_image_list("<html>", 100).is_err());
    }
}
