use crate::config::GalleryConfig;
use contracts::gallery::{parse_image_list, FetchError, FetchResult};
use gloo_net::http::Request;
use std::fmt::Display;

/// Загрузить список изображений один раз. Без повторов и таймаута.
pub async fn fetch_image_list(config: &GalleryConfig) -> FetchResult<Vec<String>> {
    let url = config.list_url();

    let response = Request::get(&url).send().await.map_err(request_error)?;

    check_status(response.ok(), response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::parse(format!("Failed to read response: {}", e)))?;

    parse_image_list(&body, config.limit as usize)
}

fn request_error(err: impl Display) -> FetchError {
    FetchError::request(format!("Request failed: {}", err))
}

fn check_status(ok: bool, status: u16) -> FetchResult<()> {
    if !ok {
        return Err(FetchError::http_status(status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_passes() {
        assert!(check_status(true, 200).is_ok());
    }

    #[test]
    fn test_error_status_maps_to_http_error() {
        let err = check_status(false, 503).unwrap_err();
        assert_eq!(err.code, "HTTP_ERROR");
        assert_eq!(err.message, "HTTP error: 503");
        assert_eq!(err.user_message(), "Failed to fetch images");
    }

    #[test]
    fn test_transport_failure_maps_to_request_error() {
        let err = request_error("TypeError: Failed to fetch");
        assert_eq!(err.code, "REQUEST_ERROR");
        assert_eq!(err.message, "Request failed: TypeError: Failed to fetch");
        assert_eq!(err.user_message(), "Failed to fetch images");
    }
}
