/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, allowing handlers to return
 * `Result<_, ApiError>` directly.
 *
 * # Response Format
 *
 * Responses are plaintext: status code plus a short generic body
 * (e.g. `Unauthenticated!` for 401). Server errors are logged with
 * their full detail before the generic response is produced.
 */

use axum::response::{IntoResponse, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::StorageWriteFailed(source) => {
                tracing::error!("Storage operation failed: {:?}", source);
            }
            ApiError::CredentialIssuanceFailed(detail) => {
                tracing::error!("Upload credential issuance failed: {}", detail);
            }
            ApiError::AuthenticationFailed => {
                tracing::warn!("Rejected unauthenticated request");
            }
            ApiError::InvalidInput { field, message } => {
                tracing::debug!("Rejected invalid input: {} {}", field, message);
            }
            ApiError::NotFound => {}
        }

        (status, self.client_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_unauthenticated_response() {
        let response = ApiError::AuthenticationFailed.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "Unauthenticated!");
    }

    #[tokio::test]
    async fn test_storage_failure_response_body_is_generic() {
        let response = ApiError::StorageWriteFailed(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal server error");
    }

    #[tokio::test]
    async fn test_credential_failure_response_body_is_generic() {
        let response =
            ApiError::CredentialIssuanceFailed("key rejected".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert_eq!(body, "Internal server error");
        assert!(!body.contains("key rejected"));
    }

    #[tokio::test]
    async fn test_invalid_input_response() {
        let response = ApiError::invalid_input("text", "must not be empty").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
