/**
 * Upload HTTP Handler
 *
 * `GET /api/upload` returns a fresh signed parameter set for the media
 * service. The route is public, matching the documented surface; a
 * signing failure maps to 500 with a generic body.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::upload::signer::{UploadCredentials, UploadSigner};

/// Issue signed upload credentials
pub async fn get_upload_credentials(
    State(signer): State<UploadSigner>,
) -> Result<Json<UploadCredentials>, ApiError> {
    Ok(Json(signer.authentication_parameters()?))
}
