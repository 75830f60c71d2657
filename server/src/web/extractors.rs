// catalog_app/src/web/extractors.rs

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use catalog_query::MediaUrls;
use futures_util::future::{ready, Ready};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Image URL resolver for the current request: `PUBLIC_BASE_URL` when
/// configured, otherwise the scheme and host the request arrived on.
#[derive(Debug, Clone)]
pub struct RequestMedia(pub MediaUrls);

impl FromRequest for RequestMedia {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
      warn!("RequestMedia extractor: AppState is not registered.");
      return ready(Err(AppError::Internal("Application state unavailable.".to_string())));
    };
    let config = &state.config;
    let base = match &config.public_base_url {
      Some(url) => url.clone(),
      None => {
        let info = req.connection_info();
        format!("{}://{}", info.scheme(), info.host())
      }
    };
    ready(Ok(RequestMedia(MediaUrls::new(base, config.media_url.clone()))))
  }
}
