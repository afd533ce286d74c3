// src/backend/api.rs
//
// Typed endpoint layer the HTTP host mounts. Routing, CORS and static
// `/uploads` serving stay in the host; every operation below corresponds
// to one route of the JSON surface.
use crate::{
    adapter::Mailer,
    config::AppConfig,
    error::ServiceError,
    metrics::{self, AppMetrics},
    models::{InventoryItem, ItemPatch},
    services::{
        auth_service::{self, SigninOutcome, SignupData},
        inventory_service::{self, CreateItemData},
        upload_service,
    },
    storage::{ItemPage, ItemQuery, Store},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

/// Everything a request handler needs, initialized once at startup and
/// passed by reference into each call.
pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(store: Store, config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        AppState {
            store,
            config,
            mailer,
        }
    }
}

// --- Validation Helper ---

fn validate_request<T: Validate>(req: &T) -> Result<(), ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::InvalidInput(e.to_string()))
}

// --- Request/Response Structs ---

#[derive(Deserialize, Clone, Debug, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Deserialize, Clone, Debug, Validate)]
pub struct SigninRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// The multipart `image` file field.
#[derive(Deserialize, Clone, Validate)]
pub struct ImageUpload {
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// 302 target for the hosting layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
}

// --- Auth Endpoints ---

/// POST /api/auth/signup (201 on success)
pub fn signup(state: &AppState, req: SignupRequest) -> Result<MessageResponse, ServiceError> {
    validate_request(&req)?;
    let message = auth_service::signup(
        &state.store,
        state.mailer.as_ref(),
        &state.config,
        SignupData {
            name: req.name,
            email: req.email,
            company: req.company,
            password: req.password,
        },
    )?;
    Ok(MessageResponse { message })
}

/// GET /api/auth/verify/:token (302 to the client signin page)
pub fn verify_email(state: &AppState, token: &str) -> Result<Redirect, ServiceError> {
    let location = auth_service::verify_email(&state.store, &state.config, token)?;
    Ok(Redirect { location })
}

/// POST /api/auth/signin (200 with `{user, token}`)
pub fn signin(state: &AppState, req: SigninRequest) -> Result<SigninOutcome, ServiceError> {
    validate_request(&req)?;
    auth_service::signin(&state.store, &state.config, &req.email, &req.password)
}

// --- Inventory Endpoints ---

/// GET /api/inventory?search&category&status&sort&page&limit
pub fn list_inventory(state: &AppState, query: ItemQuery) -> Result<ItemPage, ServiceError> {
    inventory_service::list(&state.store, &query)
}

/// GET /api/inventory/:id
pub fn get_inventory_item(state: &AppState, id: &str) -> Result<InventoryItem, ServiceError> {
    inventory_service::get(&state.store, id)
}

/// POST /api/inventory (multipart; 201 on success)
pub fn create_inventory_item(
    state: &AppState,
    req: CreateItemData,
    image: Option<ImageUpload>,
) -> Result<InventoryItem, ServiceError> {
    let uploaded = store_upload(state, image)?;
    inventory_service::create(&state.store, req, uploaded)
}

/// PUT /api/inventory/:id (multipart)
pub fn update_inventory_item(
    state: &AppState,
    id: &str,
    patch: ItemPatch,
    image: Option<ImageUpload>,
) -> Result<InventoryItem, ServiceError> {
    let uploaded = store_upload(state, image)?;
    inventory_service::update(&state.store, id, patch, uploaded)
}

/// DELETE /api/inventory/:id
pub fn delete_inventory_item(state: &AppState, id: &str) -> Result<MessageResponse, ServiceError> {
    let message = inventory_service::delete(&state.store, id)?;
    Ok(MessageResponse { message })
}

// --- Admin ---

pub fn get_metrics(state: &AppState) -> Result<AppMetrics, ServiceError> {
    metrics::collect(&state.store)
}

// --- Boundary Mapping ---

/// Status code plus response body for a failed call. Server-side failures
/// are logged here with full detail and answered generically.
pub fn error_response(err: &ServiceError) -> (u16, MessageResponse) {
    let status = err.status_code();
    if status == 500 {
        error!(error = %err, "request failed");
    }
    (
        status,
        MessageResponse {
            message: err.public_message(),
        },
    )
}

fn store_upload(
    state: &AppState,
    image: Option<ImageUpload>,
) -> Result<Option<String>, ServiceError> {
    let Some(image) = image else {
        return Ok(None);
    };
    validate_request(&image)?;
    upload_service::save_image(&state.config.upload_dir, &image.filename, &image.data).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::mailer::RecordingMailer;

    fn test_state() -> (AppState, Arc<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::new(
            Store::in_memory(),
            AppConfig::for_tests(),
            mailer.clone(),
        );
        (state, mailer)
    }

    fn widget_request() -> CreateItemData {
        CreateItemData {
            name: Some("Widget".to_string()),
            sku: Some("W-1".to_string()),
            category: Some("Tools".to_string()),
            price: Some(9.99),
            quantity: Some(5),
            min_stock: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn signup_rejects_malformed_email_and_short_password() {
        let (state, _) = test_state();
        let err = signup(
            &state,
            SignupRequest {
                name: "D".to_string(),
                email: "not-an-email".to_string(),
                company: None,
                password: "long enough pass".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let err = signup(
            &state,
            SignupRequest {
                name: "D".to_string(),
                email: "d@example.com".to_string(),
                company: None,
                password: "short".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn full_auth_flow_through_endpoints() {
        let (state, mailer) = test_state();
        signup(
            &state,
            SignupRequest {
                name: "Dinithi".to_string(),
                email: "d@example.com".to_string(),
                company: None,
                password: "long enough pass".to_string(),
            },
        )
        .unwrap();

        let signin_req = SigninRequest {
            email: "d@example.com".to_string(),
            password: "long enough pass".to_string(),
        };
        assert_eq!(
            signin(&state, signin_req.clone()).unwrap_err(),
            ServiceError::EmailNotVerified
        );

        let body = mailer.sent.lock().unwrap()[0].html_body.clone();
        let marker = "/api/auth/verify/";
        let start = body.find(marker).unwrap() + marker.len();
        let token = &body[start..start + 64];

        let redirect = verify_email(&state, token).unwrap();
        assert_eq!(redirect.location, "http://client.test/signin");

        let outcome = signin(&state, signin_req).unwrap();
        assert_eq!(outcome.user.email, "d@example.com");
        assert!(!outcome.token.is_empty());
    }

    #[test]
    fn create_with_upload_stores_file_and_path() {
        let mailer = Arc::new(RecordingMailer::default());
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::for_tests();
        config.upload_dir = dir.path().to_str().unwrap().to_string();
        let state = AppState::new(Store::in_memory(), config, mailer);

        let image = ImageUpload {
            filename: "widget.png".to_string(),
            data: b"png-bytes".to_vec(),
        };
        let item = create_inventory_item(&state, widget_request(), Some(image)).unwrap();
        let path = item.image.unwrap();
        assert!(path.starts_with("/uploads/"));
        assert!(dir
            .path()
            .join(path.strip_prefix("/uploads/").unwrap())
            .exists());
    }

    #[test]
    fn crud_round_trip_through_endpoints() {
        let (state, _) = test_state();
        let created = create_inventory_item(&state, widget_request(), None).unwrap();

        let fetched = get_inventory_item(&state, &created.id.to_string()).unwrap();
        assert_eq!(fetched.sku, "W-1");

        let page = list_inventory(&state, ItemQuery::default()).unwrap();
        assert_eq!(page.total, 1);

        let patch: ItemPatch = serde_json::from_str(r#"{"quantity": 0}"#).unwrap();
        let updated = update_inventory_item(&state, &created.id.to_string(), patch, None).unwrap();
        assert_eq!(updated.quantity, 0);

        let message = delete_inventory_item(&state, &created.id.to_string()).unwrap();
        assert_eq!(message.message, "Item removed");
        assert_eq!(get_metrics(&state).unwrap().total_items, 0);
    }

    #[test]
    fn error_mapping_hides_internal_detail() {
        let (status, body) = error_response(&ServiceError::StorageError("disk gone".into()));
        assert_eq!(status, 500);
        assert_eq!(body.message, "Server error");

        let (status, body) = error_response(&ServiceError::NotFound("Item".into()));
        assert_eq!(status, 404);
        assert_eq!(body.message, "Item not found");
    }
}
