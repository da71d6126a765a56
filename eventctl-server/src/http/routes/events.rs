//! Event endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{EventId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Event, EventDraft};

/// Create/update event request.
///
/// Missing fields deserialize as empty and are rejected by `EventDraft`.
/// Any `id` or `user_id` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub location: String,
}

impl TryFrom<EventPayload> for EventDraft {
    type Error = ApiError;

    fn try_from(p: EventPayload) -> Result<Self, Self::Error> {
        Ok(EventDraft::new(p.title, p.description, p.location)?)
    }
}

/// GET /events - list all events
async fn list_events(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.store.list().await?;
    Ok(Json(events))
}

/// POST /events - create an event
async fn create_event(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<EventPayload>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let draft = EventDraft::try_from(req)?;
    let event = state.store.create(draft).await?;
    tracing::info!(id = event.id, "event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events/{id} - get a single event
async fn get_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
) -> Result<Json<Event>, ApiError> {
    let event = state.store.get(id).await?;
    Ok(Json(event))
}

/// PUT /events/{id} - overwrite title, description and location
async fn update_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
    ValidJson(req): ValidJson<EventPayload>,
) -> Result<Json<Event>, ApiError> {
    let draft = EventDraft::try_from(req)?;
    let event = state.store.update(id, draft).await?;
    Ok(Json(event))
}

/// DELETE /events/{id} - delete an event, returning it
async fn delete_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
) -> Result<Json<Event>, ApiError> {
    let event = state.store.delete(id).await?;
    tracing::info!(id, "event deleted");
    Ok(Json(event))
}

/// Event routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbError, EventStore, MemoryEventStore};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(store: Arc<dyn EventStore>) -> Router {
        router().with_state(Arc::new(AppState::new(store)))
    }

    fn app() -> Router {
        app_with(Arc::new(MemoryEventStore::new()))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Store whose every call fails like a broken database.
    struct BrokenStore;

    #[async_trait]
    impl EventStore for BrokenStore {
        async fn create(&self, _: EventDraft) -> Result<Event, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn list(&self) -> Result<Vec<Event>, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn get(&self, _: i64) -> Result<Event, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn update(&self, _: i64, _: EventDraft) -> Result<Event, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn delete(&self, _: i64) -> Result<Event, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
    }

    #[tokio::test]
    async fn create_returns_201_and_forces_owner() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/events",
                json!({"title": "T", "description": "D", "location": "L", "user_id": 99, "id": 50}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"id": 1, "title": "T", "description": "D", "location": "L", "user_id": 1})
        );
    }

    #[tokio::test]
    async fn create_missing_field_is_400_and_inserts_nothing() {
        let store = Arc::new(MemoryEventStore::new());
        let app = app_with(store.clone());

        let response = app
            .oneshot(json_request(
                "POST",
                "/events",
                json!({"title": "T", "description": "D"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "location is required");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_malformed_json_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/events")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "bad_request");
    }

    #[tokio::test]
    async fn create_wrong_field_type_is_400() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/events",
                json!({"title": 5, "description": "D", "location": "L"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_accepts_json_without_content_type() {
        let store = Arc::new(MemoryEventStore::new());

        let response = app_with(store.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/events")
                    .body(Body::from(r#"{"title":"T","description":"D","location":"L"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["title"], "T");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_empty_body_is_400() {
        let response = app()
            .oneshot(empty_request("POST", "/events"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "bad_request");
    }

    #[tokio::test]
    async fn create_accepts_whitespace_values() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/events",
                json!({"title": "   ", "description": "D", "location": "L"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["title"], "   ");
    }

    #[tokio::test]
    async fn list_returns_all_events() {
        let store = Arc::new(MemoryEventStore::new());
        store.create(EventDraft::new("a", "D", "L").unwrap()).await.unwrap();
        store.create(EventDraft::new("b", "D", "L").unwrap()).await.unwrap();

        let response = app_with(store)
            .oneshot(empty_request("GET", "/events"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["title"], "a");
        assert_eq!(body[1]["title"], "b");
    }

    #[tokio::test]
    async fn list_empty_is_empty_array() {
        let response = app()
            .oneshot(empty_request("GET", "/events"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn get_non_numeric_id_is_400() {
        let response = app()
            .oneshot(empty_request("GET", "/events/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "id: must be an integer");
    }

    #[tokio::test]
    async fn get_missing_is_500_with_text() {
        let response = app()
            .oneshot(empty_request("GET", "/events/7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "not found: event '7'");
    }

    #[tokio::test]
    async fn update_overwrites_and_keeps_identity() {
        let store = Arc::new(MemoryEventStore::new());
        let created = store.create(EventDraft::new("T", "D", "L").unwrap()).await.unwrap();
        let app = app_with(store.clone());

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/events/{}", created.id),
                json!({"title": "T2", "description": "D2", "location": "L2", "user_id": 5}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": created.id, "title": "T2", "description": "D2", "location": "L2", "user_id": 1})
        );
        assert_eq!(store.get(created.id).await.unwrap().title, "T2");
    }

    #[tokio::test]
    async fn update_missing_is_500() {
        let response = app()
            .oneshot(json_request(
                "PUT",
                "/events/3",
                json!({"title": "T", "description": "D", "location": "L"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn update_with_empty_field_is_400() {
        let store = Arc::new(MemoryEventStore::new());
        let created = store.create(EventDraft::new("T", "D", "L").unwrap()).await.unwrap();

        let response = app_with(store.clone())
            .oneshot(json_request(
                "PUT",
                &format!("/events/{}", created.id),
                json!({"title": "", "description": "D2", "location": "L2"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn delete_returns_deleted_event() {
        let store = Arc::new(MemoryEventStore::new());
        let created = store.create(EventDraft::new("T", "D", "L").unwrap()).await.unwrap();
        let app = app_with(store.clone());

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/events/{}", created.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::to_value(&created).unwrap());

        let response = app
            .oneshot(empty_request("GET", &format!("/events/{}", created.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn storage_failures_are_500() {
        let app = app_with(Arc::new(BrokenStore));

        let requests = [
            empty_request("GET", "/events"),
            empty_request("GET", "/events/1"),
            empty_request("DELETE", "/events/1"),
            json_request(
                "POST",
                "/events",
                json!({"title": "T", "description": "D", "location": "L"}),
            ),
            json_request(
                "PUT",
                "/events/1",
                json!({"title": "T", "description": "D", "location": "L"}),
            ),
        ];

        for request in requests {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_json(response).await["error"], "internal_error");
        }
    }
}
