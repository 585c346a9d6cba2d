//! Generic CRUD handlers shared by every stored kind.
//!
//! A kind becomes an HTTP resource by implementing [`Resource`]: where it is mounted, which
//! client stores it and how a row is shaped for responses. [`mount`] then adds the five
//! standard routes.

use super::context::AppState;
use super::error::ApiError;
use super::extractors::{IdPath, Payload};
use crate::error::StoreError;
use crate::framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[async_trait]
pub trait Resource: ActorEntity {
    /// Collection path, for example `/customers`.
    const PATH: &'static str;

    type Client: ActorClient<Self, Error = StoreError> + Clone + Send + Sync + 'static;

    /// Response representation of one row.
    type View: Serialize + Send;

    fn client(state: &AppState) -> &Self::Client;

    async fn view(self, state: &AppState) -> Result<Self::View, ApiError>;
}

/// Adds `GET|POST {PATH}` and `GET|PUT|DELETE {PATH}/{id}` for `T`.
pub fn mount<T>(router: Router<AppState>) -> Router<AppState>
where
    T: Resource,
    T::Create: DeserializeOwned,
    T::Replace: DeserializeOwned,
{
    router
        .route(T::PATH, get(list::<T>).post(create::<T>))
        .route(
            &format!("{}/{{id}}", T::PATH),
            get(retrieve::<T>).put(replace::<T>).delete(destroy::<T>),
        )
}

async fn list<T: Resource>(State(state): State<AppState>) -> Result<Json<Vec<T::View>>, ApiError> {
    let rows = T::client(&state).list().await?;
    let mut views = Vec::with_capacity(rows.len());
    for row in rows {
        views.push(row.view(&state).await?);
    }
    Ok(Json(views))
}

async fn create<T>(
    State(state): State<AppState>,
    Payload(params): Payload<T::Create>,
) -> Result<(StatusCode, Json<T::View>), ApiError>
where
    T: Resource,
    T::Create: DeserializeOwned,
{
    let created = T::client(&state).create(params).await?;
    Ok((StatusCode::CREATED, Json(created.view(&state).await?)))
}

async fn retrieve<T: Resource>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<T::View>, ApiError> {
    let row = T::client(&state).fetch(T::Id::from(id)).await?;
    Ok(Json(row.view(&state).await?))
}

async fn replace<T>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Payload(params): Payload<T::Replace>,
) -> Result<Json<T::View>, ApiError>
where
    T: Resource,
    T::Replace: DeserializeOwned,
{
    let replaced = T::client(&state).replace(T::Id::from(id), params).await?;
    Ok(Json(replaced.view(&state).await?))
}

async fn destroy<T: Resource>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    T::client(&state).delete(T::Id::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
