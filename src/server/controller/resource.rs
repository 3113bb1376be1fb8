use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::ApiResponse,
    server::{
        error::AppError,
        service::{
            lifecycle::{LifecycleService, Lookup},
            resource::Resource,
        },
        state::AppState,
        util::parse::parse_record_id,
        validation::extract::ValidatedJson,
    },
};

/// POST /api/{collection} - Create a record
///
/// # Returns
/// - `201 Created`: `{message: "{Name} created", data, error: false}`
/// - `400 Bad Request`: Body failed validation
/// - `500 Internal Server Error`: Database error
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<R::CreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LifecycleService::<R>::new(&state.db);
    let record = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            format!("{} created", R::NAME),
            R::into_dto(record),
        )),
    ))
}

/// GET /api/{collection} - List every record that is not deleted
///
/// # Returns
/// - `200 OK`: `{data: [...], error: false}`, ordered by id
/// - `500 Internal Server Error`: Database error
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = LifecycleService::<R>::new(&state.db);
    let records = service.list_active().await?;

    let dtos: Vec<R::Dto> = records.into_iter().map(R::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::data(dtos))))
}

/// GET /api/{collection}/{id} - Look a record up by id
///
/// A deleted record is answered with 200 and a message only.
///
/// # Returns
/// - `200 OK`: `{message: "{Name} found! It was {summary}", data, error: false}`
/// - `200 OK`: `{message: "{Name} was deleted", error: false}`
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: `{message: "{Name} not found", error: true}`
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id)?;

    let service = LifecycleService::<R>::new(&state.db);

    let response = match service.get_by_id(id).await? {
        Lookup::Found(record) => {
            let message = format!("{} found! It was {}", R::NAME, R::summary(&record));
            Json(ApiResponse::with_message(message, R::into_dto(record))).into_response()
        }
        Lookup::Deleted => {
            Json(ApiResponse::message(format!("{} was deleted", R::NAME))).into_response()
        }
    };

    Ok(response)
}

/// PUT /api/{collection}/{id} - Partially update a record
///
/// Only the fields present in the body are validated and written.
///
/// # Returns
/// - `200 OK`: `{message: "{Name} updated", data, error: false}`
/// - `400 Bad Request`: Malformed id or body failed validation
/// - `404 Not Found`: No record with that id
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<R::UpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let service = LifecycleService::<R>::new(&state.db);
    let record = service.update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            format!("{} updated", R::NAME),
            R::into_dto(record),
        )),
    ))
}

/// DELETE /api/{collection}/{id} - Soft-delete a record
///
/// # Returns
/// - `200 OK`: `{message: "{Name} deleted", error: false}`
/// - `400 Bad Request`: Malformed id or record already deleted
/// - `404 Not Found`: No record with that id
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let service = LifecycleService::<R>::new(&state.db);
    service.soft_delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(format!("{} deleted", R::NAME))),
    ))
}

/// PATCH /api/{collection}/{id}/recover - Recover a soft-deleted record
///
/// # Returns
/// - `200 OK`: `{message: "{Name} with id: {id} was successfully recovered!", data, error: false}`
/// - `400 Bad Request`: Malformed id or record was never deleted
/// - `404 Not Found`: No record with that id
pub async fn recover<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let service = LifecycleService::<R>::new(&state.db);
    let record = service.recover(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            format!("{} with id: {} was successfully recovered!", R::NAME, id),
            R::into_dto(record),
        )),
    ))
}

/// DELETE /api/{collection}/cleanup - Purge every soft-deleted record
///
/// # Returns
/// - `204 No Content`: At least one record was removed
/// - `404 Not Found`: `{message: "There are no deleted {collection} to clean", error: true}`
pub async fn cleanup<R: Resource>(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = LifecycleService::<R>::new(&state.db);
    service.purge().await?;

    Ok(StatusCode::NO_CONTENT)
}
