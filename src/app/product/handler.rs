//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{Product, ProductFields};
use crate::{app::AppState, core::error::CoreError};

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_store.list())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_store.get(&id)?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let Json(fields) = payload?;
    let product = state.product_store.create(fields)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    // 未知 id 返回 404，即使请求体本身无法解析
    let fields = match payload {
        Ok(Json(fields)) => fields,
        Err(rejection) => {
            state.product_store.get(&id)?;
            return Err(rejection.into());
        }
    };
    let product = state.product_store.update(&id, fields)?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    state.product_store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
