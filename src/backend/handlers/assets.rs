use askama::Template;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::backend::AppState;
use crate::database::db::queries;
use crate::database::models::Asset;
use crate::error::AppError;

#[derive(Template)]
#[template(path = "add_asset.html")]
pub struct AddAssetTemplate {
    pub today: String,
}

#[derive(Template)]
#[template(path = "edit_asset.html")]
pub struct EditAssetTemplate {
    pub asset: Asset,
}

pub async fn add_asset_form() -> AddAssetTemplate {
    AddAssetTemplate {
        today: Local::now().date_naive().to_string(),
    }
}

#[derive(Deserialize)]
pub struct AssetForm {
    pub date: NaiveDate,
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub notes: Option<String>,
}

pub async fn create_asset(
    State(state): State<AppState>,
    Form(form): Form<AssetForm>,
) -> Result<Redirect, AppError> {
    let notes = form.notes.as_deref().filter(|s| !s.trim().is_empty());
    queries::create_asset(
        &state.db,
        form.date,
        &form.category,
        &form.item,
        form.amount,
        notes,
    )
    .await?;
    Ok(Redirect::to("/dashboard"))
}

pub async fn edit_asset_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<EditAssetTemplate, AppError> {
    let asset = queries::get_asset_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("asset"))?;
    Ok(EditAssetTemplate { asset })
}

pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<AssetForm>,
) -> Result<Redirect, AppError> {
    let notes = form.notes.as_deref().filter(|s| !s.trim().is_empty());
    let updated = queries::update_asset(
        &state.db,
        id,
        form.date,
        &form.category,
        &form.item,
        form.amount,
        notes,
    )
    .await?;
    if !updated {
        return Err(AppError::NotFound("asset"));
    }
    Ok(Redirect::to("/dashboard"))
}

#[derive(Deserialize)]
pub struct DeleteAssetForm {
    pub asset_id: i64,
}

pub async fn delete_asset(
    State(state): State<AppState>,
    Form(form): Form<DeleteAssetForm>,
) -> Result<Redirect, AppError> {
    if !queries::delete_asset(&state.db, form.asset_id).await? {
        return Err(AppError::NotFound("asset"));
    }
    Ok(Redirect::to("/dashboard"))
}
