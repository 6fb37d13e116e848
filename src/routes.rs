use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::AppResult,
    forms::{AddForm, EditForm},
    store::NewMovie,
    templates,
};

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_ranked().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(id).await?;
    Ok(Html(templates::edit_page(&movie, &EditForm::default(), &[])))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.get(id).await?;

    match form.validate() {
        Ok(values) => {
            state.store.update_review(id, values.rating, values.review).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(errors) => Ok(Html(templates::edit_page(&movie, &form, &errors)).into_response()),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(&AddForm::default(), &[]))
}

pub async fn add_search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(title) => {
            let candidates = state.tmdb.search_movies(&title).await?;
            Ok(Html(templates::select_page(&candidates)).into_response())
        }
        Err(errors) => Ok(Html(templates::add_page(&form, &errors)).into_response()),
    }
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    movie_id: i64,
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FindQuery>,
) -> AppResult<Redirect> {
    let detail = state.tmdb.movie_detail(q.movie_id).await?;
    let new = NewMovie::from_detail(&detail, &state.config.tmdb_image_base)?;
    let movie = state.store.insert(new).await?;
    Ok(Redirect::to(&format!("/edit/{}", movie.id)))
}
