//! HTTP client for the streaming and panel REST endpoints.
//!
//! # Design
//! - One method per endpoint; views never build URLs or headers themselves.
//! - Every state-changing request carries the CSRF token from the rendered page.
//! - Failures come back as [`ApiError`]; [`describe`] turns them into banner text and logs.

use crate::core::errors::ApiError;
use gloo::console;
use gloo::utils::document;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use vigilio_api_models::{
    AddMovieRequest, CancelTaskRequest, CategoriesResponse, CeleryResponse,
    ChangePasswordRequest, ContinueResponse, FilesRequest, FilesResponse, GlobalSettings,
    MovieId, MovieManagementRequest, MoviesResponse, MudSource, MyListRequest, NewMudSource,
    RedownloadSubtitlesRequest, SettingsPatch, TorrentOperationRequest, TorrentStatusResponse,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

const CSRF_HEADER: &str = "X-CSRFToken";
const CSRF_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

/// Which movies `GET /api/movies` should return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum MovieQuery {
    /// Whole library.
    All,
    /// Title search.
    Search(String),
    /// One movie by id.
    Id(MovieId),
}

impl MovieQuery {
    fn path(&self) -> String {
        match self {
            Self::All => "/api/movies".to_string(),
            Self::Search(query) => {
                format!("/api/movies?query={}", urlencoding::encode(query))
            }
            Self::Id(id) => format!("/api/movies?id={id}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path))
            .header(CSRF_HEADER, &csrf_token())
            .json(body)
            .map_err(transport)?;
        decode(request.send().await.map_err(transport)?).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::delete(&self.url(path))
            .header(CSRF_HEADER, &csrf_token())
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    pub(crate) async fn fetch_movies(&self, query: &MovieQuery) -> Result<MoviesResponse, ApiError> {
        self.get_json(&query.path()).await
    }

    pub(crate) async fn update_my_list(&self, request: &MyListRequest) -> Result<Value, ApiError> {
        self.post_json("/api/movies", request).await
    }

    pub(crate) async fn fetch_categories(&self) -> Result<CategoriesResponse, ApiError> {
        self.get_json("/api/categories").await
    }

    pub(crate) async fn fetch_continue(
        &self,
        movie_id: Option<MovieId>,
    ) -> Result<ContinueResponse, ApiError> {
        match movie_id {
            Some(id) => self.get_json(&format!("/api/continue-movie-list?id={id}")).await,
            None => self.get_json("/api/continue-movie-list").await,
        }
    }

    pub(crate) async fn fetch_files(&self, movie_id: MovieId) -> Result<FilesResponse, ApiError> {
        self.get_json(&format!("/panel/api/files?movieId={movie_id}"))
            .await
    }

    pub(crate) async fn file_operation(&self, request: &FilesRequest) -> Result<Value, ApiError> {
        self.post_json("/panel/api/files", request).await
    }

    pub(crate) async fn fetch_torrents(&self) -> Result<TorrentStatusResponse, ApiError> {
        self.get_json("/panel/api/t_status").await
    }

    pub(crate) async fn torrent_operation(
        &self,
        request: &TorrentOperationRequest,
    ) -> Result<Value, ApiError> {
        self.post_json("/panel/api/t_status", request).await
    }

    pub(crate) async fn fetch_tasks(&self) -> Result<CeleryResponse, ApiError> {
        self.get_json("/panel/api/celery").await
    }

    pub(crate) async fn cancel_task(&self, process_id: &str) -> Result<Value, ApiError> {
        let request = CancelTaskRequest {
            process_id: process_id.to_string(),
        };
        self.post_json("/panel/api/celery", &request).await
    }

    pub(crate) async fn movie_management(
        &self,
        request: &MovieManagementRequest,
    ) -> Result<Value, ApiError> {
        self.post_json("/panel/api/movie-management", request).await
    }

    pub(crate) async fn fetch_settings(&self) -> Result<GlobalSettings, ApiError> {
        self.get_json("/panel/api/global-settings").await
    }

    pub(crate) async fn save_settings(&self, patch: &SettingsPatch) -> Result<Value, ApiError> {
        self.post_json("/panel/api/global-settings", patch).await
    }

    pub(crate) async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<Value, ApiError> {
        self.post_json("/panel/api/user/change-password", request)
            .await
    }

    pub(crate) async fn redownload_subtitles(
        &self,
        request: &RedownloadSubtitlesRequest,
    ) -> Result<Value, ApiError> {
        self.post_json("/panel/api/redownload-subtitles", request)
            .await
    }

    pub(crate) async fn fetch_sources(&self) -> Result<Vec<MudSource>, ApiError> {
        self.get_json("/panel/api/mud-sources").await
    }

    pub(crate) async fn add_source(&self, source: &NewMudSource) -> Result<Value, ApiError> {
        self.post_json("/panel/api/mud-sources", source).await
    }

    pub(crate) async fn delete_source(&self, source_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/panel/api/mud-source/{source_id}"))
            .await
    }

    pub(crate) async fn add_movie(&self, request: &AddMovieRequest) -> Result<Value, ApiError> {
        self.post_json("/panel/api/add-movie", request).await
    }

    /// Fetch an absolute third-party URL without panel headers.
    pub(crate) async fn fetch_external(&self, url: &str) -> Result<Value, ApiError> {
        let response = Request::get(url).send().await.map_err(transport)?;
        decode(response).await
    }
}

/// Banner text for a failure; long payloads go to the console instead.
pub(crate) fn describe(err: &ApiError) -> String {
    let shown = err.display();
    console::error!("request failed", err.to_string());
    if let Some(payload) = shown.suppressed {
        console::error!("error payload too long to display", payload);
    }
    shown.message
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(transport)?;
    if !response.ok() {
        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        };
        return Err(ApiError::Status { status, body });
    }
    let text = if text.trim().is_empty() { "null" } else { &text };
    Ok(serde_json::from_str(text)?)
}

fn csrf_token() -> String {
    document()
        .query_selector(CSRF_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
