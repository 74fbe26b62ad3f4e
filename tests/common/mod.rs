#![allow(dead_code)]

use async_trait::async_trait;
use linkcard::application::services::{LinkService, LinkSubmission, ShortLink};
use linkcard::domain::entities::{Link, NewLink};
use linkcard::domain::repositories::LinkRepository;
use linkcard::error::AppError;
use linkcard::infrastructure::persistence::MemoryLinkRepository;
use linkcard::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";

/// State backed by a fresh in-memory store, with `BASE_URL` configured.
pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(MemoryLinkRepository::new()))
}

/// State with no configured `BASE_URL`, so short URLs follow the request.
pub fn create_state_without_base_url() -> AppState {
    let service = LinkService::new(Arc::new(MemoryLinkRepository::new()));
    AppState::new(Arc::new(service), None)
}

pub fn create_state_with(repository: Arc<dyn LinkRepository>) -> AppState {
    let service = LinkService::new(repository);
    AppState::new(Arc::new(service), Some(BASE_URL.to_string()))
}

pub async fn create_test_link(
    state: &AppState,
    url: &str,
    title: Option<&str>,
    description: Option<&str>,
) -> ShortLink {
    let submission = LinkSubmission {
        url: url.to_string(),
        title: title.map(str::to_string),
        description: description.map(str::to_string),
        ..Default::default()
    };

    state
        .link_service
        .create_short_link(submission, BASE_URL)
        .await
        .unwrap()
}

pub async fn link_count(state: &AppState) -> i64 {
    state.link_service.count_links().await.unwrap()
}

/// Store whose every call fails like an unreachable database.
pub struct FailingRepository;

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::storage("connection refused"))
    }
}

/// Store that reports a code conflict on every insert.
pub struct AlwaysConflictRepository;

#[async_trait]
impl LinkRepository for AlwaysConflictRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::conflict(
            "Short code already exists",
            serde_json::json!({ "code": new_link.code }),
        ))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Ok(None)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
