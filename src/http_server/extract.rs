//! Request extractors
//!
//! - [`Params`] parses query parameters before any store work starts
//! - [`Session`] opens the request's transaction from the pool in state

use std::collections::HashMap;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts, Query};
use axum::http::request::Parts;

use super::errors::ApiError;
use super::params::FromQueryMap;
use crate::session::{DbPool, Session};

/// Typed query parameters
#[derive(Debug, Clone, Copy)]
pub struct Params<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Params<T>
where
    S: Send + Sync,
    T: FromQueryMap + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidParam(e.body_text()))?;

        T::from_query_map(&raw).map(Params)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    DbPool: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = DbPool::from_ref(state);
        Ok(Session::begin(&pool).await?)
    }
}
