//! # Query Parameter Parser
//!
//! Parses the raw query map of each news endpoint into typed parameters.
//! Unknown keys are ignored.

use std::collections::HashMap;

use super::errors::{ApiError, ApiResult};
use crate::query::{Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Default `limit` for the category listing
pub const DEFAULT_CATEGORY_LIMIT: i64 = 100;

/// Parameters parsed from a raw query map
pub trait FromQueryMap: Sized {
    fn from_query_map(params: &HashMap<String, String>) -> ApiResult<Self>;
}

/// `GET /categories?skip&limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoriesParams {
    pub skip: i64,
    pub limit: i64,
}

impl FromQueryMap for CategoriesParams {
    fn from_query_map(params: &HashMap<String, String>) -> ApiResult<Self> {
        let skip = optional_i64(params, "skip", 0)?;
        let limit = optional_i64(params, "limit", DEFAULT_CATEGORY_LIMIT)?;

        ensure_at_least("skip", skip, 0)?;
        ensure_at_least("limit", limit, 0)?;

        Ok(Self { skip, limit })
    }
}

/// `GET /list?categoryId&page&pageSize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub category_id: i64,
    pub page: Page,
}

impl FromQueryMap for ListParams {
    fn from_query_map(params: &HashMap<String, String>) -> ApiResult<Self> {
        let category_id = required_i64(params, "categoryId")?;
        let page = optional_i64(params, "page", 1)?;
        let page_size = optional_i64(params, "pageSize", DEFAULT_PAGE_SIZE)?;

        ensure_at_least("page", page, 1)?;
        ensure_at_least("pageSize", page_size, 1)?;
        if page_size > MAX_PAGE_SIZE {
            return Err(ApiError::InvalidParam(format!(
                "pageSize must be less than or equal to {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            category_id,
            page: Page::new(page, page_size),
        })
    }
}

/// `GET /detail?newsId`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailParams {
    pub news_id: i64,
}

impl FromQueryMap for DetailParams {
    fn from_query_map(params: &HashMap<String, String>) -> ApiResult<Self> {
        Ok(Self {
            news_id: required_i64(params, "newsId")?,
        })
    }
}

/// `GET /related?categoryId&newsId`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedParams {
    pub category_id: i64,
    pub news_id: i64,
}

impl FromQueryMap for RelatedParams {
    fn from_query_map(params: &HashMap<String, String>) -> ApiResult<Self> {
        Ok(Self {
            category_id: required_i64(params, "categoryId")?,
            news_id: required_i64(params, "newsId")?,
        })
    }
}

fn parse_i64(name: &str, value: &str) -> ApiResult<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        ApiError::InvalidParam(format!("{} must be an integer, got '{}'", name, value))
    })
}

fn required_i64(params: &HashMap<String, String>, name: &str) -> ApiResult<i64> {
    match params.get(name) {
        Some(value) => parse_i64(name, value),
        None => Err(ApiError::InvalidParam(format!(
            "Missing required parameter: {}",
            name
        ))),
    }
}

fn optional_i64(params: &HashMap<String, String>, name: &str, default: i64) -> ApiResult<i64> {
    params
        .get(name)
        .map(|value| parse_i64(name, value))
        .unwrap_or(Ok(default))
}

fn ensure_at_least(name: &str, value: i64, min: i64) -> ApiResult<()> {
    if value < min {
        return Err(ApiError::InvalidParam(format!(
            "{} must be greater than or equal to {}",
            name, min
        )));
    }
    Ok(())
}
