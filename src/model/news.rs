use chrono::NaiveDateTime;
use serde::Serialize;

/// A news article (`news` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub category_id: i64,
    /// Only ever incremented, never reset.
    pub views: i64,
    pub publish_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Reduced projection used for recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct RelatedNews {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub views: i64,
    pub publish_time: NaiveDateTime,
}

/// One page of a category listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub list: Vec<News>,
    pub total: i64,
    pub has_more: bool,
}

/// Detail payload: the article plus its recommendations
///
/// `views` is the value read before this request's increment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub publish_time: NaiveDateTime,
    pub category_id: i64,
    pub views: i64,
    pub related_news: Vec<RelatedNews>,
}

impl NewsDetail {
    pub fn new(news: News, related_news: Vec<RelatedNews>) -> Self {
        Self {
            id: news.id,
            title: news.title,
            description: news.description,
            content: news.content,
            image: news.image,
            author: news.author,
            publish_time: news.publish_time,
            category_id: news.category_id,
            views: news.views,
            related_news,
        }
    }
}
