//! Records returned by the directory API. Field names follow the API's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::filter::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub resource_type: ResourceKind,
    pub category_name: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub categories: Category,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub upvote_count: u32,
    pub language: Language,
    #[serde(default)]
    pub has_upvoted: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub bookmark_count: Option<u32>,
    pub category_id: String,
    #[serde(default)]
    pub creator: Option<Creator>,
    pub status: ApprovalStatus,
}

/// Signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
