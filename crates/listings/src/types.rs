use crate::utils::deserialize_opt_epoch_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostFilter {
    pub sort: Option<String>,
    pub time: Option<String>,
}

impl PostFilter {
    pub const fn new(sort: Option<String>, time: Option<String>) -> Self {
        Self { sort, time }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingData<T> {
    pub children: Vec<T>,
    #[serde(default)]
    pub dist: u32,
    // None marks the end of pagination; never echo it back as a cursor.
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub kind: String,
    pub data: PostData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostData {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub author: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u32,
    #[serde(default)]
    pub over_18: bool,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_opt_epoch_seconds")]
    pub created_utc: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    pub posts: Vec<Post>,
    pub batch_count: u32,
    pub after_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus<T> {
    Success(T),
    Failure,
}

impl<T> FetchStatus<T> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchStatus<U> {
        match self {
            Self::Success(data) => FetchStatus::Success(f(data)),
            Self::Failure => FetchStatus::Failure,
        }
    }
}
