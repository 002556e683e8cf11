//! Conference talks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fmt;

use super::Collection;
use crate::content::{AssetContext, ImageRef};
use crate::helpers::{date, non_null};
use crate::helpers::url::Url;

/// Whether a talk has happened yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkStatus {
    Upcoming,
    Past,
}

impl fmt::Display for TalkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalkStatus::Upcoming => f.write_str("upcoming"),
            TalkStatus::Past => f.write_str("past"),
        }
    }
}

/// A conference talk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talk {
    pub title: String,

    pub conference: String,

    #[serde(deserialize_with = "date::coerce")]
    pub date: DateTime<Utc>,

    pub status: TalkStatus,

    #[serde(default, deserialize_with = "non_null")]
    pub conference_url: Option<Url>,

    /// Slides may be a relative path, so this is not URL-checked
    #[serde(default, deserialize_with = "non_null")]
    pub slides_url: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    pub video_url: Option<Url>,

    #[serde(default, deserialize_with = "non_null")]
    pub hero_image: Option<ImageRef>,
}

impl Talk {
    pub fn is_upcoming(&self) -> bool {
        self.status == TalkStatus::Upcoming
    }
}

impl Collection for Talk {
    const NAME: &'static str = "talks";

    fn resolve_assets(&mut self, ctx: &AssetContext) -> Result<(), String> {
        if let Some(image) = self.hero_image.as_mut() {
            image.resolve(ctx).map_err(|e| format!("heroImage: {}", e))?;
        }
        Ok(())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn scaffold(today: &str) -> Vec<(&'static str, Value)> {
        vec![
            ("conference", Value::String(String::new())),
            ("date", Value::String(today.to_string())),
            ("status", Value::String(TalkStatus::Upcoming.to_string())),
        ]
    }
}
