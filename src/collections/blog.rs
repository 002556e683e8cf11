//! Blog posts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::Collection;
use crate::content::{AssetContext, ImageRef};
use crate::helpers::{date, non_null};

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,

    pub description: String,

    /// Publication date
    #[serde(deserialize_with = "date::coerce")]
    pub pub_date: DateTime<Utc>,

    /// Last updated date
    #[serde(default, deserialize_with = "date::coerce_optional")]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "non_null")]
    pub hero_image: Option<ImageRef>,
}

impl BlogPost {
    /// Most recent of the publication and update dates
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_date
            .map(|u| u.max(self.pub_date))
            .unwrap_or(self.pub_date)
    }
}

impl Collection for BlogPost {
    const NAME: &'static str = "blog";

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
        self.pub_date
    }

    fn scaffold(today: &str) -> Vec<(&'static str, Value)> {
        vec![
            ("description", Value::String(String::new())),
            ("pubDate", Value::String(today.to_string())),
        ]
    }
}
