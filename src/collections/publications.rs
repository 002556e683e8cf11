//! Publications (articles written for other outlets)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::Collection;
use crate::helpers::date;
use crate::helpers::url::Url;

/// An article published elsewhere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,

    pub description: String,

    /// Outlet name, e.g. "LWN.net"
    pub source: String,

    #[serde(deserialize_with = "date::coerce")]
    pub pub_date: DateTime<Utc>,

    pub url: Url,

    #[serde(default)]
    pub featured: bool,
}

impl Collection for Publication {
    const NAME: &'static str = "publications";

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> DateTime<Utc> {
        self.pub_date
    }

    /// `url` needs a placeholder, since an empty string is not a URL
    fn scaffold(today: &str) -> Vec<(&'static str, Value)> {
        vec![
            ("description", Value::String(String::new())),
            ("source", Value::String(String::new())),
            ("pubDate", Value::String(today.to_string())),
            ("url", Value::String("https://example.com".to_string())),
            ("featured", Value::Bool(false)),
        ]
    }
}
