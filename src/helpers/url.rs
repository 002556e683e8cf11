//! URL validation for front-matter fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// An absolute URL, validated with the WHATWG URL parser.
///
/// The front-matter text is kept as written; the parsed form backs the
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Url {
    raw: String,
    parsed: url::Url,
}

impl Url {
    /// Validate and wrap a URL string
    pub fn parse(input: &str) -> Result<Self, String> {
        let parsed =
            url::Url::parse(input).map_err(|e| format!("invalid url: {:?}: {}", input, e))?;
        Ok(Url {
            raw: input.to_string(),
            parsed,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Serialized WHATWG form, e.g. `https://example.com/`
    pub fn normalized(&self) -> &str {
        self.parsed.as_str()
    }

    /// Lower-cased scheme, without the trailing `:`
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Host for URLs that carry one
    pub fn host(&self) -> Option<&str> {
        self.parsed.host_str()
    }

    /// Whether this URL points at the web rather than a local resource
    pub fn is_remote(&self) -> bool {
        matches!(self.scheme(), "http" | "https")
    }
}

impl TryFrom<String> for Url {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Url::parse(&value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.raw
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Url {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}
