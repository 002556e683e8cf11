//! Front-matter parsing

use serde_yaml::{Mapping, Value};

use crate::error::{ContentError, Result};

const YAML_FENCE: &str = "---";
const TOML_FENCE: &str = "+++";

/// Front-matter data from a collection entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub data: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let content = content.trim_start_matches(['\n', '\r']);

        let first_line = content.lines().next().unwrap_or("").trim_end();
        match first_line {
            YAML_FENCE => Self::parse_fenced(content, YAML_FENCE, parse_yaml),
            TOML_FENCE => Self::parse_fenced(content, TOML_FENCE, parse_toml),
            _ => Ok((FrontMatter::default(), content)),
        }
    }

    fn parse_fenced<'a>(
        content: &'a str,
        fence: &str,
        parse_block: fn(&str) -> Result<Value>,
    ) -> Result<(Self, &'a str)> {
        let mut lines = content.split_inclusive('\n');
        // Skip the opening fence
        let opening = lines.next().unwrap_or("");
        let block_start = opening.len();
        let mut offset = block_start;

        for line in lines {
            if line.trim_end() == fence {
                let block = &content[block_start..offset];
                let remaining = content[offset + line.len()..].trim_start_matches(['\n', '\r']);
                let data = into_mapping(parse_block(block)?)?;
                return Ok((FrontMatter { data }, remaining));
            }
            offset += line.len();
        }

        Err(ContentError::Frontmatter(format!(
            "missing closing `{}` fence",
            fence
        )))
    }

    /// The `slug` key, which overrides the path-derived entry id
    pub fn slug(&self) -> Option<&str> {
        self.data
            .get(Value::String("slug".to_string()))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether the document had no front-matter keys at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Front-matter as a YAML value, ready for schema deserialization
    pub fn into_value(self) -> Value {
        Value::Mapping(self.data)
    }
}

fn parse_yaml(block: &str) -> Result<Value> {
    if block.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }
    Ok(serde_yaml::from_str(block)?)
}

fn parse_toml(block: &str) -> Result<Value> {
    let table: toml::Table = toml::from_str(block)?;
    Ok(toml_to_yaml(toml::Value::Table(table)))
}

fn into_mapping(value: Value) -> Result<Mapping> {
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        other => Err(ContentError::Frontmatter(format!(
            "expected a mapping of fields, got {}",
            type_name(&other)
        ))),
    }
}

/// TOML datetimes become strings so date coercion sees the same input as YAML
fn toml_to_yaml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(toml_to_yaml).collect()),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (Value::String(k), toml_to_yaml(v)))
                .collect(),
        ),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
