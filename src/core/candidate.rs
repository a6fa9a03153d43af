use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an id from string or int (database rows use integers)
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(i64),
        String(String),
        Null,
    }

    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Int(i) => i.to_string(),
        IdValue::String(s) => s,
        IdValue::Null => String::new(),
    })
}

/// Deserialize an optional text column: `null` becomes an empty string
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a text column that may hold a JSON-encoded alias array.
/// Anything that is not an array is kept verbatim as free text.
fn decode_alternative_names(raw: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" "),
        _ => raw,
    }
}

/// Alternative names are stored either as free text or as a list of aliases.
/// Lists are joined with spaces so every alias stays matchable word by word.
fn deserialize_alternative_names<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NamesValue {
        Text(String),
        List(Vec<String>),
        Null,
    }

    Ok(match NamesValue::deserialize(deserializer)? {
        NamesValue::Text(s) => decode_alternative_names(s),
        NamesValue::List(names) => names.join(" "),
        NamesValue::Null => String::new(),
    })
}

/// Free-form keywords attached to a player.
///
/// Storage keeps them as a JSON-encoded array inside a text column, so
/// deserialization accepts a real array, an encoded array, or anything else.
/// Anything that is not a list of strings degrades to an empty set instead of
/// failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Keywords(Vec<String>);

impl Keywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self(keywords)
    }

    /// Parses a JSON-encoded keyword array. Malformed input yields no keywords.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed keywords {:?}: {}", raw, e);
                Self::default()
            }
        }
    }

    fn from_value(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Array(items) => Self(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::String(encoded) => Self::parse(&encoded),
            Value::Null => Self::default(),
            other => {
                tracing::warn!("Ignoring keywords of unexpected shape: {}", other);
                Self::default()
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Keywords {
    fn from(keywords: Vec<String>) -> Self {
        Self(keywords)
    }
}

impl From<Vec<&str>> for Keywords {
    fn from(keywords: Vec<&str>) -> Self {
        Self(keywords.into_iter().map(String::from).collect())
    }
}

impl<'de> Deserialize<'de> for Keywords {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

impl<'a> IntoIterator for &'a Keywords {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Searchable text fields of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    NameArabic,
    NameEnglish,
    AlternativeNames,
    TeamName,
    /// One pseudo-field per keyword
    Keyword,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::NameArabic => "name_arabic",
            SearchField::NameEnglish => "name_english",
            SearchField::AlternativeNames => "alternative_names",
            SearchField::TeamName => "team_name",
            SearchField::Keyword => "keyword",
        }
    }
}

/// A player record offered to the search engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Identifier from the data store
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,

    /// Name in Arabic script
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name_arabic: String,

    /// Name in Latin script
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name_english: String,

    /// Nicknames and spelling variants
    #[serde(default, alias = "aliases", deserialize_with = "deserialize_alternative_names")]
    pub alternative_names: String,

    /// Current team
    #[serde(default, deserialize_with = "deserialize_text")]
    pub team_name: String,

    /// Playing position (not searched)
    #[serde(default, deserialize_with = "deserialize_text")]
    pub position: String,

    /// Free-form keywords
    #[serde(default)]
    pub keywords: Keywords,

    /// When the record was added
    #[serde(default, alias = "dateAdded")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Candidate {
    /// Create a new Candidate with the two primary names
    pub fn new(
        id: impl Into<String>,
        name_arabic: impl Into<String>,
        name_english: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_arabic: name_arabic.into(),
            name_english: name_english.into(),
            alternative_names: String::new(),
            team_name: String::new(),
            position: String::new(),
            keywords: Keywords::default(),
            created_at: None,
        }
    }

    pub fn with_alternative_names(mut self, names: impl Into<String>) -> Self {
        self.alternative_names = names.into();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team_name = team.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<Keywords>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Non-empty searchable fields: primary names, alternative names, team,
    /// then every keyword as its own entry.
    pub fn searchable_fields(&self) -> Vec<(SearchField, &str)> {
        let fixed = [
            (SearchField::NameArabic, self.name_arabic.as_str()),
            (SearchField::NameEnglish, self.name_english.as_str()),
            (SearchField::AlternativeNames, self.alternative_names.as_str()),
            (SearchField::TeamName, self.team_name.as_str()),
        ];

        fixed
            .into_iter()
            .chain(
                self.keywords
                    .iter()
                    .map(|kw| (SearchField::Keyword, kw.as_str())),
            )
            .filter(|(_, text)| !text.trim().is_empty())
            .collect()
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        match (self.name_arabic.is_empty(), self.name_english.is_empty()) {
            (false, false) => format!("{} ({})", self.name_arabic, self.name_english),
            (false, true) => self.name_arabic.clone(),
            (true, false) => self.name_english.clone(),
            (true, true) => format!("#{}", self.id),
        }
    }
}
