use serde::{Deserialize, Deserializer, Serialize};

pub type Id = String;

/// Bilingual display text (Indonesian / English).
///
/// Accepts either `{"id": "...", "en": "..."}` or a bare string, which is
/// used for both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LabelRepr")]
pub struct LocalizedText {
    pub id: String,
    pub en: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    Plain(String),
    Localized {
        #[serde(default)]
        id: String,
        #[serde(default)]
        en: String,
    },
}

impl From<LabelRepr> for LocalizedText {
    fn from(repr: LabelRepr) -> Self {
        match repr {
            LabelRepr::Plain(text) => Self::same(text),
            LabelRepr::Localized { id, en } => Self { id, en },
        }
    }
}

impl LocalizedText {
    pub fn new(id: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            en: en.into(),
        }
    }

    /// Same text in both languages; used when only a raw option value is known.
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: text.clone(),
            en: text,
        }
    }
}

/// How an option's price combines with the running total.
///
/// Only `"override"` is meaningful on the wire; every other string (or a
/// missing field) means the price is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriceMode {
    Override,
    Additive,
}

impl From<String> for PriceMode {
    fn from(raw: String) -> Self {
        if raw == "override" {
            PriceMode::Override
        } else {
            PriceMode::Additive
        }
    }
}

impl From<PriceMode> for String {
    fn from(mode: PriceMode) -> Self {
        match mode {
            PriceMode::Override => "override".to_string(),
            PriceMode::Additive => "additive".to_string(),
        }
    }
}

impl PriceMode {
    pub fn is_override(self) -> bool {
        matches!(self, PriceMode::Override)
    }
}

/// Deserialize a price field, keeping it only when the JSON value is a number.
///
/// Admin tooling occasionally stores prices as strings or `null`; those are
/// treated as "no price" instead of failing the whole document.
pub fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}
