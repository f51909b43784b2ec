use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by viagens-api.
pub type ActivityId = i64;

/// Activity category, as understood by viagens-api.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Alimentacao,
    Passeio,
    Hospedagem,
    Transporte,
    Compras,
    Outro,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Alimentacao,
        Category::Passeio,
        Category::Hospedagem,
        Category::Transporte,
        Category::Compras,
        Category::Outro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Alimentacao => "ALIMENTACAO",
            Category::Passeio => "PASSEIO",
            Category::Hospedagem => "HOSPEDAGEM",
            Category::Transporte => "TRANSPORTE",
            Category::Compras => "COMPRAS",
            Category::Outro => "OUTRO",
        }
    }

    /// Static asset served next to the web build for this category.
    pub fn image_path(self) -> String {
        format!("/img/{}.jpeg", self.as_str().to_lowercase())
    }
}

/// Lifecycle state of an activity. New activities start as `Pendente`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Pendente,
    Concluida,
    Cancelada,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pendente, Status::Concluida, Status::Cancelada];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pendente => "PENDENTE",
            Status::Concluida => "CONCLUIDA",
            Status::Cancelada => "CANCELADA",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "categoria",
                value: s.to_string(),
            })
    }
}

impl FromStr for Status {
    type Err = UnknownVariant;

    // The API has been seen answering lowercase and accented spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('Í', "I");
        Status::ALL
            .into_iter()
            .find(|st| st.as_str() == normalized)
            .ok_or_else(|| UnknownVariant {
                kind: "status",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An activity as returned by viagens-api.
///
/// `date` is kept as the raw `yyyy-MM-dd` string so that a single malformed
/// row does not fail the whole list; the agenda drops such rows instead.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    #[serde(default)]
    pub id: ActivityId,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "localUrl", default)]
    pub location_url: Option<String>,
    #[serde(rename = "data", default)]
    pub date: Option<String>,
    #[serde(rename = "horaInicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "horaFim", default)]
    pub end_time: Option<String>,
    #[serde(rename = "custoEstimado", default)]
    pub estimated_cost: Option<f64>,
    #[serde(rename = "categoria", default)]
    pub category: Option<Category>,
    #[serde(
        rename = "prioridade",
        default,
        deserialize_with = "deserialize_lenient_priority"
    )]
    pub priority: Option<i64>,
    #[serde(default)]
    pub status: Status,
}

impl Activity {
    /// Priority used for ordering; unknown priorities rank as 0.
    pub fn sort_priority(&self) -> i64 {
        self.priority.unwrap_or(0)
    }
}

/// Accepts `3`, `3.0` and `"3"`; anything else becomes `None`.
fn deserialize_lenient_priority<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
