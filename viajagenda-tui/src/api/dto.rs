use serde::Serialize;

use crate::types::{Category, Status};

/// Body of `POST /` and `PUT /{id}`.
///
/// `status` is left out on create so the server assigns `PENDENTE`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPayload {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "imagem")]
    pub image: Option<String>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "localUrl")]
    pub location_url: Option<String>,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "horaInicio")]
    pub start_time: Option<String>,
    #[serde(rename = "horaFim")]
    pub end_time: Option<String>,
    #[serde(rename = "custoEstimado")]
    pub estimated_cost: Option<f64>,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "prioridade")]
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Query parameters of `GET /`. Unset or blank values are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub priority: Option<u8>,
    pub date: Option<String>,
}

impl ActivityFilter {
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(title) = self.title.as_deref().map(str::trim) {
            if !title.is_empty() {
                pairs.push(("titulo", title.to_string()));
            }
        }
        if let Some(category) = self.category {
            pairs.push(("categoria", category.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("prioridade", priority.to_string()));
        }
        if let Some(date) = self.date.as_deref().map(str::trim) {
            if !date.is_empty() {
                pairs.push(("data", date.to_string()));
            }
        }
        pairs
    }
}
