use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, RequestBuilder, Response, StatusCode, Url,
};
use serde::de::DeserializeOwned;

use crate::api::dev_backend::DevBackend;
use crate::api::dto::{ActivityFilter, ActivityPayload};
use crate::api::ApiError;
use crate::types::{Activity, ActivityId, Status};

type Result<T> = std::result::Result<T, ApiError>;

/// Thin client over viagens-api: one method per endpoint, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Keep a trailing slash so relative joins stay under the context path.
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url,
            dev_backend: None,
        })
    }

    pub fn dev() -> Result<Self> {
        Self::with_dev_backend(DevBackend::new())
    }

    pub fn with_dev_backend(backend: DevBackend) -> Result<Self> {
        let mut client = Self::new("http://localhost/viagens-api")?;
        client.dev_backend = Some(backend);
        Ok(client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            call: call_name.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(call = call_name, %status, "request failed");
            return Err(ApiError::Status {
                call: call_name.to_string(),
                status,
            });
        }

        tracing::debug!(call = call_name, %status, "request succeeded");
        Ok(response)
    }

    /// Decode a JSON body; `204 No Content` and empty bodies decode as `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<Option<T>> {
        let response = self.send(request, call_name).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                call: call_name.to_string(),
                source,
            })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ApiError::Decode {
                call: call_name.to_string(),
                source,
            })
    }

    async fn get_required_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T> {
        match self.get_json(request, call_name).await? {
            Some(value) => Ok(value),
            None => Err(ApiError::Decode {
                call: call_name.to_string(),
                source: serde::de::Error::custom("empty response body"),
            }),
        }
    }

    async fn send_without_body(&self, request: RequestBuilder, call_name: &str) -> Result<()> {
        let response = self.send(request, call_name).await?;
        // The call already succeeded; an unreadable body does not undo it.
        if let Err(err) = response.bytes().await {
            tracing::debug!(call = call_name, error = %err, "failed to drain response body");
        }
        Ok(())
    }

    pub async fn list(&self, filter: &ActivityFilter) -> Result<Vec<Activity>> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.list(filter));
        }

        let activities = self
            .get_json(
                self.client
                    .get(self.endpoint("")?)
                    .query(&filter.query_pairs()),
                "GET /",
            )
            .await?;
        Ok(activities.unwrap_or_default())
    }

    pub async fn get(&self, id: ActivityId) -> Result<Activity> {
        if let Some(dev) = &self.dev_backend {
            return dev.get(id).ok_or(ApiError::NotFound(id));
        }

        self.get_required_json(
            self.client.get(self.endpoint(&id.to_string())?),
            "GET /:id",
        )
        .await
    }

    pub async fn create(&self, payload: &ActivityPayload) -> Result<Activity> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.create(payload));
        }

        self.get_required_json(
            self.client.post(self.endpoint("")?).json(payload),
            "POST /",
        )
        .await
    }

    pub async fn update(&self, id: ActivityId, payload: &ActivityPayload) -> Result<Activity> {
        if let Some(dev) = &self.dev_backend {
            return dev.update(id, payload).ok_or(ApiError::NotFound(id));
        }

        self.get_required_json(
            self.client
                .put(self.endpoint(&id.to_string())?)
                .json(payload),
            "PUT /:id",
        )
        .await
    }

    pub async fn delete(&self, id: ActivityId) -> Result<()> {
        if let Some(dev) = &self.dev_backend {
            return dev
                .delete(id)
                .then_some(())
                .ok_or(ApiError::NotFound(id));
        }

        self.send_without_body(
            self.client.delete(self.endpoint(&id.to_string())?),
            "DELETE /:id",
        )
        .await
    }

    /// Mark as `CONCLUIDA`.
    pub async fn complete(&self, id: ActivityId) -> Result<()> {
        self.patch_status(id, "concluir", Status::Concluida).await
    }

    /// Mark as `CANCELADA`.
    pub async fn cancel(&self, id: ActivityId) -> Result<()> {
        self.patch_status(id, "cancelar", Status::Cancelada).await
    }

    async fn patch_status(&self, id: ActivityId, verb: &str, status: Status) -> Result<()> {
        if let Some(dev) = &self.dev_backend {
            return dev
                .set_status(id, status)
                .then_some(())
                .ok_or(ApiError::NotFound(id));
        }

        self.send_without_body(
            self.client
                .patch(self.endpoint(&format!("{}/{}", id, verb))?),
            &format!("PATCH /:id/{}", verb),
        )
        .await
    }
}
