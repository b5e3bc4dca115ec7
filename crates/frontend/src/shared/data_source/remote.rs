//! HTTP JSON источник данных поверх backend API

use super::error::DataSourceError;
use crate::shared::api_utils::{api_base, entity_path};
use contracts::domain::common::{EntityKind, LookupKind, LookupOption};
use contracts::shared::table::{ListRequest, Paginated};
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteSource {
    base: String,
}

#[derive(Debug, Deserialize)]
struct SavedId {
    id: String,
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    ids: &'a [String],
}

#[derive(Debug, Deserialize)]
struct DeletedCount {
    deleted: usize,
}

impl RemoteSource {
    pub fn new(api_port: u16) -> Self {
        Self {
            base: api_base(api_port),
        }
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn list(
        &self,
        kind: EntityKind,
        request: &ListRequest,
    ) -> Result<Paginated<Value>, DataSourceError> {
        let url = self.url(&format!("{}/list", entity_path(kind.as_str(), None)));
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| DataSourceError::Encode(e.to_string()))?
            .send()
            .await?;
        decode(response).await
    }

    pub async fn detail(&self, kind: EntityKind, id: &str) -> Result<Value, DataSourceError> {
        let url = self.url(&entity_path(kind.as_str(), Some(id)));
        let response = Request::get(&url).send().await?;
        if response.status() == 404 {
            return Err(DataSourceError::NotFound {
                kind,
                id: id.to_string(),
            });
        }
        decode(response).await
    }

    pub async fn options(&self, kind: LookupKind) -> Result<Vec<LookupOption>, DataSourceError> {
        let url = self.url(&format!("/api/lookup/{}", kind.as_str()));
        let response = Request::get(&url).send().await?;
        decode(response).await
    }

    /// POST for create, PUT for update; the backend answers `{ "id": ... }`
    pub async fn save(
        &self,
        kind: EntityKind,
        id: Option<&str>,
        payload: &Value,
    ) -> Result<String, DataSourceError> {
        let url = self.url(&entity_path(kind.as_str(), id));
        let builder = match id {
            Some(_) => Request::put(&url),
            None => Request::post(&url),
        };
        let response = builder
            .json(payload)
            .map_err(|e| DataSourceError::Encode(e.to_string()))?
            .send()
            .await?;
        let saved: SavedId = decode(response).await?;
        Ok(saved.id)
    }

    pub async fn delete(&self, kind: EntityKind, ids: &[String]) -> Result<usize, DataSourceError> {
        let url = self.url(&format!("{}/delete", entity_path(kind.as_str(), None)));
        let response = Request::post(&url)
            .json(&DeleteRequest { ids })
            .map_err(|e| DataSourceError::Encode(e.to_string()))?
            .send()
            .await?;
        let deleted: DeletedCount = decode(response).await?;
        Ok(deleted.deleted)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DataSourceError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        return Err(DataSourceError::Status { status, message });
    }
    Ok(response.json::<T>().await?)
}
