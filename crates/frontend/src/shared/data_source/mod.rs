//! Источник данных экранов
//!
//! Экраны ходят только через `DataSource`: in-memory mock для демо или
//! HTTP JSON backend. Выбор делается по `AppConfig::data_source`.

pub mod error;
pub mod mock;
pub mod remote;
pub mod seed;

pub use error::DataSourceError;
pub use mock::MockStore;
pub use remote::RemoteSource;

use crate::shared::config::{AppConfig, DataSourceKind};
use contracts::domain::common::{EntityKind, EntityRecord, LookupKind, LookupOption, SavePayload};
use contracts::shared::table::{ListRequest, Paginated};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

/// Mock-хранилище с имитацией сетевой задержки
#[derive(Debug, Clone)]
pub struct MockSource {
    store: Arc<Mutex<MockStore>>,
    latency_ms: u32,
}

impl MockSource {
    pub fn new(store: MockStore, latency_ms: u32) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            latency_ms,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MockStore>, DataSourceError> {
        self.store
            .lock()
            .map_err(|e| DataSourceError::Unavailable(e.to_string()))
    }

    async fn delay(&self) {
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

#[derive(Debug, Clone)]
pub enum DataSource {
    Mock(MockSource),
    Remote(RemoteSource),
}

impl DataSource {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.data_source {
            DataSourceKind::Mock => {
                DataSource::Mock(MockSource::new(MockStore::seeded(), config.mock_latency_ms))
            }
            DataSourceKind::Remote => DataSource::Remote(RemoteSource::new(config.api_port)),
        }
    }

    pub fn kind(&self) -> DataSourceKind {
        match self {
            DataSource::Mock(_) => DataSourceKind::Mock,
            DataSource::Remote(_) => DataSourceKind::Remote,
        }
    }

    /// One page of rows of `R` matching the request
    pub async fn fetch_list<R: EntityRecord>(
        &self,
        request: ListRequest,
    ) -> Result<Paginated<R>, DataSourceError> {
        let kind = R::kind();
        let page = match self {
            DataSource::Mock(mock) => {
                mock.delay().await;
                mock.lock()?.list(kind, &request)
            }
            DataSource::Remote(remote) => remote.list(kind, &request).await?,
        };
        let data = page
            .data
            .into_iter()
            .map(serde_json::from_value::<R>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Paginated {
            data,
            current_page: page.current_page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total: page.total,
        })
    }

    pub async fn fetch_detail<D: DeserializeOwned>(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<D, DataSourceError> {
        let value = match self {
            DataSource::Mock(mock) => {
                mock.delay().await;
                mock.lock()?.detail(kind, id)?
            }
            DataSource::Remote(remote) => remote.detail(kind, id).await?,
        };
        Ok(serde_json::from_value(value)?)
    }

    pub async fn fetch_options(
        &self,
        kind: LookupKind,
    ) -> Result<Vec<LookupOption>, DataSourceError> {
        match self {
            DataSource::Mock(mock) => {
                mock.delay().await;
                Ok(mock.lock()?.options(kind))
            }
            DataSource::Remote(remote) => remote.options(kind).await,
        }
    }

    /// Create or update depending on `record_id`; returns the record key
    pub async fn save<P: SavePayload>(&self, payload: &P) -> Result<String, DataSourceError> {
        let kind = P::kind();
        let id = payload.record_id();
        let body: Value =
            serde_json::to_value(payload).map_err(|e| DataSourceError::Encode(e.to_string()))?;
        log::debug!("save {} {:?}", kind, id);
        match self {
            DataSource::Mock(mock) => {
                mock.delay().await;
                mock.lock()?.save(kind, id, body)
            }
            DataSource::Remote(remote) => remote.save(kind, id, &body).await,
        }
    }

    pub async fn delete(&self, kind: EntityKind, ids: &[String]) -> Result<usize, DataSourceError> {
        if ids.is_empty() {
            return Ok(0);
        }
        match self {
            DataSource::Mock(mock) => {
                mock.delay().await;
                Ok(mock.lock()?.delete(kind, ids))
            }
            DataSource::Remote(remote) => remote.delete(kind, ids).await,
        }
    }
}

pub fn use_data_source() -> DataSource {
    use_context::<DataSource>().expect("DataSource not found in context")
}
