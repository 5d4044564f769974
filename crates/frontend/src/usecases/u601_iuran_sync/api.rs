use super::service::IuranSyncService;
use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u601_iuran_sync::{
    GenerateMonthlyRequest, GenerateYearRequest, SyncPayload,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

const SYNC_PATH: &str = "/api/u601/iuran/sync";
const GENERATE_MONTH_PATH: &str = "/api/u601/iuran/generate_month";
const GENERATE_YEAR_PATH: &str = "/api/u601/iuran/generate_year";

/// HTTP client of the dues backend
#[derive(Debug, Clone, Default)]
pub struct HttpIuranService;

#[async_trait(?Send)]
impl IuranSyncService for HttpIuranService {
    async fn sync_iuran_data(&self) -> UseCaseResult<SyncPayload> {
        let response = Request::post(&api_url(SYNC_PATH))
            .send()
            .await
            .map_err(|e| UseCaseError::external("Request failed").with_details(e.to_string()))?;

        read_json(response).await
    }

    async fn generate_monthly_iuran(&self, month: &str, year: i32) -> UseCaseResult<SyncPayload> {
        let body = GenerateMonthlyRequest {
            month: month.to_string(),
            year,
        };
        post_json(GENERATE_MONTH_PATH, &body).await
    }

    async fn generate_iuran_for_year(&self, year: i32) -> UseCaseResult<Vec<Value>> {
        post_json(GENERATE_YEAR_PATH, &GenerateYearRequest { year }).await
    }
}

async fn post_json<B, T>(path: &str, body: &B) -> UseCaseResult<T>
where
    B: serde::Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| UseCaseError::internal("Failed to encode request").with_details(e.to_string()))?
        .send()
        .await
        .map_err(|e| UseCaseError::external("Request failed").with_details(e.to_string()))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> UseCaseResult<T> {
    if !response.ok() {
        return Err(UseCaseError::external("HTTP error")
            .with_details(format!("{} {}", response.status(), response.url())));
    }

    response
        .json()
        .await
        .map_err(|e| UseCaseError::external("Failed to parse response").with_details(e.to_string()))
}
