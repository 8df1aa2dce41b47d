use crate::config::Config;
use crate::error::AppError;
use crate::models::game::*;
use crate::models::leaderboard::*;
use crate::services::leaderboard::PageFetcher;
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

const SEARCH: &str = "GetSearch";
const GAME_DATA: &str = "GetGameData";
const LEADERBOARD: &str = "GetGameLeaderboard2";

/// The three read-only calls a session makes against the leaderboard service.
#[async_trait]
pub trait LeaderboardApi: PageFetcher {
    async fn search(&self, query: &str) -> Result<SearchResponse, AppError>;
    async fn game_data(&self, game_id: &str) -> Result<GameDataResponse, AppError>;
}

pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(ApiClient {
            http,
            base: config.api_base.clone(),
        })
    }

    pub fn endpoint_url<P: Serialize>(&self, endpoint: &'static str, params: &P) -> Result<Url, AppError> {
        let mut url = self
            .base
            .join(endpoint)
            .map_err(|e| AppError::Config(format!("Bad endpoint {}: {}", endpoint, e)))?;
        url.query_pairs_mut()
            .append_pair("_r", &encode_params(endpoint, params)?);
        Ok(url)
    }

    async fn get<P, T>(&self, endpoint: &'static str, params: &P) -> Result<T, AppError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, params)?;
        log::debug!("GET {}", url);

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        decode(endpoint, &body)
    }
}

#[async_trait]
impl PageFetcher for ApiClient {
    async fn fetch_page(&self, selection: &QuerySelection, page: u32) -> Result<LeaderboardPage, AppError> {
        self.get(LEADERBOARD, &LeaderboardParams::new(selection, page)).await
    }
}

#[async_trait]
impl LeaderboardApi for ApiClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, AppError> {
        let params = SearchParams {
            query,
            include_games: true,
        };
        self.get(SEARCH, &params).await
    }

    async fn game_data(&self, game_id: &str) -> Result<GameDataResponse, AppError> {
        self.get(GAME_DATA, &GameDataParams { game_id }).await
    }
}

/// JSON-encodes request parameters into the URL-safe, unpadded base64 blob the service expects.
pub fn encode_params<P: Serialize>(endpoint: &'static str, params: &P) -> Result<String, AppError> {
    let json = serde_json::to_vec(params).map_err(|source| AppError::Encode { endpoint, source })?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json))
}

pub fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|source| AppError::Decode { endpoint, source })
}
