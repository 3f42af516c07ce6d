//! REST 服务层：统一 base URL、JSON 头与 Bearer Token 的 HTTP 客户端封装
//!
//! 路径约定：各服务模块传入以 `/` 开头的相对路径，拼在 base URL 后面。
//! 所有非 2xx 响应转成 ApiError::Status（带响应体，便于排错）。

mod projects;
mod skills;
mod users;

pub use projects::{CommentCreate, ProjectApi};
pub use skills::{ensure_skill, SkillApi, SkillCatalog};
pub use users::PersonApi;

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiSection;
use crate::error::ApiError;

/// 基础 HTTP 客户端：reqwest::Client + base URL + 可选 token
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// 按配置构建。base URL 末尾多余的 `/` 会被剥掉。
    pub fn new(config: &ApiSection) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// 登录后挂上 Bearer Token，之后每个请求自动携带
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self
            .send(self.client.get(self.url(path)).query(query))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .send(self.client.post(self.url(path)).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    /// POST 空体 + 查询参数（assign、协作需求等「参数即语义」的端点）
    pub(crate) async fn post_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(), ApiError> {
        self.send(self.client.post(self.url(path)).query(query))
            .await?;
        Ok(())
    }

    /// POST JSON 体 + 查询参数（发评论这类两者都要的端点）
    pub(crate) async fn post_json_query<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .send(self.client.post(self.url(path)).query(query).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .send(self.client.put(self.url(path)).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}

/// skip / limit 分页参数展开（None 项不出现）
pub(crate) fn paging_query(skip: Option<u32>, limit: Option<u32>) -> Vec<(&'static str, String)> {
    let mut q = Vec::new();
    if let Some(skip) = skip {
        q.push(("skip", skip.to_string()));
    }
    if let Some(limit) = limit {
        q.push(("limit", limit.to_string()));
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let section = ApiSection {
            base_url: "http://localhost:8000/api/".to_string(),
            timeout_secs: 5,
            token: None,
        };
        let api = ApiClient::new(&section).unwrap();
        assert_eq!(api.url("/skills/"), "http://localhost:8000/api/skills/");
    }

    #[test]
    fn test_paging_query() {
        assert!(paging_query(None, None).is_empty());
        assert_eq!(
            paging_query(Some(10), Some(20)),
            vec![("skip", "10".to_string()), ("limit", "20".to_string())]
        );
    }
}
