/// 题目页面客户端
///
/// 封装抓取题目 HTML 的 HTTP 调用
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult, NetworkError};
use crate::models::ProblemId;

/// 题目页面抓取能力
#[async_trait]
pub trait ProblemFetcher: Send + Sync {
    /// 抓取题目页面，返回原始 HTML
    async fn fetch(&self, id: ProblemId) -> AppResult<String>;
}

/// 基于 reqwest 的题目页面客户端
///
/// 不重试，不做缓存（缓存由 `ProblemCache` 负责）
pub struct EulerClient {
    http: reqwest::Client,
    base_url: String,
}

impl EulerClient {
    /// 创建新的题目页面客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let http = builder
            .build()
            .map_err(|source| NetworkError::ClientBuildFailed { source })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 题目页面地址
    pub fn problem_url(&self, id: ProblemId) -> String {
        format!("{}/problem={}", self.base_url, id)
    }
}

#[async_trait]
impl ProblemFetcher for EulerClient {
    async fn fetch(&self, id: ProblemId) -> AppResult<String> {
        let url = self.problem_url(id);
        debug!("正在请求题目页面: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::BadStatus {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(&url, e))?;

        debug!("页面下载完成，长度: {} 字节", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// 在本地端口上应答一次请求，返回收到的请求头
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: text/html\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8(request).unwrap()
        });

        (base_url, handle)
    }

    fn client_for(base_url: String) -> EulerClient {
        let config = Config {
            base_url,
            ..Config::default()
        };
        EulerClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent_and_returns_body() {
        let (base_url, server) = serve_once("200 OK", "<h2>Problem 7</h2>").await;
        let client = client_for(base_url);

        let body = client.fetch(ProblemId::new(7).unwrap()).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(body, "<h2>Problem 7</h2>");
        assert!(request.starts_with("GET /problem=7 HTTP/1.1\r\n"));
        let user_agent = request
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("user-agent").then(|| value.trim().to_string())
            })
            .unwrap();
        assert_eq!(user_agent, crate::config::DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status() {
        let (base_url, server) = serve_once("503 Service Unavailable", "busy").await;
        let client = client_for(base_url);

        let err = client.fetch(ProblemId::new(7).unwrap()).await.unwrap_err();
        server.await.unwrap();

        match err {
            AppError::Network(NetworkError::BadStatus { url, status }) => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/problem=7"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_problem_url_uses_template() {
        let config = Config {
            base_url: "https://projecteuler.net/".to_string(),
            ..Config::default()
        };
        let client = EulerClient::new(&config).unwrap();

        assert_eq!(
            client.problem_url(ProblemId::new(1).unwrap()),
            "https://projecteuler.net/problem=1"
        );
        assert_eq!(
            client.problem_url(ProblemId::new(42).unwrap()),
            "https://projecteuler.net/problem=42"
        );
    }

    /// 测试真实网络抓取
    #[tokio::test]
    #[ignore]
    async fn test_fetch_live_problem() {
        let _ = tracing_subscriber::fmt::try_init();

        let client = EulerClient::new(&Config::default()).unwrap();
        let html = client.fetch(ProblemId::new(1).unwrap()).await.unwrap();

        assert!(html.contains("<h2>"));
    }
}
