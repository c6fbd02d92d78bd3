//! HTTP 传输层
//!
//! 基于 `gloo-net` 的 `HttpClient` 实现。任何响应（无论状态码）都作为
//! `Ok` 返回，只有请求无法发出时才报错。

use gloo_net::http::Request;
use helpdesk::error::{HelpdeskError, HelpdeskResult};
use helpdesk::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> HelpdeskResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Patch => Request::patch(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| HelpdeskError::network(e.to_string()).in_op("http.build"))?;

        let response = request.send().await.map_err(|e| {
            HelpdeskError::network(e.to_string()).in_op_with("http.send", req.url.clone())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            HelpdeskError::network(e.to_string()).in_op_with("http.read_body", req.url.clone())
        })?;

        Ok(HttpResponse { status, body })
    }
}
