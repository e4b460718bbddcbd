use crate::error::PostClientError;
use crate::models::{
    ErrorResponse, MessageEnvelope, Post, PostEnvelope, PostMessageEnvelope, PostPayload,
    PostsEnvelope,
};
use reqwest::{Client, StatusCode};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PostClient {
    client: Client,
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, PostClientError> {
        let url = self.url("/posts");

        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<PostsEnvelope>().await?.posts),
            status => Err(unexpected_status(status, response).await),
        }
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, PostClientError> {
        let url = self.url(&format!("/posts/{}", id));

        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<PostEnvelope>().await?.post),
            StatusCode::NOT_FOUND => Err(PostClientError::NotFound),
            status => Err(unexpected_status(status, response).await),
        }
    }

    pub async fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Post, PostClientError> {
        let url = self.url("/posts");
        let payload = PostPayload {
            title: title.into(),
            content: content.into(),
        };

        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(&payload).send().await?;

        match response.status() {
            StatusCode::CREATED => Ok(response.json::<PostMessageEnvelope>().await?.post),
            StatusCode::BAD_REQUEST => Err(invalid_request(response).await),
            status => Err(unexpected_status(status, response).await),
        }
    }

    pub async fn update_post(
        &self,
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Post, PostClientError> {
        let url = self.url(&format!("/posts/{}", id));
        let payload = PostPayload {
            title: title.into(),
            content: content.into(),
        };

        tracing::debug!("PUT {}", url);
        let response = self.client.put(&url).json(&payload).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<PostMessageEnvelope>().await?.post),
            StatusCode::NOT_FOUND => Err(PostClientError::NotFound),
            StatusCode::BAD_REQUEST => Err(invalid_request(response).await),
            status => Err(unexpected_status(status, response).await),
        }
    }

    /// Deletes a post and returns the server's confirmation message.
    pub async fn delete_post(&self, id: i64) -> Result<String, PostClientError> {
        let url = self.url(&format!("/posts/{}", id));

        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<MessageEnvelope>().await?.message),
            StatusCode::NOT_FOUND => Err(PostClientError::NotFound),
            status => Err(unexpected_status(status, response).await),
        }
    }
}

async fn invalid_request(response: reqwest::Response) -> PostClientError {
    match response.json::<ErrorResponse>().await {
        Ok(body) => PostClientError::InvalidRequest(body.error),
        Err(err) => PostClientError::Http(err),
    }
}

async fn unexpected_status(status: StatusCode, response: reqwest::Response) -> PostClientError {
    let error_text = response.text().await.unwrap_or_default();
    PostClientError::Transport(format!("HTTP {}: {}", status, error_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_and_path() {
        let client = PostClient::new("http://localhost:5000/");

        assert_eq!(client.url("/posts"), "http://localhost:5000/posts");
        assert_eq!(client.url("posts/1"), "http://localhost:5000/posts/1");
    }
}
