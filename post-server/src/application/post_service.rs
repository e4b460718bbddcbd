use crate::data::post_repository::PostRepository;
use crate::domain::post::{PostPayload, PostResponse};
use crate::domain::DomainError;
use std::sync::Arc;

pub struct PostService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl PostService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, DomainError> {
        let posts = self.post_repo.list().await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn create_post(
        &self,
        payload: Option<PostPayload>,
    ) -> Result<PostResponse, DomainError> {
        let (title, content) = validate_payload(payload)?;

        let post = self.post_repo.create(title, content).await?;

        tracing::info!("Post created: id={}", post.id);

        Ok(PostResponse::from(post))
    }

    pub async fn get_post(&self, id: i64) -> Result<PostResponse, DomainError> {
        let post = self.post_repo.find_by_id(id).await?;

        Ok(PostResponse::from(post))
    }

    pub async fn update_post(
        &self,
        id: i64,
        payload: Option<PostPayload>,
    ) -> Result<PostResponse, DomainError> {
        // Unknown id wins over a bad body
        self.post_repo.find_by_id(id).await?;

        let (title, content) = validate_payload(payload)?;

        let post = self.post_repo.update(id, title, content).await?;

        tracing::info!("Post updated: id={}", id);

        Ok(PostResponse::from(post))
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        self.post_repo.delete(id).await?;

        tracing::info!("Post deleted: id={}", id);

        Ok(())
    }
}

// Валидация тела запроса: сначала наличие данных, затем title, затем content.
fn validate_payload(payload: Option<PostPayload>) -> Result<(String, String), DomainError> {
    let payload = payload.ok_or(DomainError::InvalidPayload)?;

    let title = payload
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .ok_or(DomainError::MissingField("Title"))?
        .to_string();

    let content = payload
        .content
        .as_deref()
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .ok_or(DomainError::MissingField("Content"))?
        .to_string();

    Ok((title, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::post_repository::InMemoryPostRepository;

    fn service() -> PostService {
        PostService::new(Arc::new(InMemoryPostRepository::new()))
    }

    fn payload(title: &str, content: &str) -> Option<PostPayload> {
        Some(PostPayload {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
        })
    }

    #[tokio::test]
    async fn create_trims_title_and_content() {
        let service = service();

        let post = service
            .create_post(payload("  Hi  ", "\tWorld\n"))
            .await
            .unwrap();

        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, "World");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[tokio::test]
    async fn create_without_body_is_rejected() {
        let err = service().create_post(None).await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidPayload));
    }

    #[tokio::test]
    async fn whitespace_title_is_rejected_before_content() {
        let err = service()
            .create_post(Some(PostPayload {
                title: Some("   ".into()),
                content: None,
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingField("Title")));
        assert_eq!(err.to_string(), "Title is required");
    }

    #[tokio::test]
    async fn missing_content_is_rejected() {
        let err = service()
            .create_post(Some(PostPayload {
                title: Some("Hi".into()),
                content: None,
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingField("Content")));
        assert_eq!(err.to_string(), "Content is required");
    }

    #[tokio::test]
    async fn update_of_unknown_id_beats_bad_payload() {
        let err = service().update_post(99, None).await.unwrap_err();

        assert!(matches!(err, DomainError::PostNotFound(99)));
        assert_eq!(err.to_string(), "Post with id 99 not found");
    }

    #[tokio::test]
    async fn update_changes_only_mutable_fields() {
        let service = service();

        let created = service.create_post(payload("Hi", "World")).await.unwrap();
        let updated = service
            .update_post(created.id, payload("New", "X"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "X");
        assert!(updated.updated_at >= created.updated_at);
    }
}
