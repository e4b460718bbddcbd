use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, title: String, content: String) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError>;
    async fn update(&self, id: i64, title: String, content: String) -> Result<Post, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    async fn list(&self) -> Result<Vec<Post>, DomainError>;
}

struct Store {
    posts: Vec<Post>,
    next_id: i64,
}

/// In-memory post store: an insertion-ordered `Vec` behind an async `RwLock`.
/// Data is lost on process restart.
///
/// `next_id` only ever grows, so an id freed by a delete is never handed out
/// again.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, title: String, content: String) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;

        let now = Utc::now();
        let post = Post {
            id: store.next_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        };
        store.next_id += 1;
        store.posts.push(post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let store = self.store.read().await;

        store
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(DomainError::PostNotFound(id))
    }

    async fn update(&self, id: i64, title: String, content: String) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;

        let post = store
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(DomainError::PostNotFound(id))?;

        post.title = title;
        post.content = content;
        post.updated_at = Utc::now();

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut store = self.store.write().await;

        let position = store
            .posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(DomainError::PostNotFound(id))?;
        store.posts.remove(position);

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let store = self.store.read().await;
        Ok(store.posts.clone())
    }
}
