use serde::{Deserialize, Serialize};

// ==================== Модели постов ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
}

// ==================== Конверты ответов ====================

#[derive(Debug, Clone, Deserialize)]
pub struct PostsEnvelope {
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostEnvelope {
    pub post: Post,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageEnvelope {
    pub message: String,
    pub post: Post,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageEnvelope {
    pub message: String,
}

// ==================== Общие ошибки ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
