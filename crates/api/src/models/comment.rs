//! Comment domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use brewbox_core::{CommentId, EntityState, IdeaId, UserId};

/// A worker-authored comment on an idea.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    /// Unique comment ID.
    pub id: CommentId,
    /// The idea this comment belongs to.
    pub idea_id: IdeaId,
    /// The authoring worker.
    pub creator_id: UserId,
    /// Comment text.
    pub text: String,
    /// Display name chosen by the author.
    pub author_name: String,
    /// Lifecycle state.
    pub state: EntityState,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}
