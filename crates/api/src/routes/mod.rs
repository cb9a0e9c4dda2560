//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                        - Liveness check
//! GET  /health/ready                                  - Readiness check
//!
//! # Coffee shops
//! POST /coffee-shops                                  - Create shop
//! GET  /coffee-shops/{shop_id}                        - Shop detail
//!
//! # Worker roster
//! POST   /coffee-shops/{shop_id}/workers              - Add worker
//! GET    /coffee-shops/{shop_id}/workers              - List workers
//! DELETE /worker-relations/{relation_id}              - Remove worker
//! GET    /workers/{worker_id}/coffee-shops            - Worker's own shops
//!
//! # Categories
//! POST   /coffee-shops/{shop_id}/categories           - Create category
//! GET    /coffee-shops/{shop_id}/categories           - List categories
//! GET    /coffee-shops/{shop_id}/categories/{id}      - Category detail
//! PUT    /coffee-shops/{shop_id}/categories/{id}      - Update category
//! DELETE /coffee-shops/{shop_id}/categories/{id}      - Delete category
//!
//! # Reward types
//! POST   /coffee-shops/{shop_id}/reward-types         - Create reward type
//! GET    /coffee-shops/{shop_id}/reward-types         - List reward types
//! GET    /coffee-shops/{shop_id}/reward-types/{id}    - Reward type detail
//! PUT    /coffee-shops/{shop_id}/reward-types/{id}    - Update reward type
//! DELETE /coffee-shops/{shop_id}/reward-types/{id}    - Delete reward type
//!
//! # Ideas
//! POST   /coffee-shops/{shop_id}/ideas                - Submit idea
//! GET    /coffee-shops/{shop_id}/ideas                - List ideas
//! GET    /ideas/{idea_id}                             - Idea detail
//! PATCH  /ideas/{idea_id}/status                      - Triage idea
//! DELETE /ideas/{idea_id}                             - Delete idea
//!
//! # Comments (workers only)
//! POST   /ideas/{idea_id}/comments                    - Post comment
//! GET    /ideas/{idea_id}/comments                    - List comments
//! GET    /ideas/{idea_id}/comments/{comment_id}       - Comment detail
//! DELETE /ideas/{idea_id}/comments/{comment_id}       - Delete comment
//!
//! # Likes
//! PUT    /ideas/{idea_id}/like                        - Like idea
//! DELETE /ideas/{idea_id}/like                        - Remove like
//! GET    /ideas/{idea_id}/likes                       - Like summary
//! ```

pub mod categories;
pub mod coffee_shops;
pub mod comments;
pub mod ideas;
pub mod likes;
pub mod reward_types;
pub mod workers;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use serde::Serialize;

use brewbox_core::PageParams;

use crate::state::AppState;

/// A page of items plus the total count across all pages.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total visible items.
    pub total: i64,
    /// Zero-based page index after clamping.
    pub page: i64,
    /// Page size after clamping.
    pub limit: i64,
}

impl<T> PagedResponse<T> {
    /// Assemble a page response from query results and the applied params.
    #[must_use]
    pub fn new(items: Vec<T>, total: i64, page: PageParams) -> Self {
        Self {
            items,
            total,
            page: page.page(),
            limit: page.limit(),
        }
    }
}

/// Create the application router (everything except health endpoints).
pub fn routes() -> Router<AppState> {
    Router::new()
        // Coffee shops
        .route("/coffee-shops", post(coffee_shops::create))
        .route("/coffee-shops/{shop_id}", get(coffee_shops::show))
        // Worker roster
        .route(
            "/coffee-shops/{shop_id}/workers",
            post(workers::add).get(workers::list),
        )
        .route(
            "/worker-relations/{relation_id}",
            delete(workers::remove),
        )
        .route(
            "/workers/{worker_id}/coffee-shops",
            get(workers::list_shops),
        )
        // Categories
        .route(
            "/coffee-shops/{shop_id}/categories",
            post(categories::create).get(categories::list),
        )
        .route(
            "/coffee-shops/{shop_id}/categories/{category_id}",
            get(categories::show)
                .put(categories::update)
                .delete(categories::remove),
        )
        // Reward types
        .route(
            "/coffee-shops/{shop_id}/reward-types",
            post(reward_types::create).get(reward_types::list),
        )
        .route(
            "/coffee-shops/{shop_id}/reward-types/{reward_type_id}",
            get(reward_types::show)
                .put(reward_types::update)
                .delete(reward_types::remove),
        )
        // Ideas
        .route(
            "/coffee-shops/{shop_id}/ideas",
            post(ideas::create).get(ideas::list),
        )
        .route("/ideas/{idea_id}", get(ideas::show).delete(ideas::remove))
        .route("/ideas/{idea_id}/status", patch(ideas::update_status))
        // Comments
        .route(
            "/ideas/{idea_id}/comments",
            post(comments::create).get(comments::list),
        )
        .route(
            "/ideas/{idea_id}/comments/{comment_id}",
            get(comments::show).delete(comments::remove),
        )
        // Likes
        .route(
            "/ideas/{idea_id}/like",
            put(likes::like).delete(likes::unlike),
        )
        .route("/ideas/{idea_id}/likes", get(likes::summary))
}
