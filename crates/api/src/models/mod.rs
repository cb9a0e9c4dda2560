//! Domain types for the ideas platform.
//!
//! Repositories convert raw rows into these validated types; handlers shape
//! them into response DTOs.

pub mod category;
pub mod coffee_shop;
pub mod comment;
pub mod idea;
pub mod reward_type;
pub mod user;
pub mod worker_relation;

pub use category::Category;
pub use coffee_shop::{CoffeeShop, CoffeeShopSummary};
pub use comment::Comment;
pub use idea::{Idea, IdeaStatus};
pub use reward_type::RewardType;
pub use user::{User, UserSummary};
pub use worker_relation::{WorkerRelation, WorkerRelationDetails};
