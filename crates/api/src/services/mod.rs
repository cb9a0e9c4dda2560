//! Usecase layer.
//!
//! Services orchestrate repositories and the access-control resolver; they
//! own the business rules and return [`crate::error::AppError`] so handlers
//! stay thin.

pub mod access_control;
pub mod categories;
pub mod coffee_shops;
pub mod comments;
pub mod ideas;
pub mod likes;
pub mod reward_types;
pub mod roster;

pub use access_control::{AccessControl, AccessDecision, decide};
pub use categories::CategoryService;
pub use coffee_shops::CoffeeShopService;
pub use comments::CommentService;
pub use ideas::IdeaService;
pub use likes::{LikeService, LikeSummary};
pub use reward_types::RewardTypeService;
pub use roster::RosterService;
