//! Shared type definitions.

pub mod id;
pub mod page;
pub mod role;
pub mod state;

pub use id::*;
pub use page::{PageParams, PageQuery};
pub use role::{Role, RoleParseError};
pub use state::EntityState;
