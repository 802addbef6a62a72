//! Operator input types with validation at construction
//!
//! Invalid input returns ValidationError, not panic. Rows read from the
//! database live with their repositories in [`crate::db::repos`].

pub mod validation;
pub mod status;
pub mod post;
pub mod prompt;

pub use validation::ValidationError;
pub use status::PostStatus;
pub use post::{parse_hashtags, PostEdit, PostPatch, TagsInput};
pub use prompt::AgentPrompt;
