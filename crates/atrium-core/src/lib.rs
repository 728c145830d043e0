pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::invitation_state::InvitationState;
pub use models::invitation_status::InvitationStatus;
pub use models::user::User;
pub use models::user_attributes::UserAttributes;
pub use models::user_images::UserImages;
pub use models::user_link::UserLink;
