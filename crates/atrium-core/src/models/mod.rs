pub mod invitation_state;
pub mod invitation_status;
pub mod user;
pub mod user_attributes;
pub mod user_images;
pub mod user_link;
