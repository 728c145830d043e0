mod invitation_state;
mod user_attributes;
mod user_link;
