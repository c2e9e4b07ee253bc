pub mod home_handlers;
pub mod talk_handlers;
