pub mod registration;
pub mod users;
