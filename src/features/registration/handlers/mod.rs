pub mod registration_handler;

pub use registration_handler::{__path_register_user, register_user};
