pub mod registration_dto;

pub use registration_dto::{RegisterUserDto, RegistrationAckDto};
