pub mod registration_service;
pub mod signup_service;
