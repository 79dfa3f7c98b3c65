pub mod appointments;
pub mod passwords;
pub mod responder;
pub mod validation;
