pub mod interaction;
pub mod register;
