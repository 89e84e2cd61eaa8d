pub mod help;
pub mod subscribe;
