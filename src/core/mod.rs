pub mod echo;
pub mod error;
pub mod input;
pub mod services;
pub mod traits;
