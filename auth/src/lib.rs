mod error;
pub mod callback;
pub mod password;
pub mod session;

pub use error::AuthError;
