//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod get_me;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use get_me::GetMeUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::{TokenClaims, TokenService};
