mod api;
mod auth;
mod card;
mod user;

pub use self::api::ApiResponse;
pub use self::auth::TokenResponse;
pub use self::card::{CardResponse, DashboardSummary};
pub use self::user::UserResponse;
