pub mod request;
pub mod response;

pub use request::{AuthRequest, EditUserRequest};
pub use response::UserResponse;
