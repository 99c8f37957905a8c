pub mod request;
pub mod response;

pub use request::{CreateBookmarkRequest, EditBookmarkRequest};
pub use response::BookmarkResponse;
