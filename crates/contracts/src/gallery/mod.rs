pub mod dto;
pub mod error;

pub use dto::{parse_image_list, ImageRecord, ListQuery};
pub use error::{FetchError, FetchResult, FETCH_FAILURE_MESSAGE};
