pub mod extract;
pub mod response;
pub mod validated_json;

pub use extract::{ApiPath, ApiQuery};
pub use response::{ApiResponse, ApiResult};
pub use validated_json::ValidJson;
