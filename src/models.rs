use serde::{Deserialize, Serialize};

/// Fixed payload returned by the GET test endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct TestResponse {
    #[schema(example = "test")]
    pub test: String,
}

impl TestResponse {
    pub fn fixed() -> Self {
        TestResponse {
            test: "test".to_string(),
        }
    }
}
