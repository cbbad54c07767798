use serde::Serialize;

/// `{"success": true}` acknowledgement for token issuance and logout
#[derive(Debug, Serialize)]
pub struct TokenAck {
    pub success: bool,
}

impl TokenAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
