//! Response types shared by the page and API routes

use serde::Serialize;

/// Plain message body, e.g. `{"message": "New record added successfully"}`
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
