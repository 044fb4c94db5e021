use serde::Serialize;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ResultBody {
    pub result: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}
