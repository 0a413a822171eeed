#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("malformed reply: {reason}")]
    MalformedReply { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
