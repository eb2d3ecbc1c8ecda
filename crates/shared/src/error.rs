/// Failure reported by a message delivery backend.
///
/// The controller never shows these to the user; they are logged and replaced
/// by a generic banner.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("delivery aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(String),

    #[error("{0}")]
    Delivery(#[from] DeliveryError),

    #[error("unknown field `{0}`")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, Error>;
