/// Result type for position based list operations
pub type Result<T> = std::result::Result<T, ListError>;

/// Ways a [`Position`](crate::Position) can be rejected by a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("position was issued by a different list")]
    ForeignPosition,

    #[error("position refers to an element that has been removed")]
    StalePosition,

    #[error("end position does not refer to an element")]
    EndPosition,

    #[error("before-begin position holds no value")]
    BeforeBeginDeref,

    #[error("no element follows the given position")]
    NothingToErase,
}
