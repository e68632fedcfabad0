/// Alias for `Result<T, MapError>`.
pub type MapResult<T> = Result<T, MapError>;

/// Errors raised while building, mutating, or rendering a deck plan.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The referenced room name is absent from the graph.
    #[error("room not found: '{0}'")]
    RoomNotFound(String),

    /// The room exists but holds no grid coordinate yet.
    #[error("room not placed on the map: '{0}'")]
    RoomNotPlaced(String),

    /// A room with the same name already exists.
    #[error("room already exists: '{0}'")]
    DuplicateRoom(String),

    /// Room names must be non-empty.
    #[error("room name is empty")]
    EmptyRoomName,

    /// Not one of north, east, south, west.
    #[error("unknown direction: '{0}'")]
    UnknownDirection(String),

    /// A connection entry does not have the `<room>.<direction>.<room>` shape.
    #[error("malformed connection '{0}': expected <room>.<direction>.<room>")]
    MalformedConnection(String),

    /// The ship plan document could not be parsed.
    #[error("invalid ship plan: {0}")]
    Plan(#[from] serde_json::Error),
}
