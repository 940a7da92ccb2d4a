/// Canonical identifier for water and steam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;
