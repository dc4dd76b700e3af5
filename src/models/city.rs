use serde::{Deserialize, Serialize};

/// Cities are identified by name only; their parent codes are never echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
}
