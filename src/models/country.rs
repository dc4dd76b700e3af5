use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

/// A country with its full subdivision tree, as served by `/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryHierarchy {
    pub code: String,
    pub name: String,
    pub states: Vec<StateHierarchy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHierarchy {
    pub code: String,
    pub name: String,
    pub cities: Vec<String>,
}
