//! Foodtype draft validation

use super::validation::required;
use super::ValidationError;

const MAX_NAME_LEN: usize = 64;

/// A foodtype ("Sushi", "Seafood") that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodtype {
    name: String,
}

impl NewFoodtype {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("foodtype name", name, MAX_NAME_LEN)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
