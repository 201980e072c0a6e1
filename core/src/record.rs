use serde::{Deserialize, Serialize};

/// One row of the collaboration dataset: an acting credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    pub actor: String,
    pub title: String,
    pub year: u16,
}

impl CastRecord {
    pub fn new(actor: impl Into<String>, title: impl Into<String>, year: u16) -> Self {
        Self {
            actor: actor.into(),
            title: title.into(),
            year,
        }
    }
}
