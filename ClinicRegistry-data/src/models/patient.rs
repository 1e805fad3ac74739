use serde::{Deserialize, Serialize};

/// Storage model for a row of the `patients` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Identifier assigned by the database on insert
    pub id: i64,

    /// Full name
    pub name: String,

    /// Age in years
    pub age: i32,

    /// Free-form health status
    pub health: String,
}

/// Column values for inserting a patient; the id is generated by the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub health: String,
}

impl NewPatient {
    /// Attach the generated id
    pub fn into_patient(self, id: i64) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            health: self.health,
        }
    }
}
