use serde::{Deserialize, Serialize};

/// Storage model for a row of the `doctors` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Identifier assigned by the database on insert
    pub id: i64,

    /// Full name
    pub name: String,

    /// Medical specialty
    pub specialty: String,

    /// Years of experience
    pub experience: i32,
}

/// Column values for inserting a doctor; the id is generated by the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub experience: i32,
}

impl NewDoctor {
    /// Attach the generated id
    pub fn into_doctor(self, id: i64) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialty: self.specialty,
            experience: self.experience,
        }
    }
}
