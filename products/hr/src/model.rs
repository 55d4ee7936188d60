use entity::employees;
use serde::{Deserialize, Serialize};

/// Wire shape of an employee record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    /// Assigned by the store; ignored on create.
    #[serde(default)]
    pub id: i32,
    pub full_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Attributes of a record that does not have an ID yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEmployee {
    pub full_name: String,
    pub role: Option<String>,
    pub email: Option<String>,
}

impl From<Employee> for NewEmployee {
    fn from(value: Employee) -> Self {
        Self {
            full_name: value.full_name,
            role: value.role,
            email: value.email,
        }
    }
}

impl From<employees::Model> for Employee {
    fn from(value: employees::Model) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
            role: value.role,
            email: value.email,
        }
    }
}
