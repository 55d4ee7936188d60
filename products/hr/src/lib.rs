//! HR module: employee records exposed under `/api/employees`.

mod model;
pub mod routes;
pub mod store;

pub use model::{Employee, NewEmployee};
pub use routes::{COLLECTION_PATH, router};
pub use store::{EmployeeStore, SaveOutcome};
