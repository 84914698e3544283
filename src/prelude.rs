pub use crate::cli::{command, run_app, run_session};
pub use crate::domain::{
    contact::{self, Contact, ContactField, PhonePolicy, ValidationReq},
    manager::ContactManager,
};
pub use crate::errors::AppError;
