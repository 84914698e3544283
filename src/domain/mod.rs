pub mod contact;
pub mod manager;

use crate::errors::AppError;
