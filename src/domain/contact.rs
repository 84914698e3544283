use std::fmt;
use std::sync::LazyLock;

use super::*;
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

/// How strictly phone numbers are checked on insertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PhonePolicy {
    /// Any non-blank phone number
    #[default]
    Lenient,
    /// Exactly 10 digits beginning with 0
    Strict,
}

const STRICT_PHONE_REASON: &str = "must contain exactly 10 digits and begin with 0";

// ASCII digits only; `\d` would also match other Unicode digits
static STRICT_PHONE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{9}$"));

pub struct ValidationReq;

impl ValidationReq {
    pub fn first_name_req() -> String {
        "First name is required and must not be blank".to_string()
    }

    pub fn last_name_req() -> String {
        "Last name is required and must not be blank".to_string()
    }

    pub fn phone_req(policy: PhonePolicy) -> String {
        match policy {
            PhonePolicy::Lenient => "Phone number is required and must not be blank".to_string(),
            PhonePolicy::Strict => format!("Phone number {STRICT_PHONE_REASON}"),
        }
    }

    pub fn for_field(field: ContactField, policy: PhonePolicy) -> String {
        match field {
            ContactField::FirstName => Self::first_name_req(),
            ContactField::LastName => Self::last_name_req(),
            ContactField::PhoneNumber => Self::phone_req(policy),
        }
    }
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::PhoneNumber,
    ];
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactField::FirstName => "first name",
            ContactField::LastName => "last name",
            ContactField::PhoneNumber => "phone number",
        };
        f.write_str(name)
    }
}

impl PhonePolicy {
    pub fn accepts(&self, phone: &str) -> Result<bool, AppError> {
        match self {
            PhonePolicy::Lenient => Ok(true),
            PhonePolicy::Strict => {
                let re = STRICT_PHONE.as_ref().map_err(|e| AppError::Regex(e.clone()))?;
                Ok(re.is_match(phone))
            }
        }
    }
}

impl Contact {
    /// Builds a contact from possibly absent parts.
    ///
    /// Fields are checked in order (first name, last name, phone number) and the
    /// first absent or blank one is reported. Values are stored as given.
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
        policy: PhonePolicy,
    ) -> Result<Self, AppError> {
        let first_name = required(ContactField::FirstName, first_name)?;
        let last_name = required(ContactField::LastName, last_name)?;
        let phone_number = required(ContactField::PhoneNumber, phone_number)?;

        if !policy.accepts(&phone_number)? {
            return Err(AppError::InvalidArgument {
                field: ContactField::PhoneNumber,
                reason: STRICT_PHONE_REASON.to_string(),
            });
        }

        Ok(Contact {
            first_name,
            last_name,
            phone_number,
        })
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.phone_number
        )
    }
}

fn required(field: ContactField, value: Option<&str>) -> Result<String, AppError> {
    match value {
        None => Err(AppError::InvalidArgument {
            field,
            reason: "is required".to_string(),
        }),
        Some(value) if value.trim().is_empty() => Err(AppError::InvalidArgument {
            field,
            reason: "must not be blank".to_string(),
        }),
        Some(value) => Ok(value.to_string()),
    }
}
