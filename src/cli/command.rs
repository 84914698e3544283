use clap::Parser;
use log::LevelFilter;

use crate::prelude::{AppError, PhonePolicy};

#[derive(Parser, Debug)]
#[command(
    name = "contact-manager",
    version,
    about = "In-memory contact manager session"
)]
pub struct Cli {
    /// Phone number policy (lenient, strict)
    #[arg(long, env = "CONTACTS_PHONE_POLICY", value_enum, default_value_t = PhonePolicy::Lenient)]
    pub phone_policy: PhonePolicy,

    /// Log level used when RUST_LOG is not set (off, error, warn, info, debug, trace)
    #[arg(
        long,
        env = "CONTACTS_LOG_LEVEL",
        value_parser = clap::value_parser!(LevelFilter),
        default_value_t = LevelFilter::Warn
    )]
    pub log_level: LevelFilter,
}

/// Menu entries of an interactive session
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    AddContact,
    ListContacts,
    ListContactsJson,
    Exit,
}

impl Command {
    pub fn parse(action: &str) -> Result<Self, AppError> {
        match action {
            "1" => Ok(Command::AddContact),
            "2" => Ok(Command::ListContacts),
            "3" => Ok(Command::ListContactsJson),
            "4" => Ok(Command::Exit),
            _ => Err(AppError::ParseCommand(action.to_string())),
        }
    }
}
