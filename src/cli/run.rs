use crate::cli::io::{display_contact, get_input, prompt, show_menu};
use crate::prelude::{
    AppError, ContactField, ContactManager, PhonePolicy, ValidationReq,
    command::{Cli, Command},
};
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    info!("Starting session with {:?} phone policy", cli.phone_policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let manager = run_session(
        cli.phone_policy,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    info!("Session ended with {} contact(s)", manager.len());
    Ok(())
}

/// Drives one manager from `input` until Exit or end of input, and hands it back.
///
/// Menu, prompts and listings go to `out`; rejections go to `err`.
pub fn run_session<R, W, E>(
    policy: PhonePolicy,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<ContactManager, AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut manager = ContactManager::with_policy(policy);

    writeln!(out, "\n\n--- CONTACT MANAGER ---\n")?;

    'outerloop: loop {
        show_menu(out)?;

        let Some(action) = get_input(input)? else {
            break 'outerloop;
        };

        let command = match Command::parse(&action) {
            Ok(command) => command,
            Err(e) => {
                // User entered invalid command
                writeln!(err, "{e}")?;
                continue 'outerloop;
            }
        };

        match command {
            Command::AddContact => {
                let mut parts: Vec<String> = Vec::with_capacity(ContactField::ALL.len());

                for field in ContactField::ALL {
                    prompt(out, &format!("Enter {field}"))?;

                    let Some(value) = get_input(input)? else {
                        break 'outerloop;
                    };

                    if value == "*" {
                        continue 'outerloop;
                    }
                    parts.push(value);
                }

                let part = |i: usize| parts.get(i).map(String::as_str);

                match manager.add_contact(part(0), part(1), part(2)) {
                    Ok(_) => writeln!(out, "Contact added successfully")?,
                    Err(e) => {
                        writeln!(err, "{e}")?;
                        if let Some(field) = e.field() {
                            writeln!(err, "{}", ValidationReq::for_field(field, policy))?;
                        }
                    }
                }
            }
            Command::ListContacts => {
                if manager.is_empty() {
                    writeln!(out, "No contact yet")?;
                    continue 'outerloop;
                }

                for (i, contact) in manager.get_all_contacts().iter().enumerate() {
                    writeln!(out, "{}", display_contact(i + 1, contact))?;
                }
            }
            Command::ListContactsJson => {
                let json = serde_json::to_string_pretty(manager.get_all_contacts())?;
                writeln!(out, "{json}")?;
            }
            Command::Exit => {
                writeln!(out, "\nBye!")?;
                break 'outerloop;
            }
        }
    }

    out.flush()?;
    err.flush()?;
    Ok(manager)
}
