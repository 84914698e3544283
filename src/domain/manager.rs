use super::*;

use super::contact::{Contact, PhonePolicy};
use log::{debug, warn};

/// Owns an insertion-ordered list of contacts for one session.
#[derive(Debug, Default)]
pub struct ContactManager {
    contacts: Vec<Contact>,
    policy: PhonePolicy,
}

impl ContactManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PhonePolicy) -> Self {
        Self {
            contacts: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> PhonePolicy {
        self.policy
    }

    /// Validates the parts and appends the new contact.
    ///
    /// Nothing is stored when validation fails.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Result<&Contact, AppError> {
        let contact = Contact::new(first_name, last_name, phone_number, self.policy)
            .inspect_err(|e| warn!("Rejected contact: {e}"))?;

        debug!("Adding contact {contact}");

        let idx = self.contacts.len();
        self.contacts.push(contact);
        Ok(&self.contacts[idx])
    }

    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
