//! Key-value backed contact repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use postflow_core::DomainError;
use postflow_core::domain::{Contact, NewContact, seed};
use postflow_core::ports::{ContactRepository, KeyValueStore};

use super::collection::JsonCollection;

/// Key holding the JSON array of contacts.
pub const CONTACTS_KEY: &str = "social_contacts";

/// Contact repository over a key-value store.
///
/// The demo contacts are written on first access when nothing is stored yet.
/// A stored empty list stays empty.
pub struct KvContactRepository {
    contacts: JsonCollection<Contact>,
    write_lock: Mutex<()>,
}

impl KvContactRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            contacts: JsonCollection::new(store, CONTACTS_KEY),
            write_lock: Mutex::new(()),
        }
    }

    async fn load_or_seed(&self) -> Result<Vec<Contact>, DomainError> {
        if let Some(contacts) = self.contacts.load_existing().await? {
            return Ok(contacts);
        }

        let contacts = seed::seed_contacts();
        self.contacts.save(&contacts).await?;
        tracing::info!(contacts = contacts.len(), "Seeded contacts");
        Ok(contacts)
    }
}

#[async_trait]
impl ContactRepository for KvContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        let _guard = self.write_lock.lock().await;
        self.load_or_seed().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Contact>, DomainError> {
        let contacts = self.list().await?;
        Ok(contacts.into_iter().find(|contact| contact.id == id))
    }

    async fn add_contact(&self, contact: NewContact) -> Result<Contact, DomainError> {
        if contact.name.trim().is_empty() {
            return Err(DomainError::Validation("contact name is required".into()));
        }

        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load_or_seed().await?;

        let contact = Contact::new(format!("contact-{}", uuid::Uuid::new_v4()), contact);
        contacts.push(contact.clone());
        self.contacts.save(&contacts).await?;

        tracing::info!(contact_id = %contact.id, "Contact added");
        Ok(contact)
    }

    async fn delete_contact(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load_or_seed().await?;

        let before = contacts.len();
        contacts.retain(|contact| contact.id != id);
        if contacts.len() == before {
            return Err(DomainError::contact_not_found(id));
        }

        self.contacts.save(&contacts).await?;
        tracing::info!(contact_id = %id, "Contact deleted");
        Ok(())
    }
}
