use crate::domain::customer::{Customer, CustomerField};
use crate::domain::navigation::NavPayload;
use crate::services::customer_store::CustomerStore;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    /// Reached without a record; only "back to list" is offered.
    NoData,
    Editing { original: Customer, draft: Customer },
}

/// Edits one customer as a local draft and writes it back on save.
#[derive(Clone)]
pub struct ProfileController {
    store: CustomerStore,
    state: ProfileState,
}

impl ProfileController {
    pub fn from_payload(store: CustomerStore, payload: Option<NavPayload>) -> Self {
        let state = match payload {
            Some(NavPayload::Edit(customer)) => ProfileState::Editing {
                draft: customer.clone(),
                original: customer,
            },
            _ => {
                debug!("Profile opened without a customer");
                ProfileState::NoData
            }
        };
        Self { store, state }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn has_data(&self) -> bool {
        matches!(self.state, ProfileState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&Customer> {
        match &self.state {
            ProfileState::Editing { draft, .. } => Some(draft),
            ProfileState::NoData => None,
        }
    }

    /// Updates the draft only.
    pub fn edit(&mut self, field: CustomerField, value: impl Into<String>) {
        if let ProfileState::Editing { draft, .. } = &mut self.state {
            draft.set_field(field, value);
        }
    }

    pub fn is_dirty(&self) -> bool {
        match &self.state {
            ProfileState::Editing { original, draft } => original != draft,
            ProfileState::NoData => false,
        }
    }

    /// Writes the draft into the shared collection and returns the payload
    /// that tells the list to skip its fetch.
    pub fn save(&self) -> Option<NavPayload> {
        let ProfileState::Editing { original, draft } = &self.state else {
            return None;
        };
        let applied = self.store.patch_by_id(&original.id, draft.clone());
        info!(id = %original.id, applied, "Saved customer draft");
        Some(NavPayload::Saved)
    }

    /// Drops the draft. Nothing is written and no payload is produced.
    pub fn cancel(&self) -> Option<NavPayload> {
        if self.is_dirty() {
            debug!("Discarding unsaved customer draft");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerId;
    use crate::repository::cache_store::CacheStore;
    use crate::repository::storage::MemoryStorage;
    use std::sync::Arc;

    fn store_with(n: u64) -> CustomerStore {
        let store = CustomerStore::load(CacheStore::new(Arc::new(MemoryStorage::new()), "customers"));
        store.replace_all((1..=n).map(|i| Customer::new(i, format!("First{i}"), "Last")).collect());
        store
    }

    #[test]
    fn test_missing_payload_is_no_data() {
        let profile = ProfileController::from_payload(store_with(1), None);
        assert_eq!(profile.state(), &ProfileState::NoData);
        assert_eq!(profile.save(), None);

        let profile = ProfileController::from_payload(store_with(1), Some(NavPayload::Saved));
        assert!(!profile.has_data());
    }

    #[test]
    fn test_edits_stay_in_draft_until_save() {
        let store = store_with(3);
        let record = store.find(&CustomerId::from(2u64)).unwrap();
        let mut profile = ProfileController::from_payload(store.clone(), Some(NavPayload::Edit(record)));

        profile.edit(CustomerField::Email, "two@example.com");
        assert!(profile.is_dirty());
        assert_eq!(store.find(&CustomerId::from(2u64)).unwrap().email, "");

        assert_eq!(profile.save(), Some(NavPayload::Saved));
        assert_eq!(store.find(&CustomerId::from(2u64)).unwrap().email, "two@example.com");
    }

    #[test]
    fn test_cancel_leaves_store() {
        let store = store_with(2);
        let revision = store.revision();
        let record = store.find(&CustomerId::from(1u64)).unwrap();
        let mut profile = ProfileController::from_payload(store.clone(), Some(NavPayload::Edit(record)));

        profile.edit(CustomerField::FirstName, "Changed");
        assert_eq!(profile.cancel(), None);
        assert_eq!(store.revision(), revision);
        assert_eq!(store.find(&CustomerId::from(1u64)).unwrap().firstname, "First1");
    }

    #[test]
    fn test_save_of_removed_record_is_ignored() {
        let store = store_with(2);
        let record = store.find(&CustomerId::from(1u64)).unwrap();
        let profile = ProfileController::from_payload(store.clone(), Some(NavPayload::Edit(record)));

        store.remove_by_id(&CustomerId::from(1u64));
        assert_eq!(profile.save(), Some(NavPayload::Saved));
        assert_eq!(store.len(), 1);
    }
}
