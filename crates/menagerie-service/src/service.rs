use menagerie_gate::{AccessGate, GateConfig};
use menagerie_store::{CreatureStore, MessageStore};
use menagerie_types::{Creature, CreatureId, Message};

use crate::error::ServiceResult;
use crate::submission::CreatureSubmission;

/// The resource service: one access gate, two stores, and the operations
/// the request-handling layer calls.
///
/// Handlers never touch a store directly; every operation funnels through
/// here, so guarded paths cannot skip the gate. The service is `Sync` and
/// meant to live behind an `Arc` for the life of the process.
pub struct ResourceService {
    gate: AccessGate,
    messages: MessageStore,
    creatures: CreatureStore,
}

impl ResourceService {
    /// Creates a service with empty stores and the given gate configuration.
    pub fn new(gate_config: GateConfig) -> Self {
        Self {
            gate: AccessGate::new(gate_config),
            messages: MessageStore::new(),
            creatures: CreatureStore::new(),
        }
    }

    // ---- Message operations (guarded) ----

    /// All messages in arrival order. Requires an admitted credential.
    pub fn messages(&self, credential: Option<&str>) -> ServiceResult<Vec<Message>> {
        self.gate.authorize(credential)?;
        Ok(self.messages.list())
    }

    /// Validates and appends a message, echoing the stored value. Requires
    /// an admitted credential.
    ///
    /// An absent body counts as empty text and is rejected the same way.
    pub fn post_message(
        &self,
        credential: Option<&str>,
        text: Option<&str>,
    ) -> ServiceResult<Message> {
        self.gate.authorize(credential)?;
        let message = self.messages.append(text.unwrap_or_default())?;
        Ok(message)
    }

    // ---- Creature operations (open) ----

    /// Creates a creature from a raw submission, returning the stored
    /// record with its assigned identifier. Never fails: missing fields
    /// degrade to their empty forms.
    pub fn create_creature(&self, submission: CreatureSubmission) -> Creature {
        self.creatures.create(submission.into_draft())
    }

    /// All creatures in creation order.
    pub fn creatures(&self) -> Vec<Creature> {
        self.creatures.list()
    }

    /// Looks up a single creature.
    pub fn creature(&self, id: CreatureId) -> Option<Creature> {
        self.creatures.get(id)
    }

    /// Renames the creature with the given identifier, returning the
    /// updated record. Unknown identifiers yield
    /// [`ServiceError::NotFound`](crate::ServiceError::NotFound).
    pub fn rename_creature(&self, id: CreatureId, new_name: &str) -> ServiceResult<Creature> {
        let updated = self.creatures.rename(id, new_name)?;
        Ok(updated)
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl std::fmt::Debug for ResourceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("gate", &self.gate)
            .field("messages", &self.messages)
            .field("creatures", &self.creatures)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use menagerie_gate::GateError;

    const KEY: &str = "test-key";

    fn service() -> ResourceService {
        ResourceService::new(GateConfig::with_key(KEY))
    }

    // -----------------------------------------------------------------------
    // Gate enforcement on message operations
    // -----------------------------------------------------------------------

    #[test]
    fn messages_require_a_credential() {
        let svc = service();
        assert_eq!(
            svc.messages(None),
            Err(ServiceError::Unauthorized(GateError::MissingCredential))
        );
    }

    #[test]
    fn messages_reject_a_wrong_credential() {
        let svc = service();
        assert_eq!(
            svc.messages(Some("wrong")),
            Err(ServiceError::Unauthorized(GateError::InvalidCredential))
        );
    }

    #[test]
    fn denied_post_leaves_the_log_untouched() {
        let svc = service();
        let err = svc.post_message(Some("wrong"), Some("smuggled")).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
        assert!(svc.messages(Some(KEY)).unwrap().is_empty());
    }

    #[test]
    fn admitted_credential_reads_and_writes_messages() {
        let svc = service();
        svc.post_message(Some(KEY), Some("hello")).unwrap();
        svc.post_message(Some(KEY), Some("world")).unwrap();

        let listed = svc.messages(Some(KEY)).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].as_str(), "hello");
        assert_eq!(listed[1].as_str(), "world");
    }

    #[test]
    fn permissive_gate_admits_unauthenticated_callers() {
        let svc = ResourceService::new(GateConfig::permissive());
        svc.post_message(None, Some("open door")).unwrap();
        assert_eq!(svc.messages(None).unwrap().len(), 1);
    }

    // -----------------------------------------------------------------------
    // Message validation
    // -----------------------------------------------------------------------

    #[test]
    fn absent_message_body_is_a_validation_error() {
        let svc = service();
        let err = svc.post_message(Some(KEY), None).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.messages(Some(KEY)).unwrap().is_empty());
    }

    #[test]
    fn empty_message_body_is_a_validation_error() {
        let svc = service();
        let err = svc.post_message(Some(KEY), Some("")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    // -----------------------------------------------------------------------
    // Creature operations are open
    // -----------------------------------------------------------------------

    #[test]
    fn creature_operations_need_no_credential() {
        let svc = service();
        let created = svc.create_creature(CreatureSubmission {
            name: Some("Drax".to_string()),
            description: None,
            elements: Some("fire,ice".to_string()),
            image: None,
        });
        assert_eq!(created.id.value(), 1);
        assert_eq!(created.elements, vec!["fire", "ice"]);
        assert_eq!(svc.creatures().len(), 1);
    }

    #[test]
    fn creature_lookup_misses_yield_none() {
        let svc = service();
        assert!(svc.creature(CreatureId::new(1)).is_none());
    }

    #[test]
    fn rename_unknown_creature_is_not_found() {
        let svc = service();
        let err = svc.rename_creature(CreatureId::new(7), "ghost").unwrap_err();
        assert_eq!(err, ServiceError::NotFound(CreatureId::new(7)));
    }
}
