//! Sessions et état de navigation.
//!
//! Chaque session porte deux emplacements indépendants, un par backend de
//! catalogue. Un client peut ainsi naviguer dans les deux catalogues sans que
//! les positions (objet courant, index, nombre demandé) n'interfèrent : en
//! changeant de backend on retrouve l'endroit où on était.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Emplacement de stockage dans une session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSlot {
    /// Catalogue principal (driver "1").
    Primary,

    /// Catalogue système de fichiers (driver "2").
    Secondary,
}

impl SessionSlot {
    fn index(self) -> usize {
        match self {
            SessionSlot::Primary => 0,
            SessionSlot::Secondary => 1,
        }
    }
}

/// Session d'un client de l'interface.
///
/// Les valeurs d'un emplacement sont protégées par un mutex propre : une
/// requête qui résout et re-persiste ses trois paramètres de navigation le
/// fait dans une seule section critique via [`update_slot`](Self::update_slot),
/// ce qui évite les pertes de mise à jour entre requêtes concurrentes sur la
/// même session.
#[derive(Debug)]
pub struct Session {
    id: String,
    slots: [Mutex<HashMap<String, String>>; 2],
}

impl Session {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slots: [Mutex::new(HashMap::new()), Mutex::new(HashMap::new())],
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Lit une valeur nommée dans un emplacement.
    pub fn get_from(&self, slot: SessionSlot, key: &str) -> Option<String> {
        self.slots[slot.index()].lock().get(key).cloned()
    }

    /// Écrit une valeur nommée dans un emplacement.
    pub fn put_to(&self, slot: SessionSlot, key: impl Into<String>, value: impl Into<String>) {
        self.slots[slot.index()]
            .lock()
            .insert(key.into(), value.into());
    }

    /// Exécute `f` sous le verrou de l'emplacement.
    ///
    /// Toutes les lectures/écritures d'une même résolution de paramètres
    /// passent par un seul appel, le verrou n'est jamais tenu au-delà.
    pub fn update_slot<R>(
        &self,
        slot: SessionSlot,
        f: impl FnOnce(&mut HashMap<String, String>) -> R,
    ) -> R {
        let mut values = self.slots[slot.index()].lock();
        f(&mut values)
    }
}

/// Magasin de sessions, indexé par id.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: Mutex<HashMap<String, Arc<Session>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retourne la session `id` si elle existe.
    pub fn get_session(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.lock().get(id).cloned()
    }

    /// Retourne la session `id`, en la créant au besoin.
    pub fn create_session(&self, id: &str) -> Arc<Session> {
        let mut sessions = self.sessions.lock();
        sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                debug!(sid = id, "creating session");
                Arc::new(Session::new(id))
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create() {
        let manager = SessionManager::new();
        assert!(manager.get_session("S1").is_none());

        let created = manager.create_session("S1");
        let found = manager.get_session("S1").unwrap();
        assert!(Arc::ptr_eq(&created, &found));
        assert_eq!(found.id(), "S1");
    }

    #[test]
    fn test_slots_are_independent() {
        let manager = SessionManager::new();
        let session = manager.create_session("S1");

        session.put_to(SessionSlot::Primary, "object_id", "12");
        session.put_to(SessionSlot::Secondary, "object_id", "/music");

        assert_eq!(
            session.get_from(SessionSlot::Primary, "object_id").as_deref(),
            Some("12")
        );
        assert_eq!(
            session.get_from(SessionSlot::Secondary, "object_id").as_deref(),
            Some("/music")
        );
        assert_eq!(session.get_from(SessionSlot::Primary, "starting_index"), None);
    }

    #[test]
    fn test_update_slot_sees_previous_writes() {
        let manager = SessionManager::new();
        let session = manager.create_session("S1");
        session.put_to(SessionSlot::Primary, "starting_index", "10");

        let resolved = session.update_slot(SessionSlot::Primary, |values| {
            let index = values
                .get("starting_index")
                .cloned()
                .unwrap_or_else(|| "0".to_string());
            values.insert("requested_count".to_string(), "5".to_string());
            index
        });

        assert_eq!(resolved, "10");
        assert_eq!(
            session
                .get_from(SessionSlot::Primary, "requested_count")
                .as_deref(),
            Some("5")
        );
    }
}
