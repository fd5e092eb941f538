//! # Service ConnectionManager
//!
//! Gestion des connexions entre le serveur et ses clients de rendu, et
//! exposition des formats que le catalogue sait servir.
//!
//! ## Actions
//!
//! - `GetProtocolInfo` : types MIME servis (Source), Sink vide côté serveur
//! - `GetCurrentConnectionIDs` : id de la connexion par défaut
//! - `GetCurrentConnectionInfo` : aucune connexion suivie, résout en code
//!   d'erreur métier
//!
//! Le backend de catalogue est injecté à la construction du service.

mod actions;

use std::sync::Arc;

use atticstore::Storage;

use crate::dispatcher::ServiceDispatcher;

use actions::{GetCurrentConnectionIds, GetCurrentConnectionInfo, GetProtocolInfo};

/// Type du service ConnectionManager.
pub const SERVICE_TYPE: &str = "urn:schemas-upnp-org:service:ConnectionManager:1";

/// Construit le dispatcher du service avec ses trois actions.
pub fn connection_manager(storage: Arc<dyn Storage>) -> ServiceDispatcher {
    let mut dispatcher = ServiceDispatcher::new(SERVICE_TYPE);
    dispatcher.register("GetCurrentConnectionIDs", Box::new(GetCurrentConnectionIds));
    dispatcher.register(
        "GetCurrentConnectionInfo",
        Box::new(GetCurrentConnectionInfo),
    );
    dispatcher.register("GetProtocolInfo", Box::new(GetProtocolInfo { storage }));
    dispatcher
}
