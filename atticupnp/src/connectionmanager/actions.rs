//! Handlers des actions du service ConnectionManager.

use std::sync::Arc;

use async_trait::async_trait;
use atticstore::Storage;
use tracing::{debug, warn};

use crate::dispatcher::ActionHandler;
use crate::error_codes;
use crate::errors::ActionError;
use crate::request::ActionRequest;
use crate::xml::{append_text_child, create_response};

use super::SERVICE_TYPE;

/// `GetCurrentConnectionIDs` : la seule connexion exposée est la connexion
/// par défaut, id 0.
pub struct GetCurrentConnectionIds;

#[async_trait]
impl ActionHandler for GetCurrentConnectionIds {
    async fn handle(&self, request: &mut ActionRequest) -> Result<(), ActionError> {
        let mut response = create_response(request.action_name(), SERVICE_TYPE);
        append_text_child(&mut response, "ConnectionID", "0");

        request.set_response(response);
        request.set_error_code(error_codes::SUCCESS);
        Ok(())
    }
}

/// `GetCurrentConnectionInfo` : le serveur ne suit pas de connexion ;
/// condition métier attendue, résolue par code d'erreur et non levée.
pub struct GetCurrentConnectionInfo;

#[async_trait]
impl ActionHandler for GetCurrentConnectionInfo {
    async fn handle(&self, request: &mut ActionRequest) -> Result<(), ActionError> {
        debug!("no current connections to report");
        request.set_error_code(error_codes::INVALID_CONNECTION_REFERENCE);
        Ok(())
    }
}

/// `GetProtocolInfo` : liste les types MIME que le catalogue sait servir.
pub struct GetProtocolInfo {
    pub storage: Arc<dyn Storage>,
}

#[async_trait]
impl ActionHandler for GetProtocolInfo {
    async fn handle(&self, request: &mut ActionRequest) -> Result<(), ActionError> {
        match self.storage.get_mime_types().await {
            Ok(mime_types) => {
                let mut response = create_response(request.action_name(), SERVICE_TYPE);
                append_text_child(&mut response, "Source", &mime_types.join(","));
                // un serveur fournit du contenu, il n'en consomme pas
                append_text_child(&mut response, "Sink", "");

                request.set_response(response);
                request.set_error_code(error_codes::SUCCESS);
            }
            Err(err) => {
                warn!(error = %err, "could not query mime types");
                request.set_error_code(error_codes::ACTION_FAILED);
            }
        }
        Ok(())
    }
}
