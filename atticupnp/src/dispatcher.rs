//! Dispatch des actions d'un service.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error_codes;
use crate::errors::ActionError;
use crate::request::ActionRequest;

/// Handler d'une action d'un service.
///
/// Un handler pose la réponse et/ou le code d'erreur sur la requête avant de
/// retourner. Les conditions métier attendues se résolvent via
/// `set_error_code`, jamais via `Err` : lever une erreur est réservé aux
/// opérations réellement non supportées.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn handle(&self, request: &mut ActionRequest) -> Result<(), ActionError>;
}

/// Table des actions d'un service.
///
/// Un service expose un ensemble d'actions fixe, connu statiquement : la
/// table est remplie une fois à la construction du service, jamais résolue
/// dynamiquement ensuite.
pub struct ServiceDispatcher {
    service_type: String,
    handlers: HashMap<String, Box<dyn ActionHandler>>,
}

impl ServiceDispatcher {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            handlers: HashMap::new(),
        }
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Enregistre le handler de l'action `name`.
    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn ActionHandler>) {
        self.handlers.insert(name.into(), handler);
    }

    /// Noms des actions supportées.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Exécute le handler de l'action portée par `request`.
    ///
    /// Action inconnue : le code d'erreur `INVALID_ACTION` est posé sur la
    /// requête **et** une erreur est retournée. Les deux signaux sont
    /// volontaires : l'erreur fait autorité pour le flot de contrôle, le
    /// code reste disponible pour un appelant qui n'inspecte que l'état de
    /// la requête.
    pub async fn dispatch(&self, request: &mut ActionRequest) -> Result<(), ActionError> {
        debug!(
            service = %self.service_type,
            action = request.action_name(),
            "dispatching action"
        );

        match self.handlers.get(request.action_name()) {
            Some(handler) => handler.handle(request).await,
            None => {
                warn!(
                    service = %self.service_type,
                    action = request.action_name(),
                    "unrecognized action"
                );
                request.set_error_code(error_codes::INVALID_ACTION);
                Err(ActionError::UnsupportedAction(
                    request.action_name().to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::create_response;

    struct EchoHandler;

    #[async_trait]
    impl ActionHandler for EchoHandler {
        async fn handle(&self, request: &mut ActionRequest) -> Result<(), ActionError> {
            let response = create_response(request.action_name(), "urn:test");
            request.set_response(response);
            request.set_error_code(error_codes::SUCCESS);
            Ok(())
        }
    }

    const ENVELOPE: &str = r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body><u:Echo xmlns:u="urn:test"/></s:Body>
</s:Envelope>"#;

    fn dispatcher() -> ServiceDispatcher {
        let mut dispatcher = ServiceDispatcher::new("urn:test");
        dispatcher.register("Echo", Box::new(EchoHandler));
        dispatcher
    }

    #[tokio::test]
    async fn test_dispatch_known_action() {
        let dispatcher = dispatcher();
        let mut request = ActionRequest::new(ENVELOPE, "Echo", "uuid:dev", "svc").unwrap();

        dispatcher.dispatch(&mut request).await.unwrap();

        let outcome = request.finalize();
        assert!(outcome.is_success());
        assert!(outcome.body.unwrap().contains("<u:EchoResponse"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_action_signals_twice() {
        let dispatcher = dispatcher();
        let mut request = ActionRequest::new(ENVELOPE, "Frobnicate", "uuid:dev", "svc").unwrap();

        let result = dispatcher.dispatch(&mut request).await;

        // les deux canaux doivent porter le signal
        assert!(matches!(
            result,
            Err(ActionError::UnsupportedAction(name)) if name == "Frobnicate"
        ));
        assert_eq!(request.error_code(), error_codes::INVALID_ACTION);
    }
}
