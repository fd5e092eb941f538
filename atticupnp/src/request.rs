//! Cycle de vie d'une invocation d'action.

use tracing::{debug, warn};
use xmltree::{Element, EmitterConfig};

use crate::error_codes;
use crate::errors::ActionError;

/// Une invocation d'action entrante.
///
/// Objet à usage unique : créé pour une invocation, passé à exactement un
/// dispatcher dont le handler pose la réponse et/ou le code d'erreur, puis
/// consommé par [`finalize`](Self::finalize).
#[derive(Debug)]
pub struct ActionRequest {
    action_name: String,
    device_id: String,
    service_id: String,
    request_body: Element,
    response: Option<Element>,
    error_code: i32,
}

/// Issue finale d'une requête : code de statut et enveloppe sérialisée.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub error_code: i32,
    pub body: Option<String>,
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        self.error_code == error_codes::SUCCESS
    }
}

impl ActionRequest {
    /// Construit la requête en parsant l'enveloppe brute.
    ///
    /// Une enveloppe mal formée est fatale pour la requête ; l'erreur est
    /// remontée à l'appelant, jamais rejouée.
    pub fn new(
        raw_envelope: &str,
        action_name: impl Into<String>,
        device_id: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Result<Self, ActionError> {
        let request_body = Element::parse(raw_envelope.as_bytes())?;
        Ok(Self {
            action_name: action_name.into(),
            device_id: device_id.into(),
            service_id: service_id.into(),
            request_body,
            response: None,
            error_code: error_codes::SUCCESS,
        })
    }

    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// Corps de l'enveloppe entrante, immuable après construction.
    pub fn request_body(&self) -> &Element {
        &self.request_body
    }

    /// Pose la réponse du handler. Au plus un appel par requête.
    pub fn set_response(&mut self, response: Element) {
        self.response = Some(response);
    }

    /// Enregistre le code d'erreur voulu, indépendamment de la réponse.
    pub fn set_error_code(&mut self, code: i32) {
        self.error_code = code;
    }

    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    /// Résout l'issue finale de la requête.
    ///
    /// Précédence :
    /// 1. réponse posée et sérialisation en échec → code forcé à
    ///    `ACTION_FAILED`, le corps est la sortie partielle du sérialiseur ;
    /// 2. réponse posée et sérialisation réussie → code courant (par défaut
    ///    `SUCCESS` si aucun handler ne l'a changé) ;
    /// 3. pas de réponse → code courant s'il signale déjà une erreur, sinon
    ///    forcé à `ACTION_FAILED`. Une requête ne se termine jamais en
    ///    succès sans corps de réponse.
    pub fn finalize(self) -> ActionOutcome {
        match self.response {
            Some(response) => {
                let mut buf = Vec::new();
                let config = EmitterConfig::new()
                    .write_document_declaration(true)
                    .perform_indent(true)
                    .indent_string("  ");
                match response.write_with_config(&mut buf, config) {
                    Ok(()) => {
                        debug!(
                            action = %self.action_name,
                            code = self.error_code,
                            "action response serialized"
                        );
                        ActionOutcome {
                            error_code: self.error_code,
                            body: Some(String::from_utf8_lossy(&buf).into_owned()),
                        }
                    }
                    Err(err) => {
                        warn!(
                            action = %self.action_name,
                            error = %err,
                            "could not serialize action response"
                        );
                        ActionOutcome {
                            error_code: error_codes::ACTION_FAILED,
                            body: Some(String::from_utf8_lossy(&buf).into_owned()),
                        }
                    }
                }
            }
            None => {
                // soit le handler a déjà posé un code d'erreur et on le
                // garde, soit on en pose un nous-mêmes
                let error_code = if self.error_code == error_codes::SUCCESS {
                    error_codes::ACTION_FAILED
                } else {
                    self.error_code
                };
                debug!(action = %self.action_name, code = error_code, "no response body");
                ActionOutcome {
                    error_code,
                    body: None,
                }
            }
        }
    }
}
