use thiserror::Error;

/// Erreurs de la couche actions.
///
/// Les conditions métier attendues (pas de connexion courante, objet
/// inconnu...) ne passent pas par ce type : les handlers les résolvent via
/// [`ActionRequest::set_error_code`](crate::ActionRequest::set_error_code).
/// Une erreur levée ici interrompt le dispatch.
#[derive(Error, Debug)]
pub enum ActionError {
    /// Enveloppe entrante mal formée. Fatal pour la requête, jamais rejoué.
    #[error("malformed action envelope: {0}")]
    Parse(#[from] xmltree::ParseError),

    /// Action inconnue du service visé.
    #[error("unsupported action: {0}")]
    UnsupportedAction(String),
}
