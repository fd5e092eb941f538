use atticstore::StorageError;
use thiserror::Error;

/// Erreurs des pages web.
///
/// Toutes sont rattrapées à la frontière [`open`](crate::open) et converties
/// en document d'erreur rendu ; rien n'est rejoué, l'échec est terminal pour
/// la requête en cours.
#[derive(Error, Debug)]
pub enum WebError {
    /// Paramètre obligatoire manquant ou invalide (sid, driver).
    #[error("{0}")]
    Validation(String),

    /// Échec du backend de catalogue.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Échec de sérialisation du document composé.
    #[error("could not render document: {0}")]
    Render(#[from] xmltree::Error),
}
