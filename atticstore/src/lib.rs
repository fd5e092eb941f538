//! # atticstore - Catalogue et sessions
//!
//! Ce crate porte le contrat du catalogue hiérarchique (containers et items)
//! et le magasin de sessions du serveur.
//!
//! ## Architecture
//!
//! - [`Storage`] : trait asynchrone du backend de catalogue (browse,
//!   chargement d'objet, chemin des ancêtres, types MIME)
//! - [`CatalogObject`] : modèle des objets du catalogue
//! - [`SessionManager`] / [`Session`] : état de navigation par session,
//!   avec deux emplacements indépendants (un par backend)
//! - [`MemoryCatalog`] : backend de référence en mémoire
//!
//! Les backends sont injectés là où on en a besoin (`Arc<dyn Storage>`),
//! jamais résolus via un singleton process-wide.

mod errors;
mod memory;
mod objects;
mod session;
mod storage;

pub use errors::StorageError;
pub use memory::MemoryCatalog;
pub use objects::{CatalogContainer, CatalogItem, CatalogObject};
pub use session::{Session, SessionManager, SessionSlot};
pub use storage::{BrowseFlag, BrowseParam, BrowseResult, Storage, ROOT_ID};
