//! # atticupnp - Couche actions du protocole
//!
//! Ce crate implémente le cycle de vie des actions RPC transportées en XML :
//! réception d'une enveloppe, dispatch vers le handler du service visé,
//! résolution déterministe du code de statut et du corps de réponse.
//!
//! ## Architecture
//!
//! - [`ActionRequest`] : une invocation entrante, de l'enveloppe parsée
//!   jusqu'à l'issue finale ([`ActionOutcome`])
//! - [`ServiceDispatcher`] : table nom d'action → [`ActionHandler`],
//!   construite une fois au démarrage
//! - [`connectionmanager`] : le service de gestion des connexions et ses
//!   trois actions
//! - [`didl`] : rendu des objets du catalogue en fragments DIDL-Lite
//!
//! ## Cycle de vie d'une requête
//!
//! ```text
//! enveloppe XML brute
//!       ↓
//! ActionRequest::new (parse)
//!       ↓
//! ServiceDispatcher::dispatch → handler (set_response / set_error_code)
//!       ↓
//! ActionRequest::finalize → ActionOutcome (code + corps sérialisé)
//! ```
//!
//! La couche réseau externe fournit l'enveloppe parsée et récupère
//! l'enveloppe sérialisée ; elle n'est pas implémentée ici.

pub mod connectionmanager;
pub mod didl;
pub mod error_codes;
pub mod xml;

mod dispatcher;
mod errors;
mod request;

pub use dispatcher::{ActionHandler, ServiceDispatcher};
pub use errors::ActionError;
pub use request::{ActionOutcome, ActionRequest};
