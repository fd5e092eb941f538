//! Codes d'erreur des actions.
//!
//! Numérotation standard des erreurs d'action UPnP, portée telle quelle dans
//! l'issue de chaque requête ([`ActionOutcome`](crate::ActionOutcome)).

/// Succès (valeur sentinelle par défaut d'une requête)
pub const SUCCESS: i32 = 0;

/// Action invalide ou non supportée par le service
pub const INVALID_ACTION: i32 = 401;

/// Arguments invalides
pub const INVALID_ARGS: i32 = 402;

/// Action échouée
pub const ACTION_FAILED: i32 = 501;

/// Référence de connexion invalide (aucune connexion courante)
pub const INVALID_CONNECTION_REFERENCE: i32 = 706;
