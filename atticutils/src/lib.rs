//! # atticutils - Utilitaires de base pour Attic
//!
//! Petites briques partagées par les autres crates du workspace.
//! Pour l'instant : [`Dictionary`], une map ordonnée clé→valeur avec
//! encodage/décodage query-string.

mod dictionary;

pub use dictionary::Dictionary;
