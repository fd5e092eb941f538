//! Contrat du backend de catalogue.

use async_trait::async_trait;

use crate::errors::StorageError;
use crate::objects::{CatalogContainer, CatalogObject};

/// Id du container racine du catalogue.
pub const ROOT_ID: &str = "0";

/// Mode de navigation d'une requête browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseFlag {
    /// Liste les enfants directs de l'objet.
    DirectChildren,

    /// Retourne les métadonnées de l'objet lui-même.
    Metadata,
}

impl BrowseFlag {
    /// Résout le paramètre `browse_flag` d'une requête.
    ///
    /// Seul `"BrowseMetadata"` sélectionne le mode métadonnées ; toute autre
    /// valeur, y compris l'absence, vaut enfants directs.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("BrowseMetadata") => BrowseFlag::Metadata,
            _ => BrowseFlag::DirectChildren,
        }
    }
}

/// Paramètres validés d'une requête browse.
///
/// `starting_index` et `requested_count` sont non signés : le clampage des
/// valeurs négatives a lieu en amont, avant la construction du paramètre.
#[derive(Debug, Clone)]
pub struct BrowseParam {
    pub object_id: String,
    pub flag: BrowseFlag,
    pub starting_index: u32,
    pub requested_count: u32,
}

impl BrowseParam {
    pub fn new(object_id: impl Into<String>, flag: BrowseFlag) -> Self {
        Self {
            object_id: object_id.into(),
            flag,
            starting_index: 0,
            requested_count: 0,
        }
    }
}

/// Résultat d'une requête browse.
#[derive(Debug, Clone)]
pub struct BrowseResult {
    /// Objets retournés, dans l'ordre du catalogue.
    pub objects: Vec<CatalogObject>,

    /// Nombre total d'objets correspondants, avant pagination.
    pub total_matches: u32,
}

/// Backend de catalogue.
///
/// Deux backends coexistent dans le serveur : le catalogue principal
/// (base de données) et le catalogue adossé au système de fichiers. Les deux
/// répondent au même contrat.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Navigue dans le catalogue selon `param`.
    async fn browse(&self, param: &BrowseParam) -> Result<BrowseResult, StorageError>;

    /// Charge un objet par son id.
    async fn load_object(&self, id: &str) -> Result<CatalogObject, StorageError>;

    /// Retourne les containers ancêtres de `id`, de la racine vers `id`
    /// inclus (pour un item, jusqu'à son container parent).
    async fn get_container_path(&self, id: &str) -> Result<Vec<CatalogContainer>, StorageError>;

    /// Retourne les types MIME distincts présents dans le catalogue.
    async fn get_mime_types(&self) -> Result<Vec<String>, StorageError>;
}
