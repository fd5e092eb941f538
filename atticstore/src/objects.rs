//! Modèle des objets du catalogue.

use serde::{Deserialize, Serialize};

/// Container du catalogue (noeud de la hiérarchie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogContainer {
    pub id: String,

    /// Id du parent, `"-1"` pour la racine.
    pub parent_id: String,

    pub title: String,

    pub class: String,

    pub child_count: Option<u32>,
}

/// Item feuille du catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,

    pub parent_id: String,

    pub title: String,

    pub class: String,

    pub mime_type: String,

    /// URL de la ressource servie par la couche de streaming.
    pub url: String,
}

/// Objet du catalogue : container ou item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogObject {
    Container(CatalogContainer),
    Item(CatalogItem),
}

impl CatalogContainer {
    pub fn new(id: impl Into<String>, parent_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            title: title.into(),
            class: "object.container".to_string(),
            child_count: None,
        }
    }
}

impl CatalogObject {
    pub fn id(&self) -> &str {
        match self {
            CatalogObject::Container(c) => &c.id,
            CatalogObject::Item(i) => &i.id,
        }
    }

    pub fn parent_id(&self) -> &str {
        match self {
            CatalogObject::Container(c) => &c.parent_id,
            CatalogObject::Item(i) => &i.parent_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogObject::Container(c) => &c.title,
            CatalogObject::Item(i) => &i.title,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, CatalogObject::Container(_))
    }
}
