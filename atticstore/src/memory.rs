//! Backend de catalogue en mémoire.
//!
//! Sert de backend de référence pour les tests et de support au catalogue
//! adossé au système de fichiers : la hiérarchie est reconstruite en mémoire
//! et re-parcourue à la demande.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::errors::StorageError;
use crate::objects::{CatalogContainer, CatalogItem, CatalogObject};
use crate::storage::{BrowseFlag, BrowseParam, BrowseResult, Storage, ROOT_ID};

#[derive(Debug, Default)]
struct Inner {
    objects: HashMap<String, CatalogObject>,
    /// Enfants par container, dans l'ordre d'insertion.
    children: HashMap<String, Vec<String>>,
}

/// Catalogue hiérarchique en mémoire.
#[derive(Debug)]
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
}

impl MemoryCatalog {
    /// Crée un catalogue ne contenant que le container racine (id `"0"`).
    pub fn new() -> Self {
        let catalog = Self {
            inner: RwLock::new(Inner::default()),
        };
        catalog.insert_container(CatalogContainer::new(ROOT_ID, "-1", "Root"));
        catalog
    }

    pub fn insert_container(&self, container: CatalogContainer) {
        let mut inner = self.inner.write();
        register_child(&mut inner, &container.parent_id, &container.id);
        inner
            .objects
            .insert(container.id.clone(), CatalogObject::Container(container));
    }

    pub fn insert_item(&self, item: CatalogItem) {
        let mut inner = self.inner.write();
        register_child(&mut inner, &item.parent_id, &item.id);
        inner
            .objects
            .insert(item.id.clone(), CatalogObject::Item(item));
    }

    fn object(&self, id: &str) -> Result<CatalogObject, StorageError> {
        self.inner
            .read()
            .objects
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::ObjectNotFound(id.to_string()))
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn register_child(inner: &mut Inner, parent_id: &str, id: &str) {
    if parent_id == "-1" {
        return;
    }
    let siblings = inner.children.entry(parent_id.to_string()).or_default();
    if !siblings.iter().any(|child| child == id) {
        siblings.push(id.to_string());
    }
}

#[async_trait]
impl Storage for MemoryCatalog {
    async fn browse(&self, param: &BrowseParam) -> Result<BrowseResult, StorageError> {
        debug!(object_id = %param.object_id, ?param.flag, "memory catalog browse");

        let current = self.object(&param.object_id)?;

        let matches: Vec<CatalogObject> = match param.flag {
            BrowseFlag::Metadata => vec![current],
            BrowseFlag::DirectChildren => {
                let inner = self.inner.read();
                inner
                    .children
                    .get(&param.object_id)
                    .map(|ids| {
                        ids.iter()
                            .filter_map(|id| inner.objects.get(id).cloned())
                            .collect()
                    })
                    .unwrap_or_default()
            }
        };

        let total_matches = matches.len() as u32;
        let objects: Vec<CatalogObject> = matches
            .into_iter()
            .skip(param.starting_index as usize)
            .take(if param.requested_count == 0 {
                usize::MAX
            } else {
                param.requested_count as usize
            })
            .collect();

        Ok(BrowseResult {
            objects,
            total_matches,
        })
    }

    async fn load_object(&self, id: &str) -> Result<CatalogObject, StorageError> {
        self.object(id)
    }

    async fn get_container_path(&self, id: &str) -> Result<Vec<CatalogContainer>, StorageError> {
        let mut current = match self.object(id)? {
            CatalogObject::Container(c) => c,
            // Pour un item, le chemin s'arrête à son container parent
            CatalogObject::Item(item) => match self.object(&item.parent_id)? {
                CatalogObject::Container(c) => c,
                CatalogObject::Item(_) => {
                    return Err(StorageError::Backend(format!(
                        "parent of item {} is not a container",
                        item.id
                    )));
                }
            },
        };

        let mut path = vec![current.clone()];
        while current.parent_id != "-1" {
            current = match self.object(&current.parent_id)? {
                CatalogObject::Container(c) => c,
                CatalogObject::Item(_) => {
                    return Err(StorageError::Backend(format!(
                        "parent of container {} is not a container",
                        current.id
                    )));
                }
            };
            path.push(current.clone());
        }
        path.reverse();
        Ok(path)
    }

    async fn get_mime_types(&self) -> Result<Vec<String>, StorageError> {
        let inner = self.inner.read();
        let types: BTreeSet<String> = inner
            .objects
            .values()
            .filter_map(|obj| match obj {
                CatalogObject::Item(item) => Some(item.mime_type.clone()),
                CatalogObject::Container(_) => None,
            })
            .collect();
        Ok(types.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, parent: &str, title: &str, mime: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            parent_id: parent.to_string(),
            title: title.to_string(),
            class: "object.item.audioItem.musicTrack".to_string(),
            mime_type: mime.to_string(),
            url: format!("http://media/{id}"),
        }
    }

    fn sample_catalog() -> MemoryCatalog {
        let catalog = MemoryCatalog::new();
        catalog.insert_container(CatalogContainer::new("1", "0", "Music"));
        catalog.insert_container(CatalogContainer::new("2", "1", "Albums"));
        for n in 0..5 {
            catalog.insert_item(item(
                &format!("t{n}"),
                "2",
                &format!("Track {n}"),
                "audio/mpeg",
            ));
        }
        catalog.insert_item(item("v0", "1", "Concert", "video/mp4"));
        catalog
    }

    #[tokio::test]
    async fn test_browse_direct_children_order() {
        let catalog = sample_catalog();
        let param = BrowseParam::new("2", BrowseFlag::DirectChildren);

        let result = catalog.browse(&param).await.unwrap();
        assert_eq!(result.total_matches, 5);
        let ids: Vec<&str> = result.objects.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[tokio::test]
    async fn test_browse_pagination() {
        let catalog = sample_catalog();
        let mut param = BrowseParam::new("2", BrowseFlag::DirectChildren);
        param.starting_index = 1;
        param.requested_count = 2;

        let result = catalog.browse(&param).await.unwrap();
        assert_eq!(result.total_matches, 5);
        let ids: Vec<&str> = result.objects.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[tokio::test]
    async fn test_browse_requested_count_zero_returns_all() {
        let catalog = sample_catalog();
        let mut param = BrowseParam::new("2", BrowseFlag::DirectChildren);
        param.starting_index = 3;

        let result = catalog.browse(&param).await.unwrap();
        assert_eq!(result.objects.len(), 2);
        assert_eq!(result.total_matches, 5);
    }

    #[tokio::test]
    async fn test_browse_metadata() {
        let catalog = sample_catalog();
        let param = BrowseParam::new("1", BrowseFlag::Metadata);

        let result = catalog.browse(&param).await.unwrap();
        assert_eq!(result.total_matches, 1);
        assert_eq!(result.objects[0].id(), "1");
        assert!(result.objects[0].is_container());
    }

    #[tokio::test]
    async fn test_browse_unknown_object() {
        let catalog = sample_catalog();
        let param = BrowseParam::new("nope", BrowseFlag::DirectChildren);

        let err = catalog.browse(&param).await.unwrap_err();
        assert!(matches!(err, StorageError::ObjectNotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_container_path_root_first() {
        let catalog = sample_catalog();

        let path = catalog.get_container_path("2").await.unwrap();
        let ids: Vec<&str> = path.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[tokio::test]
    async fn test_container_path_of_item_stops_at_parent() {
        let catalog = sample_catalog();

        let path = catalog.get_container_path("t3").await.unwrap();
        let ids: Vec<&str> = path.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[tokio::test]
    async fn test_container_path_of_root() {
        let catalog = MemoryCatalog::new();

        let path = catalog.get_container_path(ROOT_ID).await.unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].id, ROOT_ID);
    }

    #[tokio::test]
    async fn test_mime_types_distinct_sorted() {
        let catalog = sample_catalog();

        let types = catalog.get_mime_types().await.unwrap();
        assert_eq!(types, vec!["audio/mpeg".to_string(), "video/mp4".to_string()]);
    }
}
