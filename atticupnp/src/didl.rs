//! Rendu DIDL-Lite des objets du catalogue.

use atticstore::CatalogObject;
use xmltree::Element;

/// Rend un objet du catalogue en élément DIDL-Lite (`<container>` ou
/// `<item>`), prêt à être greffé dans un document composé.
pub fn render_object(object: &CatalogObject) -> Element {
    match object {
        CatalogObject::Container(container) => atticdidl::Container {
            id: container.id.clone(),
            parent_id: container.parent_id.clone(),
            child_count: container.child_count.map(|count| count.to_string()),
            title: container.title.clone(),
            class: container.class.clone(),
        }
        .to_element(),
        CatalogObject::Item(item) => atticdidl::Item {
            id: item.id.clone(),
            parent_id: item.parent_id.clone(),
            title: item.title.clone(),
            class: item.class.clone(),
            resources: vec![atticdidl::Resource {
                protocol_info: format!("http-get:*:{}:*", item.mime_type),
                url: item.url.clone(),
            }],
        }
        .to_element(),
    }
}
