//! # atticdidl - Modèle DIDL-Lite
//!
//! Modèle typé pour les fragments DIDL-Lite qui décrivent le catalogue
//! (containers et items), avec parsing quick-xml et conversion vers
//! [`xmltree::Element`] pour la composition de documents.
//!
//! ## Namespaces
//!
//! - `urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/` (défaut)
//! - `http://purl.org/dc/elements/1.1/` (dc)
//! - `urn:schemas-upnp-org:metadata-1-0/upnp/` (upnp)

use serde::{Deserialize, Serialize};
use xmltree::{Element, XMLNode};

/// Namespace DIDL-Lite par défaut
pub const DIDL_NS: &str = "urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/";

/// Namespace Dublin Core (dc:title, dc:creator, ...)
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Namespace UPnP (upnp:class, ...)
pub const UPNP_NS: &str = "urn:schemas-upnp-org:metadata-1-0/upnp/";

/// Racine d'un fragment DIDL-Lite
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "DIDL-Lite")]
pub struct DidlLite {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,

    #[serde(rename = "@xmlns:dc", skip_serializing_if = "Option::is_none")]
    pub xmlns_dc: Option<String>,

    #[serde(rename = "@xmlns:upnp", skip_serializing_if = "Option::is_none")]
    pub xmlns_upnp: Option<String>,

    #[serde(rename = "container", default)]
    pub containers: Vec<Container>,

    #[serde(rename = "item", default)]
    pub items: Vec<Item>,
}

/// Container pouvant contenir d'autres containers ou items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@parentID")]
    pub parent_id: String,

    #[serde(rename = "@childCount", skip_serializing_if = "Option::is_none")]
    pub child_count: Option<String>,

    #[serde(rename = "dc:title", alias = "title")]
    pub title: String,

    #[serde(rename = "upnp:class", alias = "class")]
    pub class: String,
}

/// Item feuille du catalogue (piste, photo, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@parentID")]
    pub parent_id: String,

    #[serde(rename = "dc:title", alias = "title")]
    pub title: String,

    #[serde(rename = "upnp:class", alias = "class")]
    pub class: String,

    #[serde(rename = "res", default)]
    pub resources: Vec<Resource>,
}

/// Ressource média attachée à un item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "@protocolInfo")]
    pub protocol_info: String,

    #[serde(rename = "$text")]
    pub url: String,
}

impl DidlLite {
    /// Fragment vide avec les trois namespaces déclarés.
    pub fn empty() -> Self {
        Self {
            xmlns: DIDL_NS.to_string(),
            xmlns_dc: Some(DC_NS.to_string()),
            xmlns_upnp: Some(UPNP_NS.to_string()),
            containers: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Parse un fragment DIDL-Lite.
    pub fn parse(input: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(input)
    }
}

fn text_child(name: &str, value: &str) -> XMLNode {
    let mut child = Element::new(name);
    child.children.push(XMLNode::Text(value.to_string()));
    XMLNode::Element(child)
}

impl Container {
    /// Convertit le container en élément `<container>`.
    pub fn to_element(&self) -> Element {
        let mut elem = Element::new("container");
        elem.attributes.insert("id".to_string(), self.id.clone());
        elem.attributes
            .insert("parentID".to_string(), self.parent_id.clone());
        if let Some(count) = &self.child_count {
            elem.attributes
                .insert("childCount".to_string(), count.clone());
        }
        elem.children.push(text_child("dc:title", &self.title));
        elem.children.push(text_child("upnp:class", &self.class));
        elem
    }
}

impl Item {
    /// Convertit l'item en élément `<item>`.
    pub fn to_element(&self) -> Element {
        let mut elem = Element::new("item");
        elem.attributes.insert("id".to_string(), self.id.clone());
        elem.attributes
            .insert("parentID".to_string(), self.parent_id.clone());
        elem.children.push(text_child("dc:title", &self.title));
        elem.children.push(text_child("upnp:class", &self.class));
        for res in &self.resources {
            let mut res_elem = Element::new("res");
            res_elem
                .attributes
                .insert("protocolInfo".to_string(), res.protocol_info.clone());
            res_elem.children.push(XMLNode::Text(res.url.clone()));
            elem.children.push(XMLNode::Element(res_elem));
        }
        elem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_didl() {
        let xml = r#"
        <DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/"
                   xmlns:dc="http://purl.org/dc/elements/1.1/"
                   xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/">
            <container id="2" parentID="0" childCount="3">
                <dc:title>Photos</dc:title>
                <upnp:class>object.container</upnp:class>
            </container>
            <item id="1" parentID="0">
                <dc:title>Test Song</dc:title>
                <upnp:class>object.item.audioItem.musicTrack</upnp:class>
                <res protocolInfo="http-get:*:audio/mpeg:*">http://example.com/song.mp3</res>
            </item>
        </DIDL-Lite>
        "#;

        let didl = DidlLite::parse(xml).unwrap();
        assert_eq!(didl.containers.len(), 1);
        assert_eq!(didl.containers[0].title, "Photos");
        assert_eq!(didl.items.len(), 1);
        assert_eq!(didl.items[0].title, "Test Song");
        assert_eq!(didl.items[0].resources[0].url, "http://example.com/song.mp3");
    }

    #[test]
    fn test_item_to_element() {
        let item = Item {
            id: "12".to_string(),
            parent_id: "3".to_string(),
            title: "Morning".to_string(),
            class: "object.item.audioItem.musicTrack".to_string(),
            resources: vec![Resource {
                protocol_info: "http-get:*:audio/flac:*".to_string(),
                url: "http://media/12.flac".to_string(),
            }],
        };

        let elem = item.to_element();
        assert_eq!(elem.name, "item");
        assert_eq!(elem.attributes.get("id").map(String::as_str), Some("12"));
        assert_eq!(
            elem.get_child("dc:title").and_then(|e| e.get_text()).as_deref(),
            Some("Morning")
        );
        let res = elem.get_child("res").unwrap();
        assert_eq!(
            res.attributes.get("protocolInfo").map(String::as_str),
            Some("http-get:*:audio/flac:*")
        );
        assert_eq!(res.get_text().as_deref(), Some("http://media/12.flac"));
    }

    #[test]
    fn test_container_to_element() {
        let container = Container {
            id: "0".to_string(),
            parent_id: "-1".to_string(),
            child_count: Some("2".to_string()),
            title: "Root".to_string(),
            class: "object.container".to_string(),
        };

        let elem = container.to_element();
        assert_eq!(elem.name, "container");
        assert_eq!(
            elem.attributes.get("childCount").map(String::as_str),
            Some("2")
        );
        assert_eq!(
            elem.get_child("upnp:class").and_then(|e| e.get_text()).as_deref(),
            Some("object.container")
        );
    }
}
