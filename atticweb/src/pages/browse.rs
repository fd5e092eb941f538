//! Page de navigation du catalogue.
//!
//! Le moteur de browse/pagination : réconcilie les paramètres de la requête
//! avec l'état de navigation persisté en session, interroge le backend de
//! catalogue sélectionné par le driver, et compose le document de réponse
//! (liste DIDL-Lite, objet courant, fil d'Ariane, bloc de pagination,
//! actions disponibles).

use std::collections::HashMap;

use async_trait::async_trait;
use atticdidl::{DC_NS, UPNP_NS};
use atticstore::{BrowseFlag, BrowseParam, ROOT_ID};
use atticupnp::didl::render_object;
use atticupnp::xml::{append_child, append_text_child, serialize_fragment};
use tracing::debug;
use xmltree::Element;

use crate::errors::WebError;
use crate::request_handler::{render_xml_header, Driver, WebRequest, WebRequestHandler};

/// Feuille de style appliquée aux documents de navigation.
const BROWSE_XSL: &str = "/browse.xsl";

pub struct BrowsePage;

#[async_trait]
impl WebRequestHandler for BrowsePage {
    async fn process(&self, request: &mut WebRequest<'_>) -> Result<(), WebError> {
        let (session, driver) = request.check_request()?;

        let storage = driver.storage(request.context());
        let slot = driver.slot();
        let sid = request.param("sid").unwrap_or_default().to_string();

        let object_param = request.param("object_id").map(str::to_string);
        let index_param = request.param("starting_index").map(str::to_string);
        let count_param = request.param("requested_count").map(str::to_string);

        // Résolution et re-persistance des trois paramètres de navigation,
        // dans une seule section critique de l'emplacement. C'est cette
        // persistance qui permet à une requête ultérieure d'omettre un
        // paramètre et de reprendre la navigation où elle en était, y
        // compris après un aller-retour sur l'autre driver.
        let (object_id, starting_index, requested_count) = session.update_slot(slot, |values| {
            let object_id = match object_param.as_deref() {
                // -1 signifie : reprendre l'objet mémorisé en session
                None | Some("-1") => values
                    .get("object_id")
                    .cloned()
                    .unwrap_or_else(|| ROOT_ID.to_string()),
                Some(id) => id.to_string(),
            };
            values.insert("object_id".to_string(), object_id.clone());

            let starting_index = resolve_paging_value(index_param.as_deref(), values, "starting_index");
            let requested_count = resolve_paging_value(count_param.as_deref(), values, "requested_count");

            (object_id, starting_index, requested_count)
        });

        let flag = BrowseFlag::from_param(request.param("browse_flag"));

        debug!(
            object_id = %object_id,
            ?flag,
            starting_index,
            requested_count,
            driver = driver.as_param(),
            "browsing catalog"
        );

        let mut param = BrowseParam::new(object_id.clone(), flag);
        param.starting_index = starting_index;
        param.requested_count = requested_count;

        let result = storage.browse(&param).await?;

        // La liste des objets retournés vit sous le tag DIDL-Lite
        let mut didl_lite = Element::new("DIDL-Lite");
        for object in &result.objects {
            append_child(&mut didl_lite, render_object(object));
        }

        let mut current_browse = Element::new("current_browse");

        // métadonnées de l'objet en cours de navigation
        let current = storage.load_object(&object_id).await?;
        append_child(&mut current_browse, render_object(&current));

        // le fil d'Ariane : les containers de la racine vers l'objet courant
        let mut path = Element::new("path");
        for container in storage.get_container_path(&object_id).await? {
            let mut elem = Element::new("container");
            elem.attributes.insert("id".to_string(), container.id.clone());
            append_text_child(&mut elem, "dc:title", &container.title);
            append_child(&mut path, elem);
        }
        append_child(&mut current_browse, path);

        // renvoyés au client pour qu'il les rejoue à la prochaine requête
        append_text_child(&mut current_browse, "driver", driver.as_param());
        append_text_child(&mut current_browse, "sid", &sid);

        // bloc de pagination pour les liens page suivante/précédente
        let returned = result.objects.len() as u32;
        let mut page = Element::new("page");
        append_text_child(&mut page, "NumberReturned", &returned.to_string());
        append_text_child(&mut page, "TotalMatches", &result.total_matches.to_string());
        append_text_child(&mut page, "LastStartingIndex", &starting_index.to_string());
        append_text_child(&mut page, "LastRequestedCount", &requested_count.to_string());
        append_text_child(
            &mut page,
            "CurrentIndex",
            &(starting_index + returned).to_string(),
        );
        append_child(&mut current_browse, page);

        // les actions disponibles dépendent du backend : le catalogue
        // principal sait créer/éditer/supprimer, le système de fichiers se
        // rafraîchit et s'importe
        let mut actions = Element::new("actions");
        match driver {
            Driver::Primary => {
                append_child(&mut actions, action_entry("current", "new"));
                if object_id != ROOT_ID {
                    append_child(&mut actions, action_entry("current", "edit_ui"));
                }
                append_child(&mut actions, action_entry("common", "remove"));
                append_child(&mut actions, action_entry("common", "edit_ui"));
            }
            Driver::Filesystem => {
                append_child(&mut actions, action_entry("current", "refresh"));
                append_child(&mut actions, action_entry("common", "add"));
            }
        }
        append_child(&mut current_browse, actions);

        let mut root = Element::new("root");
        root.attributes
            .insert("xmlns:dc".to_string(), DC_NS.to_string());
        root.attributes
            .insert("xmlns:upnp".to_string(), UPNP_NS.to_string());
        append_child(&mut root, current_browse);
        append_child(&mut root, didl_lite);

        request.push_str(&render_xml_header(Some(BROWSE_XSL)));
        request.push_str(&serialize_fragment(&root)?);
        Ok(())
    }
}

/// Résout `starting_index` ou `requested_count` : paramètre fourni, sinon
/// valeur de session, sinon zéro ; les valeurs négatives (ou non numériques)
/// sont ramenées à zéro. C'est la valeur clampée qui est re-persistée.
fn resolve_paging_value(
    param: Option<&str>,
    values: &mut HashMap<String, String>,
    key: &str,
) -> u32 {
    let raw = match param {
        None | Some("") => values.get(key).cloned().unwrap_or_else(|| "0".to_string()),
        Some(value) => value.to_string(),
    };
    let resolved = raw.parse::<i64>().unwrap_or(0).max(0) as u32;
    values.insert(key.to_string(), resolved.to_string());
    resolved
}

fn action_entry(kind: &str, name: &str) -> Element {
    let mut action = Element::new(kind);
    action
        .attributes
        .insert("req_type".to_string(), name.to_string());
    action
}
