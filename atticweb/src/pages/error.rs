//! Page de rendu d'erreur.
//!
//! Dernier maillon du chemin d'échec de [`open`](crate::open) : le message
//! est rendu dans un document minimal, par le même pipeline que les pages
//! normales, pour que l'appelant reçoive toujours une sortie parsable.

use async_trait::async_trait;
use atticupnp::xml::{append_text_child, serialize_fragment};
use tracing::warn;
use xmltree::Element;

use crate::errors::WebError;
use crate::request_handler::{render_xml_header, WebRequest, WebRequestHandler};

pub struct ErrorPage;

#[async_trait]
impl WebRequestHandler for ErrorPage {
    /// Rend le paramètre `message` sous `<root><error>`. Infaillible : la
    /// page d'erreur ne peut pas rebasculer sur elle-même.
    async fn process(&self, request: &mut WebRequest<'_>) -> Result<(), WebError> {
        let message = request.param("message").unwrap_or_default().to_string();

        let mut root = Element::new("root");
        append_text_child(&mut root, "error", &message);

        request.push_str(&render_xml_header(None));
        match serialize_fragment(&root) {
            Ok(xml) => request.push_str(&xml),
            Err(err) => {
                warn!(error = %err, "could not serialize error document");
                request.push_str("<root><error/></root>\n");
            }
        }
        Ok(())
    }
}
