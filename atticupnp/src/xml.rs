//! Aides de construction et de sérialisation XML.

use xmltree::{Element, EmitterConfig, XMLNode};

/// Construit l'élément de réponse `u:<Action>Response` d'un service.
///
/// Le namespace `u` est déclaré sur l'élément avec le type du service.
pub fn create_response(action_name: &str, service_type: &str) -> Element {
    let mut response = Element::new(&format!("u:{action_name}Response"));
    response
        .attributes
        .insert("xmlns:u".to_string(), service_type.to_string());
    response
}

/// Ajoute à `parent` un élément enfant ne contenant que du texte.
pub fn append_text_child(parent: &mut Element, name: &str, value: &str) {
    let mut child = Element::new(name);
    child.children.push(XMLNode::Text(value.to_string()));
    parent.children.push(XMLNode::Element(child));
}

/// Ajoute un élément enfant à `parent`.
pub fn append_child(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}

/// Sérialise un élément en document complet (avec déclaration XML).
pub fn serialize_document(element: &Element) -> Result<String, xmltree::Error> {
    serialize(element, true)
}

/// Sérialise un élément seul, sans déclaration XML.
///
/// Utilisé quand le prologue (déclaration + processing instruction) est
/// écrit à part par l'appelant.
pub fn serialize_fragment(element: &Element) -> Result<String, xmltree::Error> {
    serialize(element, false)
}

fn serialize(element: &Element, declaration: bool) -> Result<String, xmltree::Error> {
    let mut buf = Vec::new();
    let config = EmitterConfig::new()
        .write_document_declaration(declaration)
        .perform_indent(true)
        .indent_string("  ");
    element.write_with_config(&mut buf, config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
