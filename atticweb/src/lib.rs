//! # atticweb - Pages XML de l'interface de navigation
//!
//! Point d'entrée web du serveur : un jeu de paramètres (query-string
//! décodée) est routé vers une page, qui rend un document XML complet.
//! La page principale est `browse`, le moteur de navigation/pagination du
//! catalogue.
//!
//! ## Architecture
//!
//! - [`WebContext`] : dépendances injectées (sessions, les deux backends de
//!   catalogue)
//! - [`WebRequestHandler`] : trait des pages
//! - [`open`] / [`open_query`] : exécution d'une page avec conversion de
//!   tout échec en document d'erreur rendu
//! - [`subrequest`] : rendu d'une page dans une autre
//! - [`pages`] : les pages (`browse`, `error`)
//!
//! Quelle que soit l'issue, l'appelant reçoit toujours un document XML bien
//! formé, jamais une erreur brute.

pub mod pages;

mod errors;
mod request_handler;

pub use errors::WebError;
pub use request_handler::{
    create_handler, open, open_query, render_xml_header, subrequest, Driver, WebContext,
    WebRequest, WebRequestHandler,
};
