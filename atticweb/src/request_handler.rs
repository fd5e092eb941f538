//! Exécution des requêtes web et routage des pages.

use std::sync::Arc;

use async_recursion::async_recursion;
use async_trait::async_trait;
use atticstore::{Session, SessionManager, SessionSlot, Storage};
use atticutils::Dictionary;
use tracing::{debug, error};

use crate::errors::WebError;
use crate::pages;

/// Charset de tous les documents rendus.
const DEFAULT_CHARSET: &str = "UTF-8";

/// Dépendances partagées des pages, injectées à la construction du serveur.
#[derive(Clone)]
pub struct WebContext {
    /// Magasin de sessions de l'interface.
    pub sessions: Arc<SessionManager>,

    /// Catalogue principal (driver "1").
    pub database: Arc<dyn Storage>,

    /// Catalogue adossé au système de fichiers (driver "2").
    pub filesystem: Arc<dyn Storage>,
}

/// Backend de catalogue visé par une requête.
///
/// Deux drivers peuvent être actifs en même temps, chacun avec son
/// emplacement de session propre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Primary,
    Filesystem,
}

impl Driver {
    /// Résout le paramètre `driver` d'une requête.
    pub fn from_param(value: Option<&str>) -> Result<Self, WebError> {
        match value {
            Some("1") => Ok(Driver::Primary),
            Some("2") => Ok(Driver::Filesystem),
            other => Err(WebError::Validation(format!(
                "invalid driver selected: {}",
                other.unwrap_or("none")
            ))),
        }
    }

    /// Valeur du paramètre telle que renvoyée au client.
    pub fn as_param(self) -> &'static str {
        match self {
            Driver::Primary => "1",
            Driver::Filesystem => "2",
        }
    }

    /// Emplacement de session associé au driver.
    pub fn slot(self) -> SessionSlot {
        match self {
            Driver::Primary => SessionSlot::Primary,
            Driver::Filesystem => SessionSlot::Secondary,
        }
    }

    /// Backend de catalogue associé au driver.
    pub fn storage(self, ctx: &WebContext) -> Arc<dyn Storage> {
        match self {
            Driver::Primary => ctx.database.clone(),
            Driver::Filesystem => ctx.filesystem.clone(),
        }
    }
}

/// Une requête web en cours : paramètres d'entrée et tampon de sortie.
pub struct WebRequest<'a> {
    ctx: &'a WebContext,
    params: Dictionary,
    out: String,
}

impl<'a> WebRequest<'a> {
    fn new(ctx: &'a WebContext, params: Dictionary) -> Self {
        Self {
            ctx,
            params,
            out: String::new(),
        }
    }

    pub fn context(&self) -> &WebContext {
        self.ctx
    }

    /// Valeur du paramètre `name`, `None` s'il est absent.
    ///
    /// L'absence est distincte de la chaîne vide.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Garde des paramètres obligatoires des pages à session.
    ///
    /// Échoue si `sid` manque, si aucune session ne porte cet id, ou si
    /// `driver` manque ou ne vaut ni "1" ni "2". Les pages sans contexte de
    /// session ne doivent pas l'appeler.
    pub fn check_request(&self) -> Result<(Arc<Session>, Driver), WebError> {
        let sid = self
            .param("sid")
            .ok_or_else(|| WebError::Validation("no session id given".to_string()))?;
        let session = self
            .ctx
            .sessions
            .get_session(sid)
            .ok_or_else(|| WebError::Validation("invalid session id".to_string()))?;

        let driver = Driver::from_param(self.param("driver"))?;

        Ok((session, driver))
    }

    /// Ajoute du texte au document en cours de rendu.
    pub fn push_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn into_output(self) -> String {
        self.out
    }
}

/// Prologue des documents rendus : déclaration XML puis, le cas échéant, la
/// processing instruction de la feuille de style.
pub fn render_xml_header(xsl_link: Option<&str>) -> String {
    match xsl_link {
        None => format!("<?xml version=\"1.0\" encoding=\"{DEFAULT_CHARSET}\"?>\n"),
        Some(link) => format!(
            "<?xml version=\"1.0\" encoding=\"{DEFAULT_CHARSET}\"?>\n\
             <?xml-stylesheet type=\"text/xsl\" href=\"{link}\"?>\n"
        ),
    }
}

/// Une page de l'interface.
///
/// `process` rend le document dans la requête ; tout `Err` abandonne la
/// sortie partielle et bascule sur le rendu d'erreur de [`open`].
#[async_trait]
pub trait WebRequestHandler: Send + Sync {
    async fn process(&self, request: &mut WebRequest<'_>) -> Result<(), WebError>;
}

/// Table des pages, résolue par nom.
///
/// Table fixe, pas de résolution dynamique : chaque nom correspond à un
/// type de page connu à la compilation.
pub fn create_handler(page: &str) -> Option<Box<dyn WebRequestHandler>> {
    match page {
        "browse" => Some(Box::new(pages::browse::BrowsePage)),
        "error" => Some(Box::new(pages::error::ErrorPage)),
        _ => None,
    }
}

/// Exécute la page `page` et retourne le document rendu.
///
/// En cas d'échec (page inconnue, validation, catalogue), la sortie
/// partielle est abandonnée et le message d'échec est rendu via la page
/// `error` : l'appelant reçoit toujours un document bien formé.
#[async_recursion]
pub async fn open(ctx: &WebContext, page: &str, params: Dictionary) -> String {
    debug!(page, "processing web request");

    let err = match create_handler(page) {
        Some(handler) => {
            let mut request = WebRequest::new(ctx, params);
            match handler.process(&mut request).await {
                Ok(()) => return request.into_output(),
                Err(err) => err,
            }
        }
        None => WebError::Validation(format!("unknown page: {page}")),
    };

    error!(page, error = %err, "web request failed");

    let mut params = Dictionary::new();
    params.put("message", err.to_string());
    subrequest(ctx, "error", params).await
}

/// Comme [`open`], à partir d'une query-string brute.
pub async fn open_query(ctx: &WebContext, page: &str, query: &str) -> String {
    open(ctx, page, Dictionary::decode(query)).await
}

/// Rend une autre page et retourne sa sortie complète, pour inclusion dans
/// la sortie de l'appelant.
pub async fn subrequest(ctx: &WebContext, page: &str, params: Dictionary) -> String {
    open(ctx, page, params).await
}
