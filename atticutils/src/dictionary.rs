//! Map ordonnée clé→valeur avec encodage query-string.
//!
//! Le [`Dictionary`] sert deux usages : la (dé)sérialisation des paramètres
//! des requêtes web (`a=1&b=2`), et le passage de petits sacs de paramètres
//! entre handlers (sous-requêtes, rendu d'erreur).

use std::fmt;

use url::form_urlencoded;

/// Map ordonnée de paires (clé, valeur).
///
/// Les clés sont uniques : un `put` sur une clé existante remplace la valeur
/// en place, sans changer la position de la paire. L'ordre d'insertion est
/// conservé et c'est lui qui fixe l'ordre de sortie de [`encode`](Self::encode).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    elements: Vec<(String, String)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère ou remplace la valeur associée à `key`.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        for (k, v) in &mut self.elements {
            if *k == key {
                *v = value;
                return;
            }
        }
        self.elements.push((key, value));
    }

    /// Retourne la valeur associée à `key`, ou `None` si la clé est absente.
    ///
    /// Une valeur vide (`Some("")`) est distincte d'une clé absente (`None`).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Itère sur les paires dans l'ordre d'insertion.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode le dictionnaire en query-string (`a=1&b=2`).
    ///
    /// Clés et valeurs sont percent-échappées, les espaces deviennent `+`.
    /// L'ordre de sortie suit l'ordre courant des paires.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.elements {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Décode une query-string en dictionnaire.
    ///
    /// Découpe sur `&` puis sur le premier `=` de chaque segment. Les
    /// segments sans `=` sont ignorés. Les `+` deviennent des espaces et les
    /// séquences percent-échappées sont décodées, ce qui rend `decode`
    /// symétrique de [`encode`](Self::encode).
    pub fn decode(query: &str) -> Self {
        let mut dict = Self::new();
        for segment in query.split('&') {
            if !segment.contains('=') {
                continue;
            }
            if let Some((key, value)) = form_urlencoded::parse(segment.as_bytes()).next() {
                dict.put(key.into_owned(), value.into_owned());
            }
        }
        dict
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (k, v) in iter {
            dict.put(k, v);
        }
        dict
    }
}
