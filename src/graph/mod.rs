use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use oxigraph::io::RdfFormat;
use oxigraph::model::vocab::rdf;
use oxigraph::model::{NamedNode, NamedOrBlankNode, Term};
use oxigraph::store::Store;
use tracing::info;

use crate::error::ExportError;

/// Classes and predicates of the cinema ontology, bound once from the
/// base namespace URI. Lookups elsewhere go through these constants; no
/// dynamic predicate resolution.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub movie: NamedNode,
    pub cinema: NamedNode,
    pub directed_by: NamedNode,
    pub has_genre: NamedNode,
    pub played_in_cinema: NamedNode,
    pub rated_for: NamedNode,
    pub uses_screen_type: NamedNode,
    pub casts: NamedNode,
    pub sinopsis: NamedNode,
    pub duration_minutes: NamedNode,
    pub located_in_city: NamedNode,
    pub map_link: NamedNode,
    pub latitude: NamedNode,
    pub longitude: NamedNode,
    pub cinema_address: NamedNode,
    pub cinema_rating: NamedNode,
    pub ticket_price: NamedNode,
    pub total_studios: NamedNode,
    pub shows_movie: NamedNode,
}

impl Vocabulary {
    pub fn new(namespace: &str) -> Result<Self, ExportError> {
        let term = |name: &str| NamedNode::new(format!("{namespace}{name}"));

        Ok(Self {
            movie: term("Movie")?,
            cinema: term("Cinema")?,
            directed_by: term("directedBy")?,
            has_genre: term("hasGenre")?,
            played_in_cinema: term("playedInCinema")?,
            rated_for: term("ratedFor")?,
            uses_screen_type: term("usesScreenType")?,
            casts: term("Casts")?,
            sinopsis: term("Sinopsis")?,
            duration_minutes: term("durationMinutes")?,
            located_in_city: term("locatedInCity")?,
            map_link: term("mapLink")?,
            latitude: term("Latitude")?,
            longitude: term("Longitude")?,
            cinema_address: term("cinemaAddress")?,
            cinema_rating: term("cinemaRating")?,
            ticket_price: term("ticketPrice")?,
            total_studios: term("totalStudios")?,
            shows_movie: term("showsMovie")?,
        })
    }
}

/// In-memory triple store loaded from a Turtle ontology, plus the bound
/// vocabulary for predicate lookups.
pub struct OntologyGraph {
    store: Store,
    vocab: Vocabulary,
}

impl std::fmt::Debug for OntologyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OntologyGraph")
            .field("vocab", &self.vocab)
            .finish_non_exhaustive()
    }
}

impl OntologyGraph {
    /// Load a Turtle file into a fresh in-memory store. Fails fast: a
    /// missing file or a parse error aborts the whole run.
    pub fn load<P: AsRef<Path>>(path: P, namespace: &str) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExportError::InputNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ExportError::InputRead {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;

        let store = Store::new()?;
        store
            .load_from_reader(RdfFormat::Turtle, BufReader::new(file))
            .map_err(|e| ExportError::MalformedGraph {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!("Loaded Turtle ontology from: {}", path.display());

        Ok(Self {
            store,
            vocab: Vocabulary::new(namespace)?,
        })
    }

    /// Build a graph from an in-memory Turtle document.
    pub fn from_turtle(turtle: &str, namespace: &str) -> Result<Self, ExportError> {
        let store = Store::new()?;
        store
            .load_from_reader(RdfFormat::Turtle, turtle.as_bytes())
            .map_err(|e| ExportError::MalformedGraph {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            store,
            vocab: Vocabulary::new(namespace)?,
        })
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn triple_count(&self) -> Result<usize, ExportError> {
        Ok(self.store.len()?)
    }

    /// All distinct subjects asserted `rdf:type <class>`, in sorted IRI
    /// order so repeated runs walk the graph identically. Blank-node
    /// subjects have no IRI to derive names from and are rejected.
    pub fn subjects_of_type(&self, class: &NamedNode) -> Result<Vec<NamedNode>, ExportError> {
        let mut subjects = BTreeMap::new();

        for quad in
            self.store
                .quads_for_pattern(None, Some(rdf::TYPE), Some(class.as_ref().into()), None)
        {
            let quad = quad?;
            match quad.subject {
                NamedOrBlankNode::NamedNode(node) => {
                    subjects.insert(node.as_str().to_string(), node);
                }
                NamedOrBlankNode::BlankNode(node) => {
                    return Err(ExportError::MalformedIdentifier {
                        uri: node.to_string(),
                    });
                }
            }
        }

        Ok(subjects.into_values().collect())
    }

    /// All object values for (subject, predicate), deduplicated and
    /// sorted lexicographically. IRI objects yield their full IRI string,
    /// literals their lexical value.
    pub fn object_values(
        &self,
        subject: &NamedNode,
        predicate: &NamedNode,
    ) -> Result<Vec<String>, ExportError> {
        let mut values = BTreeSet::new();

        for quad in self.store.quads_for_pattern(
            Some(subject.as_ref().into()),
            Some(predicate.as_ref()),
            None,
            None,
        ) {
            let quad = quad?;
            values.insert(term_text(&quad.object));
        }

        Ok(values.into_iter().collect())
    }

    /// Single witness for a functional predicate. If the data asserts
    /// more than one value, the lexicographically smallest wins, so the
    /// choice is stable across runs.
    pub fn first_object_value(
        &self,
        subject: &NamedNode,
        predicate: &NamedNode,
    ) -> Result<Option<String>, ExportError> {
        Ok(self.object_values(subject, predicate)?.into_iter().next())
    }
}

/// String form of an object term: full IRI for named nodes, lexical value
/// for literals.
fn term_text(term: &Term) -> String {
    match term {
        Term::NamedNode(n) => n.as_str().to_string(),
        Term::Literal(l) => l.value().to_string(),
        other => other.to_string(),
    }
}
