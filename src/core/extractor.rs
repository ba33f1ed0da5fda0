use std::collections::{BTreeMap, BTreeSet};

use oxigraph::model::NamedNode;
use tracing::{debug, info, warn};

use crate::core::records::{CinemaCatalog, CinemaRecord, MovieRecord};
use crate::error::ExportError;
use crate::graph::OntologyGraph;
use crate::utils::{local_name, pretty_name};

/// Result of one extraction pass over the graph.
#[derive(Debug, Clone)]
pub struct CatalogExtraction {
    pub catalog: CinemaCatalog,
    pub movie_count: usize,
    /// `showsMovie` targets that were never asserted `Movie` and so were
    /// dropped from their cinema's list.
    pub skipped_shows: usize,
}

/// Walks the ontology in two passes: movies first, then cinemas with
/// movie records embedded by value.
pub struct CatalogExtractor<'a> {
    graph: &'a OntologyGraph,
}

impl<'a> CatalogExtractor<'a> {
    pub fn new(graph: &'a OntologyGraph) -> Self {
        Self { graph }
    }

    pub fn extract(&self) -> Result<CatalogExtraction, ExportError> {
        let movies = self.collect_movies()?;
        let movie_count = movies.len();
        info!("Extracted {} movie records", movie_count);

        let (cinemas, skipped_shows) = self.collect_cinemas(&movies)?;
        info!("Extracted {} cinema records", cinemas.len());

        Ok(CatalogExtraction {
            catalog: CinemaCatalog { cinemas },
            movie_count,
            skipped_shows,
        })
    }

    /// Movie pass: one record per subject typed `Movie`, keyed by IRI.
    fn collect_movies(&self) -> Result<BTreeMap<String, MovieRecord>, ExportError> {
        let vocab = self.graph.vocab();
        let mut movies = BTreeMap::new();

        for subject in self.graph.subjects_of_type(&vocab.movie)? {
            let id = subject.as_str().to_string();
            debug!("Extracting movie: {}", id);

            let director = self
                .graph
                .first_object_value(&subject, &vocab.directed_by)?
                .map(|v| pretty_name(&v))
                .transpose()?;

            let age_rating = self
                .graph
                .first_object_value(&subject, &vocab.rated_for)?
                .map(|v| local_name(&v).map(str::to_string))
                .transpose()?;

            let record = MovieRecord {
                title: pretty_name(&id)?,
                director,
                genres: self.pretty_values(&subject, &vocab.has_genre)?,
                cinemas: self.pretty_values(&subject, &vocab.played_in_cinema)?,
                age_rating,
                screen_types: self.pretty_values(&subject, &vocab.uses_screen_type)?,
                casts: self.graph.first_object_value(&subject, &vocab.casts)?,
                sinopsis_url: self.graph.first_object_value(&subject, &vocab.sinopsis)?,
                duration_minutes: self
                    .graph
                    .first_object_value(&subject, &vocab.duration_minutes)?,
                id: id.clone(),
            };

            movies.insert(id, record);
        }

        Ok(movies)
    }

    /// Cinema pass: one record per subject typed `Cinema`, embedding the
    /// movie records built in the movie pass. `showsMovie` targets absent
    /// from that map are skipped with a warning and counted.
    fn collect_cinemas(
        &self,
        movies: &BTreeMap<String, MovieRecord>,
    ) -> Result<(Vec<CinemaRecord>, usize), ExportError> {
        let vocab = self.graph.vocab();
        let mut cinemas = Vec::new();
        let mut skipped_shows = 0;

        for subject in self.graph.subjects_of_type(&vocab.cinema)? {
            let id = subject.as_str().to_string();
            debug!("Extracting cinema: {}", id);

            let city = self
                .graph
                .first_object_value(&subject, &vocab.located_in_city)?
                .map(|v| pretty_name(&v))
                .transpose()?;

            let mut shown = Vec::new();
            for target in self.graph.object_values(&subject, &vocab.shows_movie)? {
                match movies.get(&target) {
                    Some(record) => shown.push(record.clone()),
                    None => {
                        warn!(
                            "Skipping showsMovie target not typed Movie: {} (shown at {})",
                            target, id
                        );
                        skipped_shows += 1;
                    }
                }
            }

            cinemas.push(CinemaRecord {
                name: pretty_name(&id)?,
                city,
                map_link: self.graph.first_object_value(&subject, &vocab.map_link)?,
                latitude: self.coordinate(&subject, &vocab.latitude)?,
                longitude: self.coordinate(&subject, &vocab.longitude)?,
                address: self.graph.first_object_value(&subject, &vocab.cinema_address)?,
                rating: self.graph.first_object_value(&subject, &vocab.cinema_rating)?,
                ticket_price: self.graph.first_object_value(&subject, &vocab.ticket_price)?,
                total_studios: self.graph.first_object_value(&subject, &vocab.total_studios)?,
                movies: shown,
                id,
            });
        }

        Ok((cinemas, skipped_shows))
    }

    /// Multi-valued predicate: all objects prettified, deduplicated, and
    /// sorted so output order is stable.
    fn pretty_values(
        &self,
        subject: &NamedNode,
        predicate: &NamedNode,
    ) -> Result<Vec<String>, ExportError> {
        let mut values = BTreeSet::new();
        for raw in self.graph.object_values(subject, predicate)? {
            values.insert(pretty_name(&raw)?);
        }
        Ok(values.into_iter().collect())
    }

    fn coordinate(
        &self,
        subject: &NamedNode,
        predicate: &NamedNode,
    ) -> Result<Option<f64>, ExportError> {
        match self.graph.first_object_value(subject, predicate)? {
            None => Ok(None),
            Some(raw) => {
                raw.trim()
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| ExportError::InvalidNumericLiteral {
                        subject: subject.as_str().to_string(),
                        predicate: local_name(predicate.as_str())
                            .unwrap_or("coordinate")
                            .to_string(),
                        value: raw,
                    })
            }
        }
    }
}
