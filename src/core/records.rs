use serde::{Deserialize, Serialize};

/// One movie, projected from its ontology subject.
///
/// Multi-valued fields (`genres`, `cinemas`, `screen_types`) are
/// deduplicated and sorted. Optional scalars serialize as `null` when the
/// predicate is absent. `duration_minutes` stays a string; the source
/// never parses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub director: Option<String>,
    pub genres: Vec<String>,
    /// Cinemas this movie plays at, prettified. Informational only; the
    /// cinema embedding links through `showsMovie`, not this field.
    pub cinemas: Vec<String>,
    /// Raw local name, deliberately not prettified.
    pub age_rating: Option<String>,
    pub screen_types: Vec<String>,
    pub casts: Option<String>,
    pub sinopsis_url: Option<String>,
    pub duration_minutes: Option<String>,
}

/// One cinema with its embedded movie records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CinemaRecord {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub map_link: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub rating: Option<String>,
    pub ticket_price: Option<String>,
    pub total_studios: Option<String>,
    /// Full movie records, by value. A movie showing at several cinemas
    /// is repeated in each.
    pub movies: Vec<MovieRecord>,
}

/// The output document: `{ "cinemas": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CinemaCatalog {
    pub cinemas: Vec<CinemaRecord>,
}
