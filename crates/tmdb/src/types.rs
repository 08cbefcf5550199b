//! Typed views over TMDB responses.
//!
//! TMDB's JSON shape is owned by the remote service, so parsing is
//! defensive: missing or mistyped fields become defaults or `None`,
//! never an error. The structs here are the contract consumers code
//! against instead of poking at raw `serde_json::Value`s.

/// Subset of `/movie/{id}` the reports need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub revenue: u64,
    pub genres: Vec<String>,
    pub vote_average: Option<f64>,
}

/// One entry of a movie's billed cast, in billing order.
#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
    pub order: Option<u32>,
}

/// One entry of a search / recommendations / similar result page.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub release_year: Option<i32>,
}

pub(crate) fn parse_movie_details(data: &serde_json::Value) -> MovieDetails {
    MovieDetails {
        id: data["id"].as_u64().unwrap_or(0),
        title: data["title"].as_str().unwrap_or("Unknown").to_string(),
        release_date: data["release_date"].as_str().map(|s| s.to_string()),
        revenue: data["revenue"].as_u64().unwrap_or(0),
        genres: data["genres"]
            .as_array()
            .map(|gs| {
                gs.iter()
                    .filter_map(|g| g["name"].as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default(),
        vote_average: data["vote_average"].as_f64(),
    }
}

pub(crate) fn parse_cast(data: &serde_json::Value) -> Vec<CastMember> {
    let cast = data["cast"].as_array().cloned().unwrap_or_default();

    cast.iter()
        .map(|person| CastMember {
            name: person["name"].as_str().unwrap_or("").to_string(),
            character: person["character"].as_str().map(|s| s.to_string()),
            order: person["order"].as_u64().map(|o| o as u32),
        })
        .collect()
}

pub(crate) fn parse_movie_page(data: &serde_json::Value) -> Vec<MovieSummary> {
    let results = data["results"].as_array().cloned().unwrap_or_default();

    results
        .iter()
        .map(|r| MovieSummary {
            id: r["id"].as_u64().unwrap_or(0),
            title: r["title"].as_str().unwrap_or("Unknown").to_string(),
            release_year: r["release_date"]
                .as_str()
                .and_then(|d| d.get(..4))
                .and_then(|y| y.parse().ok()),
        })
        .collect()
}
