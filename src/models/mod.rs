use serde::{Deserialize, Serialize};

pub mod menu;
pub mod recipe;
pub mod user;

pub use menu::{MenuItem, MenuResponse};
pub use recipe::{Recipe, RecipeSummary};
pub use user::GoogleUser;

const TMDB_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w185";

/// Verified movie details used to seed menu generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub imdb_id: String,
}

/// A single movie search hit returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSearchResult {
    pub title: String,
    pub year: String,
    pub imdb_id: String,
    pub poster: String,
}

/// First four characters of a `YYYY-MM-DD` release date
fn release_year(release_date: Option<&str>) -> String {
    release_date
        .unwrap_or_default()
        .chars()
        .take(4)
        .collect()
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Response of `GET /?t=<title>`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbTitleResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default, rename = "imdbID")]
    pub imdb_id: String,
}

impl OmdbTitleResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

impl From<OmdbTitleResponse> for MovieDetails {
    fn from(omdb: OmdbTitleResponse) -> Self {
        MovieDetails {
            title: omdb.title,
            year: omdb.year,
            plot: omdb.plot,
            imdb_id: omdb.imdb_id,
        }
    }
}

/// Response of `GET /?s=<query>`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbSearchResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub search: Vec<OmdbSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbSearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, rename = "imdbID")]
    pub imdb_id: String,
    #[serde(default)]
    pub poster: String,
}

impl From<OmdbSearchItem> for MovieSearchResult {
    fn from(item: OmdbSearchItem) -> Self {
        MovieSearchResult {
            title: item.title,
            year: item.year,
            imdb_id: item.imdb_id,
            poster: item.poster,
        }
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response of `GET /search/movie`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl From<TmdbMovie> for MovieDetails {
    fn from(movie: TmdbMovie) -> Self {
        MovieDetails {
            year: release_year(movie.release_date.as_deref()),
            title: movie.title,
            plot: movie.overview,
            imdb_id: String::new(),
        }
    }
}

impl From<TmdbMovie> for MovieSearchResult {
    fn from(movie: TmdbMovie) -> Self {
        let poster = match movie.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", TMDB_POSTER_BASE, path),
            _ => String::new(),
        };

        MovieSearchResult {
            year: release_year(movie.release_date.as_deref()),
            title: movie.title,
            imdb_id: String::new(),
            poster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omdb_title_deserialization() {
        let json = r#"{
            "Title": "Pulp Fiction",
            "Year": "1994",
            "Plot": "The lives of two mob hitmen...",
            "imdbID": "tt0110912",
            "Response": "True"
        }"#;

        let response: OmdbTitleResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());

        let details: MovieDetails = response.into();
        assert_eq!(details.title, "Pulp Fiction");
        assert_eq!(details.year, "1994");
        assert_eq!(details.imdb_id, "tt0110912");
    }

    #[test]
    fn test_omdb_error_response() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let response: OmdbTitleResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn test_tmdb_movie_to_details_truncates_year() {
        let movie = TmdbMovie {
            title: "Inception".to_string(),
            release_date: Some("2010-07-16".to_string()),
            overview: "A thief who steals corporate secrets".to_string(),
            poster_path: None,
        };

        let details: MovieDetails = movie.into();
        assert_eq!(details.year, "2010");
        assert_eq!(details.plot, "A thief who steals corporate secrets");
        assert_eq!(details.imdb_id, "");
    }

    #[test]
    fn test_tmdb_movie_null_release_date() {
        let json = r#"{"title": "Untitled", "release_date": null, "poster_path": null}"#;
        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        let result: MovieSearchResult = movie.into();
        assert_eq!(result.year, "");
        assert_eq!(result.poster, "");
    }

    #[test]
    fn test_tmdb_movie_poster_url() {
        let movie = TmdbMovie {
            title: "Alien".to_string(),
            release_date: Some("1979-05-25".to_string()),
            overview: String::new(),
            poster_path: Some("/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg".to_string()),
        };

        let result: MovieSearchResult = movie.into();
        assert_eq!(
            result.poster,
            "https://image.tmdb.org/t/p/w185/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg"
        );
        assert_eq!(result.year, "1979");
    }
}
