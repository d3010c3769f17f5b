use std::collections::HashSet;

use shared::{
    domain::{Movie, MovieId},
    error::CatalogError,
};

/// The fixed movie collection. Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if movie.id.0 <= 0 {
                return Err(CatalogError::NonPositiveId(movie.id));
            }
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
            for (field, value) in [
                ("title", &movie.title),
                ("director", &movie.director),
                ("genre", &movie.genre),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyField {
                        id: movie.id,
                        field,
                    });
                }
            }
            if !(1000..=9999).contains(&movie.year) {
                return Err(CatalogError::InvalidYear {
                    id: movie.id,
                    year: movie.year,
                });
            }
        }
        Ok(Self { movies })
    }

    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed_movies())
    }

    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }
}

pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new(1, "The Shawshank Redemption", 1994, "Frank Darabont", "Drama"),
        Movie::new(2, "The Godfather", 1972, "Francis Ford Coppola", "Crime"),
        Movie::new(3, "The Dark Knight", 2008, "Christopher Nolan", "Action"),
        Movie::new(4, "Pulp Fiction", 1994, "Quentin Tarantino", "Crime"),
        Movie::new(5, "Forrest Gump", 1994, "Robert Zemeckis", "Drama"),
    ]
}

/// Parses a path segment into a movie id. Anything that is not a whole
/// base-10 `i64` yields `None` and is treated like an unknown id.
pub fn parse_movie_id(raw: &str) -> Option<MovieId> {
    raw.parse::<i64>().ok().map(MovieId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_passes_validation_in_insertion_order() {
        let catalog = Catalog::seeded().expect("seed");
        let ids: Vec<i64> = catalog.all().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn find_scans_by_id() {
        let catalog = Catalog::seeded().expect("seed");
        let movie = catalog.find(MovieId(4)).expect("movie 4");
        assert_eq!(movie.title, "Pulp Fiction");
        assert!(catalog.find(MovieId(6)).is_none());
        assert!(catalog.find(MovieId(0)).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            Movie::new(1, "A", 2000, "D", "G"),
            Movie::new(1, "B", 2001, "D", "G"),
        ])
        .expect_err("duplicate");
        assert_eq!(err, CatalogError::DuplicateId(MovieId(1)));
    }

    #[test]
    fn rejects_non_positive_ids_and_blank_fields() {
        let err = Catalog::new(vec![Movie::new(0, "A", 2000, "D", "G")]).expect_err("zero id");
        assert_eq!(err, CatalogError::NonPositiveId(MovieId(0)));

        let err = Catalog::new(vec![Movie::new(2, "A", 2000, "  ", "G")]).expect_err("blank");
        assert_eq!(
            err,
            CatalogError::EmptyField {
                id: MovieId(2),
                field: "director"
            }
        );
    }

    #[test]
    fn rejects_years_outside_four_digits() {
        let err = Catalog::new(vec![Movie::new(7, "A", 999, "D", "G")]).expect_err("year");
        assert_eq!(
            err,
            CatalogError::InvalidYear {
                id: MovieId(7),
                year: 999
            }
        );
    }

    #[test]
    fn parse_movie_id_requires_a_whole_integer() {
        assert_eq!(parse_movie_id("3"), Some(MovieId(3)));
        assert_eq!(parse_movie_id("-1"), Some(MovieId(-1)));
        assert_eq!(parse_movie_id("abc"), None);
        assert_eq!(parse_movie_id("3abc"), None);
        assert_eq!(parse_movie_id("1.5"), None);
        assert_eq!(parse_movie_id(""), None);
        assert_eq!(parse_movie_id("99999999999999999999"), None);
    }
}
