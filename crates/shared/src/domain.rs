use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(MovieId);

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub genre: String,
}

impl Movie {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        year: i32,
        director: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: MovieId(id),
            title: title.into(),
            year,
            director: director.into(),
            genre: genre.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_serializes_with_bare_integer_id_in_field_order() {
        let movie = Movie::new(3, "The Dark Knight", 2008, "Christopher Nolan", "Action");
        let json = serde_json::to_string(&movie).expect("json");
        assert_eq!(
            json,
            r#"{"id":3,"title":"The Dark Knight","year":2008,"director":"Christopher Nolan","genre":"Action"}"#
        );
    }
}
