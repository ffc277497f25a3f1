//! Film catalog vocabulary: film types and person roles.
//!
//! The string values here must match the check constraints in
//! `20240101000001_create_content_schema.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// A feature film.
pub const FILM_TYPE_MOVIE: &str = "movie";

/// A television series.
pub const FILM_TYPE_TV_SHOW: &str = "tv show";

pub const ROLE_DIRECTOR: &str = "director";
pub const ROLE_ACTOR: &str = "actor";
pub const ROLE_WRITER: &str = "writer";

// ---------------------------------------------------------------------------
// Film type
// ---------------------------------------------------------------------------

/// Kind of catalog entry stored in `film_work.type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilmworkType {
    #[default]
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "tv show")]
    TvShow,
}

const VALID_FILM_TYPES: &[&str] = &[FILM_TYPE_MOVIE, FILM_TYPE_TV_SHOW];

impl FilmworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => FILM_TYPE_MOVIE,
            Self::TvShow => FILM_TYPE_TV_SHOW,
        }
    }

    /// Parse a film type from its stored string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            FILM_TYPE_MOVIE => Ok(Self::Movie),
            FILM_TYPE_TV_SHOW => Ok(Self::TvShow),
            _ => Err(CoreError::Validation(format!(
                "Invalid film type '{s}'. Must be one of: {}",
                VALID_FILM_TYPES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Person role
// ---------------------------------------------------------------------------

/// Role a person plays in a film, stored in `person_film_work.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonRole {
    Director,
    Actor,
    Writer,
}

const VALID_ROLES: &[&str] = &[ROLE_DIRECTOR, ROLE_ACTOR, ROLE_WRITER];

impl PersonRole {
    /// Every role, in the order the view fields are laid out.
    pub const ALL: [PersonRole; 3] = [Self::Actor, Self::Director, Self::Writer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Director => ROLE_DIRECTOR,
            Self::Actor => ROLE_ACTOR,
            Self::Writer => ROLE_WRITER,
        }
    }

    /// Name of the aggregated view field that collects people in this role.
    pub fn view_field(&self) -> &'static str {
        match self {
            Self::Director => "directors",
            Self::Actor => "actors",
            Self::Writer => "writers",
        }
    }

    /// Parse a role from its stored string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            ROLE_DIRECTOR => Ok(Self::Director),
            ROLE_ACTOR => Ok(Self::Actor),
            ROLE_WRITER => Ok(Self::Writer),
            _ => Err(CoreError::Validation(format!(
                "Invalid person role '{s}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- FilmworkType --------------------------------------------------------

    #[test]
    fn film_type_round_trips_through_str() {
        assert_eq!(FilmworkType::from_str("movie").unwrap(), FilmworkType::Movie);
        assert_eq!(FilmworkType::from_str("tv show").unwrap(), FilmworkType::TvShow);
        assert_eq!(FilmworkType::TvShow.as_str(), "tv show");
    }

    #[test]
    fn film_type_defaults_to_movie() {
        assert_eq!(FilmworkType::default(), FilmworkType::Movie);
    }

    #[test]
    fn film_type_rejects_unknown_value() {
        assert_matches!(FilmworkType::from_str("tv_show"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn film_type_serializes_with_space() {
        let json = serde_json::to_string(&FilmworkType::TvShow).unwrap();
        assert_eq!(json, "\"tv show\"");
    }

    // -- PersonRole ----------------------------------------------------------

    #[test]
    fn role_parses_all_three_values() {
        for role in PersonRole::ALL {
            assert_eq!(PersonRole::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn role_rejects_unknown_value() {
        let err = PersonRole::from_str("producer").unwrap_err();
        assert!(err.to_string().contains("director, actor, writer"));
    }

    #[test]
    fn role_view_fields_are_plural() {
        assert_eq!(PersonRole::Actor.view_field(), "actors");
        assert_eq!(PersonRole::Director.view_field(), "directors");
        assert_eq!(PersonRole::Writer.view_field(), "writers");
    }
}
