use std::fmt;
use std::str::FromStr;

use crate::types::ActivityId;

/// Screens reachable by path, mirroring the web client's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` and `/agenda`
    Agenda,
    /// `/atividades`
    Activities,
    /// `/atividades/add`
    NewActivity,
    /// `/atividades/:id`
    EditActivity(ActivityId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0} (expected /, /agenda, /atividades, /atividades/add or /atividades/<id>)")]
pub struct UnknownRoute(String);

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["agenda"] => Some(Route::Agenda),
            ["atividades"] => Some(Route::Activities),
            ["atividades", "add"] => Some(Route::NewActivity),
            ["atividades", id] => id.parse().ok().map(Route::EditActivity),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Agenda => "/agenda".to_string(),
            Route::Activities => "/atividades".to_string(),
            Route::NewActivity => "/atividades/add".to_string(),
            Route::EditActivity(id) => format!("/atividades/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Agenda));
        assert_eq!(Route::parse("/agenda"), Some(Route::Agenda));
        assert_eq!(Route::parse("/atividades"), Some(Route::Activities));
        assert_eq!(Route::parse("/atividades/"), Some(Route::Activities));
        assert_eq!(Route::parse("/atividades/add"), Some(Route::NewActivity));
        assert_eq!(Route::parse("/atividades/12"), Some(Route::EditActivity(12)));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/atividades/abc"), None);
        assert_eq!(Route::parse("/config"), None);
        assert_eq!(Route::parse("/atividades/1/edit"), None);
        assert!("/nope".parse::<Route>().is_err());
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Agenda,
            Route::Activities,
            Route::NewActivity,
            Route::EditActivity(3),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
