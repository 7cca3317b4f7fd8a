//! Page loaders.
//!
//! Each loader is a pure function of its input and the [`Catalog`], producing
//! the document a page template renders. Detail loaders fail with
//! [`Error::NotFound`] when nothing matches.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::goal::{Goal, GoalSummary};

/// How the `slug` route parameter of a goal detail page is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugMode {
    /// Slug is a decimal goal id.
    #[default]
    Id,
    /// Slug is an exact goal title.
    Title,
}

impl std::fmt::Display for SlugMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Title => write!(f, "title"),
        }
    }
}

/// Data for the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    /// Every goal, unprojected.
    pub goals: Vec<Goal>,
}

/// Data for the goal listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalListPage {
    /// Every goal, projected to its summary.
    pub goals_list: Vec<GoalSummary>,
}

/// Data for a goal detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPage {
    /// The matched goal.
    pub goal: Goal,
}

/// Load the home page: the whole dataset.
#[must_use]
pub fn load_home(catalog: &Catalog) -> HomePage {
    HomePage {
        goals: catalog.goals().to_vec(),
    }
}

/// Load the listing page: the whole dataset, projected.
#[must_use]
pub fn load_goal_list(catalog: &Catalog) -> GoalListPage {
    GoalListPage {
        goals_list: catalog.goals().iter().map(Goal::summary).collect(),
    }
}

/// Load a goal whose id is the integer prefix of `slug`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `slug` has no integer prefix or no goal has
/// that id.
pub fn load_goal_by_id(catalog: &Catalog, slug: &str) -> Result<GoalPage> {
    let id = parse_leading_int(slug);
    debug!(slug, ?id, "Looking up goal by id");
    id.and_then(|id| catalog.find_by_id(id))
        .map(|goal| GoalPage { goal: goal.clone() })
        .ok_or_else(Error::goal_not_found)
}

/// Load a goal whose title equals `slug` exactly.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no goal has that title.
pub fn load_goal_by_title(catalog: &Catalog, slug: &str) -> Result<GoalPage> {
    debug!(slug, "Looking up goal by title");
    catalog
        .find_by_title(slug)
        .map(|goal| GoalPage { goal: goal.clone() })
        .ok_or_else(Error::goal_not_found)
}

/// Load a goal detail page, interpreting `slug` per `mode`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if nothing matches.
pub fn load_goal(catalog: &Catalog, mode: SlugMode, slug: &str) -> Result<GoalPage> {
    match mode {
        SlugMode::Id => load_goal_by_id(catalog, slug),
        SlugMode::Title => load_goal_by_title(catalog, slug),
    }
}

/// Parse the leading decimal integer of `s`.
///
/// Leading whitespace is skipped, one optional sign is accepted, then the
/// longest run of ASCII digits is read. Trailing text is ignored, so `"1abc"`
/// yields 1. Returns `None` when there are no digits or the value overflows.
#[must_use]
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::builtin_goals;

    #[test]
    fn test_load_home_returns_everything() {
        let catalog = Catalog::builtin();
        let page = load_home(&catalog);
        assert_eq!(page.goals, builtin_goals());
    }

    #[test]
    fn test_load_goal_list_length() {
        let catalog = Catalog::builtin();
        let page = load_goal_list(&catalog);
        assert_eq!(page.goals_list.len(), catalog.len());
        assert_eq!(page.goals_list[0].title, "Get a 6-pack");
    }

    #[test]
    fn test_load_goal_list_empty() {
        let page = load_goal_list(&Catalog::default());
        assert!(page.goals_list.is_empty());
    }

    #[test]
    fn test_goal_list_wire_key() {
        let json = serde_json::to_value(load_goal_list(&Catalog::builtin())).unwrap();
        assert!(json["goals_list"].is_array());
    }

    #[test]
    fn test_load_goal_by_id_every_goal() {
        let catalog = Catalog::builtin();
        for goal in catalog.goals() {
            let page = load_goal_by_id(&catalog, &goal.id.to_string()).unwrap();
            assert_eq!(&page.goal, goal);
        }
    }

    #[test]
    fn test_load_goal_by_id_missing() {
        let catalog = Catalog::builtin();
        let err = load_goal_by_id(&catalog, "999").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Goal not found");

        assert!(load_goal_by_id(&catalog, "3").unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_goal_by_id_non_numeric() {
        let catalog = Catalog::builtin();
        assert!(load_goal_by_id(&catalog, "abc").unwrap_err().is_not_found());
        assert!(load_goal_by_id(&catalog, "").unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_goal_by_id_numeric_prefix() {
        let catalog = Catalog::builtin();
        let page = load_goal_by_id(&catalog, "2-run-a-marathon").unwrap();
        assert_eq!(page.goal.title, "Run a marathon");
    }

    #[test]
    fn test_load_goal_by_title() {
        let catalog = Catalog::builtin();
        let page = load_goal_by_title(&catalog, "Get a 6-pack").unwrap();
        assert_eq!(page.goal.id, 1);
    }

    #[test]
    fn test_load_goal_by_title_case_sensitive() {
        let catalog = Catalog::builtin();
        let err = load_goal_by_title(&catalog, "get a 6-pack").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_goal_dispatches_on_mode() {
        let catalog = Catalog::builtin();
        assert_eq!(load_goal(&catalog, SlugMode::Id, "1").unwrap().goal.id, 1);
        assert_eq!(
            load_goal(&catalog, SlugMode::Title, "Run a marathon")
                .unwrap()
                .goal
                .id,
            2
        );
        assert!(load_goal(&catalog, SlugMode::Title, "1").is_err());
        assert!(load_goal(&catalog, SlugMode::Id, "Run a marathon").is_err());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+9"), Some(9));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn test_slug_mode_display() {
        assert_eq!(SlugMode::Id.to_string(), "id");
        assert_eq!(SlugMode::Title.to_string(), "title");
        assert_eq!(SlugMode::default(), SlugMode::Id);
    }
}
