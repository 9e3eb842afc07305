//! Core types for the portfolio page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Visual state of the sticky page header.
///
/// Derived from every scroll sample; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    /// Full-height header (top of page or scrolling up)
    #[default]
    Full,
    /// Compact header while scrolling down
    Minimized,
    /// Header slid out of view while scrolling down
    Hidden,
}

impl HeaderState {
    /// CSS class applied to the header element
    pub fn class(&self) -> &'static str {
        match self {
            HeaderState::Full => "header",
            HeaderState::Minimized => "header minimized",
            HeaderState::Hidden => "header hidden",
        }
    }
}

/// How the header collapses when the user scrolls down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderCollapse {
    /// Shrink to a compact bar
    #[default]
    Minimize,
    /// Slide out of view entirely
    Hide,
}

impl HeaderCollapse {
    /// Header state entered while scrolling down past the threshold
    pub fn collapsed_state(&self) -> HeaderState {
        match self {
            HeaderCollapse::Minimize => HeaderState::Minimized,
            HeaderCollapse::Hide => HeaderState::Hidden,
        }
    }
}

/// Mobile navigation menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        matches!(self, NavState::Open)
    }

    pub(crate) fn toggle(&mut self) -> NavState {
        *self = match self {
            NavState::Closed => NavState::Open,
            NavState::Open => NavState::Closed,
        };
        *self
    }
}

/// Project-details modal state. Only one project may be shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectId),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Id of the project currently shown, if any
    pub fn project(&self) -> Option<ProjectId> {
        match self {
            ModalState::Open(id) => Some(*id),
            ModalState::Closed => None,
        }
    }
}

/// Submission toast visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible,
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored string form ("light" / "dark")
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the page root
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "page",
            Theme::Dark => "page dark-theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PortfolioError::Preference(format!("unknown theme {other:?}"))),
        }
    }
}

/// Integer key of a project record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

impl ProjectId {
    /// Parse the `data-project` attribute of a "view project" button
    pub fn parse_attr(attr: &str) -> Result<Self, PortfolioError> {
        attr.trim()
            .parse::<u32>()
            .map(ProjectId)
            .map_err(|_| PortfolioError::InvalidProjectId(attr.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category used by the project filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Game,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Game => "game",
        }
    }
}

/// Project filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Whether a card of `category` is shown under this filter
    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => *c == category,
        }
    }

    /// Label shown on the filter button
    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(ProjectCategory::Web) => "Web",
            ProjectFilter::Only(ProjectCategory::Game) => "Games",
        }
    }
}

/// Immutable project metadata rendered into the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    /// Technology tags, in display order
    pub technologies: &'static [&'static str],
    /// Feature bullet points, in display order
    pub features: &'static [&'static str],
    pub live_url: &'static str,
    pub category: ProjectCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_roundtrip_strings() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_project_id_parse_attr() {
        assert_eq!(ProjectId::parse_attr("2").unwrap(), ProjectId(2));
        assert_eq!(ProjectId::parse_attr(" 3 ").unwrap(), ProjectId(3));
        assert!(matches!(
            ProjectId::parse_attr("abc"),
            Err(PortfolioError::InvalidProjectId(_))
        ));
    }

    #[test]
    fn test_filter_matches() {
        assert!(ProjectFilter::All.matches(ProjectCategory::Game));
        assert!(ProjectFilter::Only(ProjectCategory::Web).matches(ProjectCategory::Web));
        assert!(!ProjectFilter::Only(ProjectCategory::Web).matches(ProjectCategory::Game));
    }

    #[test]
    fn test_collapse_mode_state() {
        assert_eq!(HeaderCollapse::Minimize.collapsed_state(), HeaderState::Minimized);
        assert_eq!(HeaderCollapse::Hide.collapsed_state(), HeaderState::Hidden);
    }

    #[test]
    fn test_nav_toggle() {
        let mut nav = NavState::default();
        assert_eq!(nav.toggle(), NavState::Open);
        assert_eq!(nav.toggle(), NavState::Closed);
    }
}
