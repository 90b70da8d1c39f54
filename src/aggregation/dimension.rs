//! Leaderboard dimensions
//!
//! Each dimension is described once: which event field it groups by,
//! which first-seen fields ride along with the group, and how its table
//! looks. The engine and the projector are both driven by these
//! descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::projection::{CellSource, ColumnSpec, TableShape};
use crate::types::RequestEvent;

/// An event field a descriptor can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ModTitle,
    ModUrl,
    ModAuthor,
    ModAuthorUrl,
    RequestingRedditor,
}

impl Field {
    /// Borrow this field's value from an event
    pub fn extract<'a>(&self, event: &'a RequestEvent) -> &'a str {
        match self {
            Field::ModTitle => &event.mod_info.title,
            Field::ModUrl => &event.mod_info.url,
            Field::ModAuthor => &event.mod_info.author,
            Field::ModAuthorUrl => &event.mod_info.author_url,
            Field::RequestingRedditor => &event.requesting_redditor,
        }
    }
}

/// Everything that distinguishes one leaderboard from another
#[derive(Debug, Clone, Copy)]
pub struct DimensionDescriptor {
    /// Field events are grouped by
    pub group_field: Field,
    /// Auxiliary name and the field whose first-seen value fills it
    pub auxiliary: &'static [(&'static str, Field)],
    /// Display shape of the projected table
    pub table: TableShape,
}

const MODS: DimensionDescriptor = DimensionDescriptor {
    group_field: Field::ModTitle,
    auxiliary: &[("url", Field::ModUrl), ("author", Field::ModAuthor)],
    table: TableShape {
        title: "Mods",
        sort_column: 2,
        columns: &[
            ColumnSpec::new("Mod", 50, CellSource::Key),
            ColumnSpec::new("Author", 30, CellSource::Aux("author")),
            ColumnSpec::new("Count", 20, CellSource::Count),
        ],
    },
};

const AUTHORS: DimensionDescriptor = DimensionDescriptor {
    group_field: Field::ModAuthor,
    auxiliary: &[("url", Field::ModAuthorUrl)],
    table: TableShape {
        title: "Authors",
        sort_column: 1,
        columns: &[
            ColumnSpec::new("Author", 80, CellSource::Key),
            ColumnSpec::new("Count", 20, CellSource::Count),
        ],
    },
};

const REQUESTERS: DimensionDescriptor = DimensionDescriptor {
    group_field: Field::RequestingRedditor,
    auxiliary: &[],
    table: TableShape {
        title: "Linkers",
        sort_column: 1,
        columns: &[
            ColumnSpec::new("Redditor", 80, CellSource::Key),
            ColumnSpec::new("Count", 20, CellSource::Count),
        ],
    },
};

/// The field a leaderboard groups by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Group by mod title
    Mods,
    /// Group by mod author
    Authors,
    /// Group by the redditor who requested the link
    Requesters,
}

impl Dimension {
    /// All dimensions in navigation order
    pub const ALL: [Dimension; 3] = [Dimension::Mods, Dimension::Authors, Dimension::Requesters];

    pub fn descriptor(&self) -> &'static DimensionDescriptor {
        match self {
            Dimension::Mods => &MODS,
            Dimension::Authors => &AUTHORS,
            Dimension::Requesters => &REQUESTERS,
        }
    }

    /// Metric identifier
    pub fn id(&self) -> &'static str {
        match self {
            Dimension::Mods => "mods",
            Dimension::Authors => "authors",
            Dimension::Requesters => "requesters",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        self.descriptor().table.title
    }

    /// Navigation path of the dimension's page
    pub fn path(&self) -> &'static str {
        match self {
            Dimension::Mods => "/mods",
            Dimension::Authors => "/authors",
            Dimension::Requesters => "/linkers",
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            Dimension::Mods => "Teddy :: Top mods",
            Dimension::Authors => "Teddy :: Top authors",
            Dimension::Requesters => "Teddy :: Top linkers",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Dimension {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mods" => Ok(Dimension::Mods),
            "authors" => Ok(Dimension::Authors),
            "requesters" | "linkers" => Ok(Dimension::Requesters),
            _ => Err(StatsError::InvalidDimension(s.to_string())),
        }
    }
}

/// Navigation entry for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Links to every leaderboard page, in navigation order
pub fn navigation_links() -> Vec<NavLink> {
    Dimension::ALL
        .iter()
        .map(|d| NavLink {
            label: d.label(),
            path: d.path(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModRecord;

    #[test]
    fn test_parse_metric_names() {
        assert_eq!("mods".parse::<Dimension>().unwrap(), Dimension::Mods);
        assert_eq!("Authors".parse::<Dimension>().unwrap(), Dimension::Authors);
        assert_eq!("requesters".parse::<Dimension>().unwrap(), Dimension::Requesters);
        assert_eq!("linkers".parse::<Dimension>().unwrap(), Dimension::Requesters);
    }

    #[test]
    fn test_unknown_metric_is_invalid_dimension() {
        let err = "karma".parse::<Dimension>().unwrap_err();
        assert!(matches!(err, StatsError::InvalidDimension(name) if name == "karma"));
    }

    #[test]
    fn test_labels_and_paths() {
        let links = navigation_links();
        let labels: Vec<_> = links.iter().map(|l| l.label).collect();
        let paths: Vec<_> = links.iter().map(|l| l.path).collect();
        assert_eq!(labels, vec!["Mods", "Authors", "Linkers"]);
        assert_eq!(paths, vec!["/mods", "/authors", "/linkers"]);
    }

    #[test]
    fn test_field_extract() {
        let event = RequestEvent::new(
            "carol",
            ModRecord::new("Fancy Armor", "https://mods/1", "Alice").with_author_url("https://alice"),
        );

        assert_eq!(Field::ModTitle.extract(&event), "Fancy Armor");
        assert_eq!(Field::ModUrl.extract(&event), "https://mods/1");
        assert_eq!(Field::ModAuthor.extract(&event), "Alice");
        assert_eq!(Field::ModAuthorUrl.extract(&event), "https://alice");
        assert_eq!(Field::RequestingRedditor.extract(&event), "carol");
    }

    #[test]
    fn test_every_shape_fills_the_width() {
        for dimension in Dimension::ALL {
            let shape = &dimension.descriptor().table;
            let total: u32 = shape.columns.iter().map(|c| c.width_percent as u32).sum();
            assert_eq!(total, 100, "{} widths", dimension);
            assert!(shape.sort_column < shape.columns.len());
        }
    }
}
