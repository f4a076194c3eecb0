use thiserror::Error;

use crate::domain::{NpcId, PropId};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {resource}: {source}")]
    Fetch {
        resource: String,
        #[source]
        source: BoxError,
    },
    #[error("failed to parse {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} dataset(s) failed to load: {}", .failures.len(), describe(.failures))]
    Partial { failures: Vec<LoadError> },
}

impl LoadError {
    pub fn fetch(resource: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Fetch {
            resource: resource.into(),
            source: source.into(),
        }
    }

    /// Resource names this error covers, flattening partial failures.
    pub fn resources(&self) -> Vec<&str> {
        match self {
            Self::Fetch { resource, .. } | Self::Parse { resource, .. } => vec![resource.as_str()],
            Self::Partial { failures } => failures.iter().flat_map(Self::resources).collect(),
        }
    }
}

fn describe(failures: &[LoadError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("npc id {0} appears more than once")]
    DuplicateNpc(NpcId),
    #[error("prop id {0} appears more than once")]
    DuplicateProp(PropId),
    #[error("gift #{gift} references unknown npc {npc}")]
    UnknownNpc { gift: usize, npc: NpcId },
    #[error("gift #{gift} references unknown prop {prop}")]
    UnknownProp { gift: usize, prop: PropId },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template node `{0}` not found")]
    MissingNode(String),
    #[error("render was requested before the view was ready")]
    NotReady,
    #[error("failed to format page")]
    Format(#[from] std::fmt::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
