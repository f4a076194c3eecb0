//! Fetches the three gift-guide datasets and hands them over as one unit.

use serde::de::DeserializeOwned;
use shared::{
    domain::{Gift, Npc, Prop},
    error::LoadError,
};
use tracing::{debug, error, info};

mod source;

pub use source::{source_for, DataSource, FsSource, HttpSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Npcs,
    Props,
    Gifts,
}

impl Resource {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Npcs => "npcs.json",
            Self::Props => "props.json",
            Self::Gifts => "gifts.json",
        }
    }

    pub fn logical_name(self) -> &'static str {
        match self {
            Self::Npcs => "npcs",
            Self::Props => "props",
            Self::Gifts => "gifts",
        }
    }
}

/// The raw, not yet joined collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub npcs: Vec<Npc>,
    pub props: Vec<Prop>,
    pub gifts: Vec<Gift>,
}

/// Fetches and parses every [`Resource`] concurrently.
///
/// All fetches are awaited before returning. When any of them fails the
/// whole load fails with [`LoadError::Partial`] listing each failure; no
/// partial data is returned.
pub async fn load_datasets<S>(source: &S) -> Result<Datasets, LoadError>
where
    S: DataSource + ?Sized,
{
    let origin = source.describe();
    info!(%origin, "loading gift datasets");

    let (npcs, props, gifts) = futures::join!(
        fetch_records::<Npc, _>(source, Resource::Npcs),
        fetch_records::<Prop, _>(source, Resource::Props),
        fetch_records::<Gift, _>(source, Resource::Gifts),
    );

    let mut failures = Vec::new();
    let npcs = settle(Resource::Npcs, npcs, &mut failures);
    let props = settle(Resource::Props, props, &mut failures);
    let gifts = settle(Resource::Gifts, gifts, &mut failures);

    if !failures.is_empty() {
        return Err(LoadError::Partial { failures });
    }

    info!(
        %origin,
        npcs = npcs.len(),
        props = props.len(),
        gifts = gifts.len(),
        "gift datasets loaded"
    );
    Ok(Datasets { npcs, props, gifts })
}

async fn fetch_records<T, S>(source: &S, resource: Resource) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    S: DataSource + ?Sized,
{
    let bytes = source.fetch(resource.file_name()).await?;
    debug!(dataset = resource.logical_name(), bytes = bytes.len(), "dataset fetched");
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        resource: resource.file_name().to_string(),
        source,
    })
}

fn settle<T>(
    resource: Resource,
    result: Result<Vec<T>, LoadError>,
    failures: &mut Vec<LoadError>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            error!(dataset = resource.logical_name(), error = %err, "dataset failed to load");
            failures.push(err);
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
