//! Content store - all collections, loaded and queryable

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::loader::{ContentLoader, Loaded};
use super::Entry;
use crate::collections::{BlogPost, Collection, Publication, Talk, TalkStatus};
use crate::error::{ContentError, EntryError, Result};
use crate::Site;

/// Every collection of the site, keyed by entry id
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    blog: IndexMap<String, Entry<BlogPost>>,
    talks: IndexMap<String, Entry<Talk>>,
    publications: IndexMap<String, Entry<Publication>>,
}

/// Outcome of validating every collection
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Valid entry count per collection, in declaration order
    pub counts: Vec<(&'static str, usize)>,
    pub errors: Vec<EntryError>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl ContentStore {
    /// Load all collections; any invalid entry fails the whole load
    pub fn load(site: &Site) -> Result<Self> {
        let (store, errors) = Self::load_lenient(site)?;
        if !errors.is_empty() {
            return Err(ContentError::InvalidEntries(errors));
        }

        tracing::info!(
            "Loaded {} blog posts, {} talks and {} publications",
            store.blog.len(),
            store.talks.len(),
            store.publications.len()
        );

        Ok(store)
    }

    /// Validate all collections and report every problem found
    pub fn check(site: &Site) -> Result<CheckReport> {
        let (store, errors) = Self::load_lenient(site)?;
        Ok(CheckReport {
            counts: vec![
                (BlogPost::NAME, store.blog.len()),
                (Talk::NAME, store.talks.len()),
                (Publication::NAME, store.publications.len()),
            ],
            errors,
        })
    }

    fn load_lenient(site: &Site) -> Result<(Self, Vec<EntryError>)> {
        let loader = ContentLoader::new(site);
        let mut errors = Vec::new();

        let blog = collect(loader.load::<BlogPost>()?, &mut errors);
        let talks = collect(loader.load::<Talk>()?, &mut errors);
        let publications = collect(loader.load::<Publication>()?, &mut errors);

        Ok((
            Self {
                blog,
                talks,
                publications,
            },
            errors,
        ))
    }

    pub fn blog(&self) -> &IndexMap<String, Entry<BlogPost>> {
        &self.blog
    }

    pub fn talks(&self) -> &IndexMap<String, Entry<Talk>> {
        &self.talks
    }

    pub fn publications(&self) -> &IndexMap<String, Entry<Publication>> {
        &self.publications
    }

    /// Total number of entries across collections
    pub fn len(&self) -> usize {
        self.blog.len() + self.talks.len() + self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up one entry of any collection, as JSON
    pub fn get_entry(&self, collection: &str, id: &str) -> Result<Option<JsonValue>> {
        let entry = match collection {
            c if c == BlogPost::NAME => self.blog.get(id).map(serde_json::to_value),
            c if c == Talk::NAME => self.talks.get(id).map(serde_json::to_value),
            c if c == Publication::NAME => self.publications.get(id).map(serde_json::to_value),
            other => return Err(ContentError::UnknownCollection(other.to_string())),
        };
        Ok(entry.transpose()?)
    }

    /// All entries of one collection as JSON, keyed by id
    pub fn collection_json(&self, collection: &str) -> Result<JsonValue> {
        let value = match collection {
            c if c == BlogPost::NAME => serde_json::to_value(&self.blog)?,
            c if c == Talk::NAME => serde_json::to_value(&self.talks)?,
            c if c == Publication::NAME => serde_json::to_value(&self.publications)?,
            other => return Err(ContentError::UnknownCollection(other.to_string())),
        };
        Ok(value)
    }

    /// Blog posts, newest first
    pub fn sorted_blog(&self) -> Vec<&Entry<BlogPost>> {
        newest_first(&self.blog)
    }

    /// Upcoming talks, soonest first
    pub fn upcoming_talks(&self) -> Vec<&Entry<Talk>> {
        let mut talks: Vec<_> = self
            .talks
            .values()
            .filter(|t| t.data.status == TalkStatus::Upcoming)
            .collect();
        talks.sort_by(|a, b| a.data.date.cmp(&b.data.date).then_with(|| a.id.cmp(&b.id)));
        talks
    }

    /// Past talks, most recent first
    pub fn past_talks(&self) -> Vec<&Entry<Talk>> {
        newest_first(&self.talks)
            .into_iter()
            .filter(|t| t.data.status == TalkStatus::Past)
            .collect()
    }

    /// Featured publications, newest first
    pub fn featured_publications(&self) -> Vec<&Entry<Publication>> {
        newest_first(&self.publications)
            .into_iter()
            .filter(|p| p.data.featured)
            .collect()
    }
}

fn collect<C>(loaded: Loaded<C>, errors: &mut Vec<EntryError>) -> IndexMap<String, Entry<C>> {
    errors.extend(loaded.errors);
    loaded.entries
}

/// Sort by date descending; ties broken by id for a stable order
pub fn newest_first<C: Collection>(entries: &IndexMap<String, Entry<C>>) -> Vec<&Entry<C>> {
    let mut sorted: Vec<_> = entries.values().collect();
    sorted.sort_by(|a, b| {
        b.data
            .date()
            .cmp(&a.data.date())
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}
