//! List collection entries

use anyhow::Result;

use crate::collections::{Collection, COLLECTION_NAMES};
use crate::content::{newest_first, ContentStore, Entry};
use crate::helpers::short_date;
use crate::Site;

/// List entries of one collection, or of all of them
pub fn run(site: &Site, collection: Option<&str>) -> Result<()> {
    let store = site.load()?;

    match collection {
        Some(name) => print_collection(&store, name)?,
        None => {
            for name in COLLECTION_NAMES {
                print_collection(&store, name)?;
            }
        }
    }

    Ok(())
}

fn print_collection(store: &ContentStore, name: &str) -> Result<()> {
    match name {
        "blog" | "posts" => print_entries("blog", newest_first(store.blog())),
        "talks" | "talk" => {
            let talks = newest_first(store.talks());
            println!("talks ({}):", talks.len());
            for talk in talks {
                println!(
                    "  {} - {} @ {} ({}) [{}]",
                    short_date(&talk.data.date),
                    talk.data.title,
                    talk.data.conference,
                    talk.data.status,
                    talk.id
                );
            }
        }
        "publications" | "publication" => {
            print_entries("publications", newest_first(store.publications()))
        }
        _ => {
            anyhow::bail!(
                "Unknown collection: {}. Available: {}",
                name,
                COLLECTION_NAMES.join(", ")
            );
        }
    }

    Ok(())
}

fn print_entries<C: Collection>(label: &str, entries: Vec<&Entry<C>>) {
    println!("{} ({}):", label, entries.len());
    for entry in entries {
        println!(
            "  {} - {} [{}]",
            short_date(&entry.data.date()),
            entry.data.title(),
            entry.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_unknown_collection() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert!(run(&site, None).is_ok());
        assert!(run(&site, Some("talks")).is_ok());
        let err = run(&site, Some("podcasts")).unwrap_err();
        assert!(err.to_string().contains("Available: blog, talks, publications"));
    }
}
