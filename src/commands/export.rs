//! Export the data store

use anyhow::Result;

use crate::Site;

/// Validate everything and write the data store
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let path = site.export()?;

    let duration = start.elapsed();
    tracing::info!("Exported in {:.2}s", duration.as_secs_f64());
    println!("Wrote {}", path.display());

    Ok(())
}
