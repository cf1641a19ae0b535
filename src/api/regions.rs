use crate::error::DirectoryError;
use crate::models::Region;
use super::client::{build_url, get_json};

/// Load every region from the directory, in the order the directory returns them.
pub async fn load_regions(
    client: &reqwest::Client,
    base_url: &str,
    order_by: &str,
) -> Result<Vec<Region>, DirectoryError> {
    let url = build_url(base_url, "/estados", &[("orderBy", order_by)]);
    let regions: Vec<Region> = get_json(client, &url).await?;
    tracing::debug!(count = regions.len(), "regions loaded");
    Ok(regions)
}
