use crate::error::DirectoryError;
use crate::models::SubRegion;
use super::client::{build_url, get_json};

/// Path of the sub-region listing for `region_code`. An empty code is
/// kept as an empty segment; the directory is expected to reject it.
pub fn sub_regions_path(region_code: &str) -> String {
    format!("/estados/{}/municipios", urlencoding::encode(region_code))
}

/// Load the sub-regions of one region.
pub async fn load_sub_regions(
    client: &reqwest::Client,
    base_url: &str,
    order_by: &str,
    region_code: &str,
) -> Result<Vec<SubRegion>, DirectoryError> {
    let url = build_url(base_url, &sub_regions_path(region_code), &[("orderBy", order_by)]);
    let sub_regions: Vec<SubRegion> = get_json(client, &url).await?;
    tracing::debug!(region = %region_code, count = sub_regions.len(), "sub-regions loaded");
    Ok(sub_regions)
}
