use crate::config::Config;
use crate::services::dataset::{Dataset, DatasetError};
use crate::services::location::LocationService;
use crate::utils::file::{write_json_pretty, FileError};
use std::path::Path;
use tracing::info;

pub async fn load_location_service(
    dataset_path: Option<&Path>,
) -> Result<LocationService, DatasetError> {
    let dataset = match dataset_path {
        Some(path) => {
            info!("Loading dataset from {}", path.display());
            Dataset::from_file(path).await?
        }
        None => {
            info!("Loading built-in dataset");
            Dataset::embedded()?
        }
    };

    let service = LocationService::new(dataset);
    info!(
        "Dataset ready: {} countries, {} states, {} cities",
        service.country_count(),
        service.state_count(),
        service.city_count()
    );

    Ok(service)
}

pub async fn export_hierarchy(
    location_service: &LocationService,
    config: &Config,
    destination: &Path,
) -> Result<(), FileError> {
    let hierarchy = location_service.hierarchy(&config.allowed_countries);
    info!("Exporting {} countries", hierarchy.len());
    write_json_pretty(&hierarchy, destination).await
}
