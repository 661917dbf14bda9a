use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::Arc;
use validator::Validate;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::features::places::{CandidateService, GooglePlacesClient};
use crate::features::users::{BackendUsersClient, OwnerService};
use crate::features::warehouses::models::{CreateWarehouseRequest, WarehouseDraft};
use crate::features::warehouses::services::synthesize_warehouse;
use crate::features::warehouses::{BackendWarehousesClient, CreateOutcome};

/// Counts collected over one seeding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Candidate places that made it through the details lookup
    pub found: usize,
    pub created: usize,
    pub failed: usize,
    /// Set when the backend had no owners and nothing was submitted
    pub skipped_no_owners: bool,
}

/// Runs the whole pipeline: search, synthesize, resolve owners, persist
pub struct SeedingService {
    candidate_service: CandidateService,
    owner_service: OwnerService,
    warehouses_client: Arc<BackendWarehousesClient>,
    location: String,
    rng: StdRng,
}

impl SeedingService {
    pub fn new(
        candidate_service: CandidateService,
        owner_service: OwnerService,
        warehouses_client: Arc<BackendWarehousesClient>,
        location: String,
        rng: StdRng,
    ) -> Self {
        Self {
            candidate_service,
            owner_service,
            warehouses_client,
            location,
            rng,
        }
    }

    /// Wire up all clients from configuration, sharing one HTTP client
    pub fn from_config(config: &Config) -> Self {
        let http_client = reqwest::Client::new();

        let places_client = Arc::new(GooglePlacesClient::new(
            http_client.clone(),
            &config.places,
        ));
        let candidate_service =
            CandidateService::new(places_client, config.seeding.search_radius);

        let users_client = Arc::new(BackendUsersClient::new(
            http_client.clone(),
            config.backend.api_url.clone(),
        ));
        let owner_service = OwnerService::new(users_client);

        let warehouses_client = Arc::new(BackendWarehousesClient::new(
            http_client,
            config.backend.api_url.clone(),
        ));

        let rng = match config.seeding.rng_seed {
            Some(seed) => {
                tracing::info!("Using fixed random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self::new(
            candidate_service,
            owner_service,
            warehouses_client,
            config.seeding.location.clone(),
            rng,
        )
    }

    /// Execute one seeding run.
    ///
    /// Places-service failures and an unreachable user listing are returned as
    /// errors. An empty search or an empty owner pool ends the run early with
    /// a report; individual create failures are counted and do not stop the loop.
    pub async fn run(&mut self) -> Result<SeedReport> {
        tracing::info!("Searching for warehouses in {}...", self.location);

        let candidates = self
            .candidate_service
            .fetch_candidates(&self.location)
            .await?;

        tracing::info!("Found {} warehouses in {}", candidates.len(), self.location);

        if candidates.is_empty() {
            tracing::info!("No warehouses found in {}", self.location);
            return Ok(SeedReport::default());
        }

        let drafts: Vec<WarehouseDraft> = candidates
            .iter()
            .map(|candidate| synthesize_warehouse(candidate, &mut self.rng))
            .collect();

        let owners = self.owner_service.resolve_owner_pool().await?;

        let mut report = self.persist(drafts, &owners).await;
        report.found = candidates.len();

        Ok(report)
    }

    /// Submit each draft with a uniformly chosen owner. Nothing is sent when
    /// the owner pool is empty.
    pub async fn persist(&mut self, drafts: Vec<WarehouseDraft>, owners: &[i64]) -> SeedReport {
        let mut report = SeedReport {
            found: drafts.len(),
            ..SeedReport::default()
        };

        if owners.is_empty() {
            tracing::warn!("No existing owners in the backend, skipping warehouse creation");
            report.skipped_no_owners = true;
            return report;
        }

        for draft in drafts {
            let Some(&owner_id) = owners.choose(&mut self.rng) else {
                break;
            };

            let request = CreateWarehouseRequest::new(draft, owner_id);
            let name = request.warehouse.name.clone();

            if let Err(e) = request.validate() {
                tracing::error!("Refusing to submit warehouse {}: {}", name, e);
                report.failed += 1;
                continue;
            }

            match self.warehouses_client.create_warehouse(&request).await {
                Ok(CreateOutcome::Created) => {
                    tracing::info!("Warehouse created: {} (owner {})", name, owner_id);
                    report.created += 1;
                }
                Ok(CreateOutcome::Rejected { status, body }) => {
                    tracing::error!(
                        "Error creating warehouse {}: HTTP {} - {}",
                        name,
                        status,
                        body
                    );
                    report.failed += 1;
                }
                Err(e) => {
                    tracing::error!("Error creating warehouse {}: {}", name, e);
                    report.failed += 1;
                }
            }
        }

        report
    }
}
