use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub places: PlacesConfig,
    pub seeding: SeedingConfig,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the cold storage API, without trailing slash
    pub api_url: String,
}

/// Google Places credentials and endpoint
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Maps key is not used for requests but must be present
    #[allow(dead_code)]
    pub maps_api_key: String,
    pub places_api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct SeedingConfig {
    /// Free-text location appended to the search query
    pub location: String,
    /// Search radius in meters
    pub search_radius: u32,
    /// Fixes the random stream when set
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Read from the process environment; `.env` is loaded by `main`
    pub fn from_env() -> Result<Self, String> {
        Self::from_source(&|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_source(get: &dyn Fn(&str) -> Option<String>) -> Result<Self, String> {
        Ok(Config {
            backend: BackendConfig::from_source(get)?,
            places: PlacesConfig::from_source(get)?,
            seeding: SeedingConfig::from_source(get)?,
        })
    }
}

impl BackendConfig {
    const DEFAULT_API_URL: &'static str = "https://coldstoragehub.onrender.com/API";

    pub fn from_source(get: &dyn Fn(&str) -> Option<String>) -> Result<Self, String> {
        let api_url = get("VITE_API_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self { api_url })
    }
}

impl PlacesConfig {
    const DEFAULT_BASE_URL: &'static str = "https://maps.googleapis.com/maps/api/place";

    pub fn from_source(get: &dyn Fn(&str) -> Option<String>) -> Result<Self, String> {
        // Empty keys count as missing
        let maps_api_key = get("VITE_GOOGLE_MAPS_API_KEY")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "VITE_GOOGLE_MAPS_API_KEY environment variable is required".to_string())?;

        let places_api_key = get("VITE_GOOGLE_PLACES_API_KEY")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                "VITE_GOOGLE_PLACES_API_KEY environment variable is required".to_string()
            })?;

        let base_url = get("PLACES_BASE_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            maps_api_key,
            places_api_key,
            base_url,
        })
    }
}

impl SeedingConfig {
    const DEFAULT_LOCATION: &'static str = "Osaka, Japan";
    const DEFAULT_SEARCH_RADIUS: u32 = 5000;

    pub fn from_source(get: &dyn Fn(&str) -> Option<String>) -> Result<Self, String> {
        let location = get("SEED_LOCATION")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOCATION.to_string());

        let search_radius = get("SEED_SEARCH_RADIUS")
            .unwrap_or_else(|| Self::DEFAULT_SEARCH_RADIUS.to_string())
            .parse::<u32>()
            .map_err(|_| "SEED_SEARCH_RADIUS must be a valid number".to_string())?;

        let rng_seed = get("SEED_RNG_SEED")
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<u64>())
            .transpose()
            .map_err(|_| "SEED_RNG_SEED must be a valid unsigned integer".to_string())?;

        Ok(Self {
            location,
            search_radius,
            rng_seed,
        })
    }
}
