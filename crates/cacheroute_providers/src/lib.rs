pub mod nominatim_api;
pub mod osrm_api;
pub mod segment_client;
