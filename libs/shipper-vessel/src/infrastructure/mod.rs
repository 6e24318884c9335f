mod http_vessel_client;

pub use http_vessel_client::HttpVesselClient;
