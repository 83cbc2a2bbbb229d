mod province_source_client;

pub use province_source_client::{ProvinceSourceClient, RemoteProvince};
