mod province_sync_service;

pub use province_sync_service::ProvinceSyncService;
