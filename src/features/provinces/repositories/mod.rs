mod province_store;

pub use province_store::{PgProvinceStore, ProvinceStore};
