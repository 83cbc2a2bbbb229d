#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::provinces::models::Province;
#[cfg(test)]
use crate::features::provinces::repositories::ProvinceStore;
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// Build a province whose code is the decimal form of its id
#[cfg(test)]
pub fn province(id: i32, name: &str) -> Province {
    Province {
        id,
        code: id.to_string(),
        name: name.to_string(),
    }
}

/// In-memory stand-in for the Postgres province store
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryProvinceStore {
    rows: Mutex<Vec<Province>>,
    replace_calls: AtomicUsize,
    fail: bool,
}

#[cfg(test)]
impl InMemoryProvinceStore {
    pub fn with_rows(rows: Vec<Province>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    /// Store whose every operation reports a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<Province> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|p| p.id);
        rows
    }

    pub fn replace_count(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl ProvinceStore for InMemoryProvinceStore {
    async fn replace_all(&self, provinces: &[Province]) -> Result<()> {
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        *self.rows.lock().unwrap() = provinces.to_vec();
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Province>> {
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.rows())
    }
}
