use serde::Serialize;
use sqlx::FromRow;

use crate::core::error::{AppError, Result};
use crate::features::provinces::clients::RemoteProvince;

/// Province row as stored in the `provinces` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Province {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl TryFrom<RemoteProvince> for Province {
    type Error = AppError;

    /// `code` keeps the source identifier verbatim, `id` is its integer value
    fn try_from(remote: RemoteProvince) -> Result<Self> {
        let id = remote.id.parse::<i32>().map_err(|e| {
            AppError::Parse(format!("invalid province id '{}': {}", remote.id, e))
        })?;

        Ok(Self {
            id,
            code: remote.id,
            name: remote.name,
        })
    }
}

impl Province {
    /// Convert a whole fetched batch, failing on the first bad identifier
    pub fn from_remote_batch(remote: Vec<RemoteProvince>) -> Result<Vec<Self>> {
        remote.into_iter().map(Self::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: &str, name: &str) -> RemoteProvince {
        RemoteProvince {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_numeric_id_keeps_original_code() {
        let province = Province::try_from(remote("11", "ACEH")).unwrap();
        assert_eq!(
            province,
            Province {
                id: 11,
                code: "11".to_string(),
                name: "ACEH".to_string(),
            }
        );
    }

    #[test]
    fn test_leading_zero_is_preserved_in_code() {
        let province = Province::try_from(remote("07", "TEST")).unwrap();
        assert_eq!(province.id, 7);
        assert_eq!(province.code, "07");
    }

    #[test]
    fn test_non_numeric_id_is_parse_error() {
        let err = Province::try_from(remote("abc", "X")).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_batch_fails_on_first_bad_id() {
        let batch = vec![remote("11", "ACEH"), remote("1x", "BAD"), remote("12", "OK")];
        assert!(Province::from_remote_batch(batch).is_err());
    }

    #[test]
    fn test_empty_batch_is_empty() {
        assert!(Province::from_remote_batch(Vec::new()).unwrap().is_empty());
    }
}
