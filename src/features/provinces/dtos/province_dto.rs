use serde::{Deserialize, Serialize};

use crate::features::provinces::models::Province;

/// Response DTO for province data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceResponseDto {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            id: province.id,
            code: province.code,
            name: province.name,
        }
    }
}
