mod province_dto;

pub use province_dto::ProvinceResponseDto;
