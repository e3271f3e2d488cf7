mod map_dto;
mod search_dto;

pub use map_dto::{MapMarkerDto, MapViewDto};
pub use search_dto::{SearchRequestDto, SearchResponseDto};
