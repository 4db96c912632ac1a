pub mod geo_traits;
pub mod geodesic;
pub mod primitives;
pub mod rescale;
