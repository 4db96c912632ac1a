mod geo_point;
mod geo_rect;
mod region;
mod ring;

pub(crate) use ring::{vertex_bbox, vertex_centroid};

#[doc(inline)]
pub use geo_point::GeoPoint;
#[doc(inline)]
pub use geo_rect::GeoRect;
#[doc(inline)]
pub use region::Region;
#[doc(inline)]
pub use ring::Ring;
