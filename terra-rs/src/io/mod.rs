/// All logic for converting GeoJSON features into internal representations
pub mod import;

/// All logic for exporting internal representations back into GeoJSON
pub mod export;
