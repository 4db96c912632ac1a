//! Core library for dragging countries across a world map without lying about their size.
//! Shapes follow the pointer in degree space while a latitude-compensating rescale
//! keeps their geodesic area constant.

/// Entities to model a draggable world map and the shapes on it
pub mod entities;

/// Geometric primitives and geodesic algorithms
pub mod geometry;

/// Importing GeoJSON maps into and exporting them out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
