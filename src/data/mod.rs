pub mod geojson;
pub mod regions;
