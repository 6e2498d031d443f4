mod params;

pub use params::QueryParams;
