pub mod sample_catalog_route;
