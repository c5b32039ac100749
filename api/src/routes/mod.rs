pub mod classify;
pub mod health_route;
pub mod pages;
pub mod samples;
