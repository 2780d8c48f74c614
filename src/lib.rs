#![forbid(unsafe_code)]

pub mod archive;
pub mod cli;
pub mod logging;
pub mod logparse;
pub mod model;
pub mod render;
pub mod routes;
pub mod views;
