pub mod canvas;
pub mod config;
pub mod consts;
pub mod error;
pub mod events;
pub mod geometry;
pub mod histogram;
pub mod interaction;
pub mod layers;
pub mod render;
pub mod session;
pub mod viewport;
