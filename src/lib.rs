#![warn(clippy::all, rust_2018_idioms)]

pub mod app;

pub use app::StudioApp;
