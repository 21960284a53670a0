//! Domain types shared by forms, dispatchers and routes.

pub mod lead;
