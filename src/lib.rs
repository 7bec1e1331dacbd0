pub mod blobs;
pub mod contact;
pub mod date;
pub mod drawer;
pub mod hooks;
pub mod nav;
pub mod progress;
pub mod reveal;
pub mod routes;
pub mod sections;
pub mod theme;
pub mod typed;
