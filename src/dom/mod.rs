//! DOM projection layer
//!
//! Everything that touches the browser lives here: locating cells, building
//! tables from extraction responses, projecting selection state onto the
//! page, durable storage and the clipboard. The data model never depends on
//! this module.

pub mod clipboard;
pub mod locator;
pub mod render;
pub mod storage;
