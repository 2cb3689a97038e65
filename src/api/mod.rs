//! REST API module.
//!
//! Contains all API routes and handlers following the page's fetch contract.

mod notes;
mod pages;

pub use notes::*;
pub use pages::*;

use serde::{Deserialize, Serialize};

/// Acknowledgment body for deletions.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}
