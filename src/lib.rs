// Module declarations for the windsite analysis pipeline

// Core search and orchestration
pub mod core {
    pub mod search;
    pub mod pipeline;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod physics;
}

// Model definitions
pub mod models {
    pub mod grid;
    pub mod demand;
    pub mod selection;
}

// Data loaders
pub mod data {
    pub mod climate_loader;
    pub mod demand_loader;
    pub mod geo;
}

// Analysis and reporting
pub mod analysis {
    pub mod forecast;
    pub mod validation;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::core::search;
pub use crate::core::pipeline;
pub use crate::models::grid::GenerationGrid;
pub use crate::models::demand::DemandPoint;
pub use crate::models::selection::SiteSelection;
