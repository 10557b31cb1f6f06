// Preview layout: the one-page density heuristic and the typography it drives.

pub mod density;
pub mod typography;

pub use density::{default_density_config, estimate_lines, estimate_scale, DensityConfig};
pub use typography::PreviewStyles;
