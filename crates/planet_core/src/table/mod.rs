// Weighted tables - item -> weight mappings with single and distinct draws

pub mod weight;
pub mod weighted;

pub use weight::*;
pub use weighted::*;
