pub mod cover;
pub mod priority;
pub mod search;
pub mod subsets;
pub mod timing;

pub use cover::*;
pub use priority::*;
pub use search::*;
pub use subsets::*;
pub use timing::*;
