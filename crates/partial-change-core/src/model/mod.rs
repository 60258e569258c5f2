pub mod path;
pub mod path_set;

pub use path::Path;
pub use path_set::PathSet;
