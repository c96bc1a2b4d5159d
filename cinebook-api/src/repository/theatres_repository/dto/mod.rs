mod theatre;

pub use theatre::*;
