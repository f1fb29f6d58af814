pub mod chart;
pub mod fuel;
pub mod price;
pub mod record;

pub use chart::*;
pub use fuel::*;
pub use price::*;
pub use record::*;
