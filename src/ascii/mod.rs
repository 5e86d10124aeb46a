pub mod natural;

pub use natural::{Natural, natural};
