
pub use self::sink::{RecordingSink, SharedRegistry};
