// sidcard/src/sdk/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{ApiCall, MockSdt};
pub use traits::SdtApi;
