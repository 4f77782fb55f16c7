//! Test support module
//!
//! Mock device enumerators for exercising the listing pipeline and the CLI
//! without a camera attached, and on hosts that are not running Windows.

pub mod mock_device;

pub use mock_device::{MockDeviceEntry, MockEnumerator};
