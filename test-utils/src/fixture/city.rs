//! City fixtures.

use entity::city;

/// Default test city name.
pub const DEFAULT_NAME: &str = "Test City";

/// Creates a city entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test City"`
/// - order_no: `0`
pub fn entity() -> city::Model {
    city::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        order_no: 0,
    }
}
