pub mod compute;
pub mod config;
pub mod connection;
pub mod drawing;
pub mod link;
pub mod lookup;
pub mod node;
pub mod project;
pub mod snapshot;
pub mod summary;
pub mod template;
pub mod version;

use crate::core::domain::error::{Gns3Error, Gns3Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Overwrites the attributes of `target` with the keys present in `response`.
///
/// Keys the target type does not know are ignored, keys absent from the
/// response keep their local value. A non-object response leaves the target
/// untouched.
pub(crate) fn apply_response<T>(target: &mut T, response: Value) -> Gns3Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(changes) = response else {
        return Ok(());
    };
    let mut current = serde_json::to_value(&*target)
        .map_err(|e| Gns3Error::Connection(format!("Failed to encode local state: {}", e)))?;
    if let Value::Object(fields) = &mut current {
        fields.extend(changes);
    }
    *target = serde_json::from_value(current)
        .map_err(|e| Gns3Error::Connection(format!("Failed to parse response: {}", e)))?;
    Ok(())
}

/// Serializes `value` into a JSON object, dropping the listed keys.
pub(crate) fn object_without<T: Serialize>(
    value: &T,
    excluded: &[&str],
) -> Gns3Result<serde_json::Map<String, Value>> {
    let encoded = serde_json::to_value(value)
        .map_err(|e| Gns3Error::Connection(format!("Failed to encode request: {}", e)))?;
    let mut fields = match encoded {
        Value::Object(fields) => fields,
        _ => serde_json::Map::new(),
    };
    fields.retain(|key, value| !excluded.contains(&key.as_str()) && !value.is_null());
    Ok(fields)
}
