use std::collections::BTreeMap;
use std::iter::FromIterator;

use logmap_core::errors::{ErrorInfo, LogmapError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

fn serde_error(code: &str, err: impl ToString) -> LogmapError {
    LogmapError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ordered = BTreeMap::new();
            for (key, val) in map {
                ordered.insert(key, canonicalize(val));
            }
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => {
            let canonical_values = values.into_iter().map(canonicalize).collect();
            Value::Array(canonical_values)
        }
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, LogmapError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Restores a value from canonical JSON bytes.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, LogmapError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, LogmapError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logmap_core::SweepConfig;

    #[test]
    fn repeated_hashing_is_stable() {
        let config = SweepConfig::default();
        let first = stable_hash_string(&config).unwrap();
        let second = stable_hash_string(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn canonical_bytes_round_trip() {
        let config = SweepConfig::default();
        let bytes = to_canonical_json_bytes(&config).unwrap();
        let restored: SweepConfig = from_json_slice(&bytes).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn distinct_configs_hash_differently() {
        let base = SweepConfig::default();
        let changed = SweepConfig {
            samples: 301,
            ..base.clone()
        };
        assert_ne!(
            stable_hash_string(&base).unwrap(),
            stable_hash_string(&changed).unwrap()
        );
    }
}
