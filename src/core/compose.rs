//! Compose file image extraction
//!
//! Reads a docker-compose document and lists the `image` of every service,
//! in the order the services are declared. Services without an image (for
//! example ones that only `build:`) are skipped. Duplicates are kept.

use std::io::Read;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{AirGapperError, DocumentError, FileError};
use crate::infra::filesystem;

/// Short description of a YAML node for error messages
fn kind_of(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
    .to_string()
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Image reference for a scalar `image` value
fn image_text(service: &str, image: &Value) -> Result<String, DocumentError> {
    match image {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(DocumentError::InvalidImage {
            service: service.to_string(),
            found: kind_of(other),
        }),
    }
}

/// Extract image references from compose document text
///
/// YAML tags are kept as plain data and never resolved to constructors.
/// Merge keys (`<<: *anchor`) are applied before services are read.
///
/// # Errors
///
/// * `DocumentError::Parse` - text is not valid YAML
/// * `DocumentError::NotAMapping` - the document is not a mapping
/// * `DocumentError::InvalidServices` - `services` is not a mapping
/// * `DocumentError::InvalidService` - a service definition is not a mapping
/// * `DocumentError::InvalidImage` - an `image` is a sequence or mapping
pub fn extract_images_from_str(content: &str) -> Result<Vec<String>, DocumentError> {
    let mut document: Value =
        serde_yaml::from_str(content).map_err(|e| DocumentError::Parse(e.to_string()))?;
    document
        .apply_merge()
        .map_err(|e| DocumentError::Parse(e.to_string()))?;

    let document = match document {
        Value::Mapping(document) => document,
        other => {
            return Err(DocumentError::NotAMapping {
                found: kind_of(&other),
            })
        }
    };

    let services = match document.get("services") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Mapping(services)) => services,
        Some(other) => {
            return Err(DocumentError::InvalidServices {
                found: kind_of(other),
            })
        }
    };

    let mut images = Vec::new();
    for (name, definition) in services {
        let service = key_text(name);
        match definition {
            Value::Null => {}
            Value::Mapping(definition) => {
                if let Some(image) = definition.get("image") {
                    images.push(image_text(&service, image)?);
                }
            }
            other => {
                return Err(DocumentError::InvalidService {
                    service,
                    found: kind_of(other),
                })
            }
        }
    }

    Ok(images)
}

/// Extract image references from raw document bytes
///
/// Bytes that are not UTF-8 are a `DocumentError::Parse`.
pub fn extract_images_from_bytes(content: &[u8]) -> Result<Vec<String>, DocumentError> {
    let content = std::str::from_utf8(content)
        .map_err(|e| DocumentError::Parse(format!("document is not valid UTF-8: {e}")))?;
    extract_images_from_str(content)
}

/// Extract image references from a reader
pub fn extract_images<R: Read>(mut reader: R) -> Result<Vec<String>, AirGapperError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| FileError::ReadStdin {
            error: e.to_string(),
        })?;
    Ok(extract_images_from_bytes(&content)?)
}

/// Extract image references from `path`, or from standard input when `None`
pub fn read_images(path: Option<&Path>) -> Result<Vec<String>, AirGapperError> {
    match path {
        Some(path) => {
            let content = filesystem::read_bytes(path)?;
            Ok(extract_images_from_bytes(&content)?)
        }
        None => {
            tracing::debug!("Reading compose document from standard input");
            extract_images(std::io::stdin().lock())
        }
    }
}
