//! Loading and saving template documents as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StudioError, StudioResult};
use crate::model::Template;

/// File extension used for template documents
pub const TEMPLATE_EXTENSION: &str = "json";

/// Parse a template from a JSON string
pub fn from_json_str(json: &str) -> StudioResult<Template> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a template to pretty-printed JSON.
///
/// Fails with [`StudioError::NonFinite`] when a multiplier is NaN or
/// infinite; JSON would store it as `null` and the file would not load back.
pub fn to_json_string(template: &Template) -> StudioResult<String> {
    ensure_finite(template)?;
    Ok(serde_json::to_string_pretty(template)?)
}

/// Reject NaN and infinite decimals anywhere in the document
pub fn ensure_finite(template: &Template) -> StudioResult<()> {
    let army = template
        .army_multipliers
        .entries()
        .into_iter()
        .map(|(name, v)| (format!("armyMultipliers.{}", name), v));
    let shops = template.shops.iter().enumerate().filter_map(|(i, shop)| {
        shop.price_multiplier
            .map(|v| (format!("shops[{}].priceMultiplier", i), v))
    });

    match army.chain(shops).find(|(_, v)| !v.is_finite()) {
        Some((field, value)) => Err(StudioError::NonFinite { field, value }),
        None => Ok(()),
    }
}

/// Read a template document from disk
pub fn load_template(path: &Path) -> StudioResult<Template> {
    let json = fs::read_to_string(path)?;
    let template = from_json_str(&json)?;
    tracing::info!(
        path = %path.display(),
        zones = template.zones.len(),
        connections = template.connections.len(),
        "loaded template"
    );
    Ok(template)
}

/// Write a template document to disk.
///
/// The JSON is written to a sibling temporary file first and then renamed
/// over the destination so a failed write never truncates an existing file.
pub fn save_template(path: &Path, template: &Template) -> StudioResult<()> {
    let json = to_json_string(template)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json.as_bytes())?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    tracing::info!(path = %path.display(), "saved template");
    Ok(())
}

/// Append the template extension when the path has none
pub fn with_template_extension(path: PathBuf) -> PathBuf {
    ensure_extension(path, TEMPLATE_EXTENSION)
}

/// Append `ext` when the path has no extension
pub fn ensure_extension(path: PathBuf, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(ext)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_added_only_when_missing() {
        assert_eq!(
            with_template_extension(PathBuf::from("maps/jebus")),
            PathBuf::from("maps/jebus.json")
        );
        assert_eq!(
            with_template_extension(PathBuf::from("maps/jebus.rmg")),
            PathBuf::from("maps/jebus.rmg")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("graph"), "png"),
            PathBuf::from("graph.png")
        );
    }

    #[test]
    fn tmp_path_is_sibling() {
        assert_eq!(
            tmp_path(Path::new("/a/b/t.json")),
            PathBuf::from("/a/b/t.json.tmp")
        );
    }

    #[test]
    fn json_string_roundtrip() {
        let template = Template::starter("Ring", 3);
        let json = to_json_string(&template).unwrap();
        assert_eq!(from_json_str(&json).unwrap(), template);
    }

    #[test]
    fn non_finite_multiplier_is_refused() {
        let mut template = Template::starter("Ring", 3);
        template.army_multipliers.guards = Some(f64::INFINITY);
        let err = to_json_string(&template).unwrap_err();
        assert!(matches!(err, StudioError::NonFinite { ref field, .. } if field == "armyMultipliers.guards"));

        template.army_multipliers.guards = Some(1.5);
        assert!(ensure_finite(&template).is_ok());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(from_json_str("{ not json").is_err());
    }
}
