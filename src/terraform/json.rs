//! Module calls from JSON syntax (`.tf.json`).

use serde_json::{Map, Value};

use super::{Declaration, Diagnostic, Inspection, Position};
use crate::constants;

/// Parses `content` and records every entry of the top-level `"module"` property.
///
/// Both the object form and the array-of-objects form are accepted at each
/// level, as Terraform allows.
pub(super) fn collect(file: &str, content: &str, inspection: &mut Inspection) {
    let root: Value = match serde_json::from_str(content) {
        Ok(root) => root,
        Err(err) => {
            inspection.error(Diagnostic::new(
                file,
                Some(err.line()),
                format!("Invalid JSON syntax: {err}"),
            ));
            return;
        }
    };

    let Some(root) = root.as_object() else {
        inspection.error(Diagnostic::new(
            file,
            None,
            "The root of a JSON configuration file must be an object",
        ));
        return;
    };

    let Some(modules) = root.get(constants::BLOCK_MODULE) else {
        return;
    };

    let Some(groups) = objects(modules) else {
        inspection.error(Diagnostic::new(
            file,
            None,
            "The \"module\" property must be an object mapping names to module calls",
        ));
        return;
    };

    for group in groups {
        for (name, body) in group {
            let Some(bodies) = objects(body) else {
                inspection.error(Diagnostic::new(
                    file,
                    None,
                    format!("Module {name:?} must be declared as an object"),
                ));
                continue;
            };
            for body in bodies {
                collect_call(file, name, body, inspection);
            }
        }
    }
}

fn collect_call(file: &str, name: &str, body: &Map<String, Value>, inspection: &mut Inspection) {
    let source = string_property(body, constants::ATTR_SOURCE);
    let version = string_property(body, constants::ATTR_VERSION);

    match (source, version) {
        (Ok(source), Ok(version)) => inspection.declare(Declaration {
            name: name.to_string(),
            source,
            version,
            pos: Position {
                file: file.to_string(),
                line: None,
            },
        }),
        (source, version) => {
            for message in [source.err(), version.err()].into_iter().flatten() {
                inspection.error(Diagnostic::new(
                    file,
                    None,
                    format!("{message} (module {name:?})"),
                ));
            }
        }
    }
}

/// A single object or an array of objects; `None` for any other shape.
fn objects(value: &Value) -> Option<Vec<&Map<String, Value>>> {
    match value {
        Value::Object(map) => Some(vec![map]),
        Value::Array(items) => items.iter().map(Value::as_object).collect(),
        _ => None,
    }
}

fn string_property(body: &Map<String, Value>, key: &str) -> Result<Option<String>, String> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(format!(
            "Unsuitable value for {key:?}: a static string literal is required"
        )),
    }
}
