//! Module calls from native HCL syntax (`.tf`).

use std::ops::Range;

use hcl_edit::expr::Expression;
use hcl_edit::structure::{Block, BlockLabel, Body, Structure};
use hcl_edit::Span;

use super::{Declaration, Diagnostic, Inspection, Position};
use crate::constants;

/// Parses `content` and records every top-level `module` block.
pub(super) fn collect(file: &str, content: &str, inspection: &mut Inspection) {
    let body = match hcl_edit::parser::parse_body(content) {
        Ok(body) => body,
        Err(err) => {
            inspection.error(Diagnostic::new(file, None, format!("Invalid HCL syntax: {err}")));
            return;
        }
    };

    for structure in body.iter() {
        let Structure::Block(block) = structure else {
            continue;
        };
        if block.ident.value().as_str() != constants::BLOCK_MODULE {
            continue;
        }
        collect_block(file, content, block, inspection);
    }
}

fn collect_block(file: &str, content: &str, block: &Block, inspection: &mut Inspection) {
    let pos = Position {
        file: file.to_string(),
        line: block.span().map(|span| line_of(content, span)),
    };

    let name = match block.labels.as_slice() {
        [label] => label_str(label).to_string(),
        [] => {
            inspection.error(Diagnostic {
                pos,
                summary: "Missing name for module; all module blocks must have 1 label: name"
                    .to_string(),
            });
            return;
        }
        _ => {
            inspection.error(Diagnostic {
                pos,
                summary: "Extraneous label for module; only 1 label (name) is expected".to_string(),
            });
            return;
        }
    };

    let source = string_attribute(&block.body, constants::ATTR_SOURCE);
    let version = string_attribute(&block.body, constants::ATTR_VERSION);

    match (source, version) {
        (Ok(source), Ok(version)) => inspection.declare(Declaration {
            name,
            source,
            version,
            pos,
        }),
        (source, version) => {
            for message in [source.err(), version.err()].into_iter().flatten() {
                inspection.error(Diagnostic {
                    pos: pos.clone(),
                    summary: format!("{message} (module {name:?})"),
                });
            }
        }
    }
}

fn label_str(label: &BlockLabel) -> &str {
    match label {
        BlockLabel::String(s) => s.value().as_str(),
        BlockLabel::Ident(ident) => ident.value().as_str(),
    }
}

/// Reads a string-literal attribute from `body`; `Ok(None)` when absent.
fn string_attribute(body: &Body, key: &str) -> Result<Option<String>, String> {
    for structure in body.iter() {
        let Structure::Attribute(attr) = structure else {
            continue;
        };
        if attr.key.value().as_str() != key {
            continue;
        }
        return match &attr.value {
            Expression::String(s) => Ok(Some(s.value().clone())),
            _ => Err(format!(
                "Unsuitable value for {key:?}: a static string literal is required"
            )),
        };
    }
    Ok(None)
}

/// 1-based line of the first non-whitespace byte at or after `span.start`.
fn line_of(content: &str, span: Range<usize>) -> usize {
    let start = span.start.min(content.len());
    let skipped = content[start..]
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(0);
    content[..start + skipped].matches('\n').count() + 1
}
