//! Version inference for module calls.

use crate::constants;
use crate::terraform::ModuleCall;

/// Derives a human-readable version for a module call.
///
/// The first matching rule wins:
///
/// 1. a non-empty declared `version`, verbatim;
/// 2. the text after the first `?ref=` in the source, when non-empty;
/// 3. `"local"` for sources starting with `./` or `../`;
/// 4. `"N/A"` otherwise.
///
/// No attempt is made to parse or validate what is returned. Branches, tags
/// and commit hashes all come back as written.
pub fn extract_version(call: &ModuleCall) -> String {
    if let Some(version) = call.version.as_deref().filter(|v| !v.is_empty()) {
        return version.to_string();
    }

    if let Some((_, reference)) = call.source.split_once(constants::REF_MARKER) {
        if !reference.is_empty() {
            return reference.to_string();
        }
    }

    if constants::LOCAL_PREFIXES
        .iter()
        .any(|prefix| call.source.starts_with(prefix))
    {
        return constants::VERSION_LOCAL.to_string();
    }

    constants::VERSION_UNKNOWN.to_string()
}
