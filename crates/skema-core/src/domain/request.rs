//! Validated scaffold requests and target path derivation.

use std::path::PathBuf;

use crate::domain::naming::ResolvedName;
use crate::domain::schematic::SchematicKind;

/// A fully resolved, validated request to generate one schematic.
///
/// Constructed by the pipeline after interactive resolution and validation;
/// immutable from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub kind: SchematicKind,
    pub raw_name: String,
    pub with_spec: bool,
}

impl ScaffoldRequest {
    pub fn new(kind: SchematicKind, raw_name: impl Into<String>, with_spec: bool) -> Self {
        Self {
            kind,
            raw_name: raw_name.into(),
            with_spec,
        }
    }
}

/// Where a schematic's artifacts land, relative to the project root.
///
/// A deterministic function of the resolved name and the schematic kind:
/// the folder is `src/<folder_name>`, the source file
/// `src/<folder_name>/<folder_name>.<suffix>.ts`, and the companion spec
/// file swaps `.ts` for `.spec.ts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    pub folder: PathBuf,
    pub file: PathBuf,
    pub spec_file: PathBuf,
    /// Shared file stem (`<folder_name>.<suffix>`, no extension). The spec
    /// file imports the source module through this stem, so both artifacts
    /// derive from the same value.
    pub stem: String,
}

impl TargetPath {
    pub fn derive(resolved: &ResolvedName, kind: SchematicKind) -> Self {
        let folder = PathBuf::from("src").join(&resolved.folder_name);
        let stem = format!("{}.{}", resolved.folder_name, kind.file_suffix());
        let file = folder.join(format!("{stem}.ts"));
        let spec_file = folder.join(format!("{stem}.spec.ts"));
        Self {
            folder,
            file,
            spec_file,
            stem,
        }
    }
}
