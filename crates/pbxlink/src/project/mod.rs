//! Project object model for Xcode project documents
//!
//! A `Project` owns the parsed pbxproj document and exposes the narrow
//! navigation and mutation surface the patcher needs: group lookup by
//! display name, file references by path, targets by name, and the
//! Resources build phase with its build files. The document is mutated
//! in memory only; nothing touches disk until `save`.

mod object_id;

pub use object_id::ObjectId;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::plist::{self, Dict, Value};

const ISA_GROUP: &str = "PBXGroup";
const ISA_FILE_REFERENCE: &str = "PBXFileReference";
const ISA_BUILD_FILE: &str = "PBXBuildFile";
const ISA_RESOURCES_PHASE: &str = "PBXResourcesBuildPhase";

/// An Xcode project document, opened from disk and saved back in place.
#[derive(Debug)]
pub struct Project {
    path: PathBuf,
    document: Value,
}

impl Project {
    /// Open a project from a `.xcodeproj` directory or a direct path to
    /// its `project.pbxproj`.
    pub fn open(path: &Path) -> Result<Self> {
        let path = if path.extension().is_some_and(|ext| ext == "xcodeproj") {
            path.join("project.pbxproj")
        } else {
            path.to_path_buf()
        };
        let source = std::fs::read_to_string(&path)?;
        let project = Self::from_source(&source, path)?;
        let object_count = project.objects()?.len();
        debug!(path = %project.path.display(), objects = object_count, "opened project");
        Ok(project)
    }

    fn from_source(source: &str, path: PathBuf) -> Result<Self> {
        let document = plist::parse_document(source)?;
        let project = Self { path, document };
        let root = project.root_dict()?;
        if root.get("objects").and_then(Value::as_dict).is_none() {
            return Err(Error::Malformed("document has no objects table".into()));
        }
        if root.get("rootObject").and_then(Value::as_str).is_none() {
            return Err(Error::Malformed("document has no rootObject".into()));
        }
        Ok(project)
    }

    /// Path of the underlying `project.pbxproj` file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the document to pbxproj text.
    pub fn to_source(&self) -> String {
        plist::write_document(&self.document)
    }

    /// Write the document back to the path it was opened from.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, self.to_source())?;
        Ok(())
    }

    fn root_dict(&self) -> Result<&Dict> {
        self.document
            .as_dict()
            .ok_or_else(|| Error::Malformed("document root is not a dictionary".into()))
    }

    fn objects(&self) -> Result<&Dict> {
        self.root_dict()?
            .get("objects")
            .and_then(Value::as_dict)
            .ok_or_else(|| Error::Malformed("document has no objects table".into()))
    }

    fn objects_mut(&mut self) -> Result<&mut Dict> {
        self.document
            .as_dict_mut()
            .and_then(|root| root.get_mut("objects"))
            .and_then(Value::as_dict_mut)
            .ok_or_else(|| Error::Malformed("document has no objects table".into()))
    }

    fn object(&self, id: &ObjectId) -> Result<&Dict> {
        self.objects()?
            .get(id.as_str())
            .and_then(Value::as_dict)
            .ok_or_else(|| Error::Malformed(format!("missing object {id}")))
    }

    fn object_mut(&mut self, id: &ObjectId) -> Result<&mut Dict> {
        self.objects_mut()?
            .get_mut(id.as_str())
            .and_then(Value::as_dict_mut)
            .ok_or_else(|| Error::Malformed(format!("missing object {id}")))
    }

    fn object_str(&self, id: &ObjectId, key: &str) -> Result<&str> {
        self.object(id)?
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Malformed(format!("object {id} has no {key}")))
    }

    /// Ids stored under an array-valued key of an object. A missing key
    /// reads as empty.
    fn object_ids(&self, id: &ObjectId, key: &str) -> Result<Vec<ObjectId>> {
        let Some(items) = self.object(id)?.get(key).and_then(Value::as_array) else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| {
                item.as_str().map(ObjectId::from).ok_or_else(|| {
                    Error::Malformed(format!("object {id} has a non-string entry in {key}"))
                })
            })
            .collect()
    }

    fn isa(&self, id: &ObjectId) -> Result<&str> {
        self.object_str(id, "isa")
    }

    fn append_id(&mut self, id: &ObjectId, key: &str, entry: &ObjectId) -> Result<()> {
        let object = self.object_mut(id)?;
        let items = object
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        let Some(items) = items.as_array_mut() else {
            return Err(Error::Malformed(format!("object {id} has a non-array {key}")));
        };
        items.push(Value::String(entry.as_str().to_string()));
        Ok(())
    }

    fn fresh_id(&self, material: &str) -> Result<ObjectId> {
        let objects = self.objects()?;
        let seed = format!("{} {material}", self.path.display());
        Ok(object_id::generate(&seed, |candidate| {
            objects.contains_key(candidate.as_str())
        }))
    }

    /// Identifier of the root `PBXProject` object.
    pub fn root_object(&self) -> Result<ObjectId> {
        self.root_dict()?
            .get("rootObject")
            .and_then(Value::as_str)
            .map(ObjectId::from)
            .ok_or_else(|| Error::Malformed("document has no rootObject".into()))
    }

    /// The main group at the top of the project's file tree.
    pub fn main_group(&self) -> Result<ObjectId> {
        let root = self.root_object()?;
        self.object_str(&root, "mainGroup").map(ObjectId::from)
    }

    /// Direct children of a group.
    pub fn children(&self, group: &ObjectId) -> Result<Vec<ObjectId>> {
        self.object_ids(group, "children")
    }

    /// Find the direct child group with the given display name. Groups
    /// display their `name` when present and their `path` otherwise.
    pub fn group_named(&self, parent: &ObjectId, name: &str) -> Result<Option<ObjectId>> {
        for child in self.children(parent)? {
            if self.isa(&child)? != ISA_GROUP {
                continue;
            }
            if self.display_name(&child)? == Some(name) {
                return Ok(Some(child));
            }
        }
        Ok(None)
    }

    fn display_name(&self, id: &ObjectId) -> Result<Option<&str>> {
        let object = self.object(id)?;
        Ok(object
            .get("name")
            .and_then(Value::as_str)
            .or_else(|| object.get("path").and_then(Value::as_str)))
    }

    /// File references directly under a group whose `path` matches.
    pub fn file_references_with_path(&self, group: &ObjectId, path: &str) -> Result<Vec<ObjectId>> {
        let mut matches = Vec::new();
        for child in self.children(group)? {
            if self.isa(&child)? != ISA_FILE_REFERENCE {
                continue;
            }
            if self.object(&child)?.get("path").and_then(Value::as_str) == Some(path) {
                matches.push(child);
            }
        }
        Ok(matches)
    }

    /// Create a file reference for `path` and append it to the group's
    /// children. The caller is responsible for checking for an existing
    /// reference first.
    pub fn add_file_reference(&mut self, group: &ObjectId, path: &str) -> Result<ObjectId> {
        let id = self.fresh_id(&format!("{ISA_FILE_REFERENCE} {path}"))?;
        let mut object = Dict::new();
        object.insert("isa".into(), ISA_FILE_REFERENCE.into());
        object.insert("lastKnownFileType".into(), file_type_for(path).into());
        object.insert("path".into(), path.into());
        object.insert("sourceTree".into(), "<group>".into());
        self.objects_mut()?
            .insert(id.as_str().to_string(), Value::Dict(object));
        self.append_id(group, "children", &id)?;
        debug!(%id, path, "created file reference");
        Ok(id)
    }

    /// All build targets of the project.
    pub fn targets(&self) -> Result<Vec<ObjectId>> {
        let root = self.root_object()?;
        self.object_ids(&root, "targets")
    }

    /// Find the target with the given name.
    pub fn target_named(&self, name: &str) -> Result<Option<ObjectId>> {
        for target in self.targets()? {
            if self.object(&target)?.get("name").and_then(Value::as_str) == Some(name) {
                return Ok(Some(target));
            }
        }
        Ok(None)
    }

    /// The target's Resources build phase, if it has one.
    pub fn find_resources_build_phase(&self, target: &ObjectId) -> Result<Option<ObjectId>> {
        for phase in self.object_ids(target, "buildPhases")? {
            if self.isa(&phase)? == ISA_RESOURCES_PHASE {
                return Ok(Some(phase));
            }
        }
        Ok(None)
    }

    /// The target's Resources build phase, created and attached when the
    /// target does not have one yet.
    pub fn resources_build_phase(&mut self, target: &ObjectId) -> Result<ObjectId> {
        if let Some(phase) = self.find_resources_build_phase(target)? {
            return Ok(phase);
        }
        let id = self.fresh_id(ISA_RESOURCES_PHASE)?;
        let mut object = Dict::new();
        object.insert("isa".into(), ISA_RESOURCES_PHASE.into());
        object.insert("buildActionMask".into(), "2147483647".into());
        object.insert("files".into(), Value::Array(Vec::new()));
        object.insert("runOnlyForDeploymentPostprocessing".into(), "0".into());
        self.objects_mut()?
            .insert(id.as_str().to_string(), Value::Dict(object));
        self.append_id(target, "buildPhases", &id)?;
        debug!(%id, "created Resources build phase");
        Ok(id)
    }

    /// Build files in a phase wrapping the given file reference.
    pub fn build_files_with_file_ref(
        &self,
        phase: &ObjectId,
        file_ref: &ObjectId,
    ) -> Result<Vec<ObjectId>> {
        let mut matches = Vec::new();
        for file in self.object_ids(phase, "files")? {
            if self.isa(&file)? != ISA_BUILD_FILE {
                continue;
            }
            if self.object(&file)?.get("fileRef").and_then(Value::as_str) == Some(file_ref.as_str())
            {
                matches.push(file);
            }
        }
        Ok(matches)
    }

    /// Create a build file wrapping `file_ref` and append it to the
    /// phase. The caller is responsible for checking for an existing
    /// entry first.
    pub fn add_build_file(&mut self, phase: &ObjectId, file_ref: &ObjectId) -> Result<ObjectId> {
        let id = self.fresh_id(&format!("{ISA_BUILD_FILE} {file_ref}"))?;
        let mut object = Dict::new();
        object.insert("isa".into(), ISA_BUILD_FILE.into());
        object.insert("fileRef".into(), file_ref.as_str().into());
        self.objects_mut()?
            .insert(id.as_str().to_string(), Value::Dict(object));
        self.append_id(phase, "files", &id)?;
        debug!(%id, file_ref = %file_ref, "created build file");
        Ok(id)
    }
}

fn file_type_for(path: &str) -> &'static str {
    if path.ends_with(".plist") {
        "text.plist.xml"
    } else {
        "text"
    }
}
