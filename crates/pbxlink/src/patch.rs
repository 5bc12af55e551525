//! The patch operation: register a resource file in the project
//!
//! Guarantees the post-condition "the resource is a member of the named
//! group and is copied by the named target's Resources build phase",
//! performing the minimum necessary mutations. Running it twice in a row
//! leaves the project file byte-identical after the first run.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::project::Project;

/// Conventional location of the iOS project in a Flutter checkout.
pub const DEFAULT_PROJECT_PATH: &str = "ios/Runner.xcodeproj";
/// Conventional location of the Firebase configuration plist.
pub const DEFAULT_RESOURCE_PATH: &str = "ios/Runner/GoogleService-Info.plist";
/// Group the file reference is registered under.
pub const DEFAULT_GROUP: &str = "Runner";
/// Target whose Resources build phase copies the file.
pub const DEFAULT_TARGET: &str = "Runner";

/// What a single patch step found: the entry was already there, or it
/// had to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Added,
    AlreadyPresent,
}

/// Outcome of a patch run, one decision per step plus whether the
/// document changed structurally.
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    /// File name of the resource, as stored in the project.
    pub file_name: String,
    /// Display name of the group the reference lives under.
    pub group: String,
    /// Name of the target whose Resources phase was patched.
    pub target: String,
    /// Whether the file reference existed or was created.
    pub reference: Decision,
    /// Whether the Resources build file existed or was created.
    pub resources: Decision,
    /// True when either step created an entry.
    pub changed: bool,
}

/// Registers a resource file in an Xcode project.
///
/// The defaults describe the conventional Flutter iOS layout; the
/// builder overrides them for other checkouts and for tests.
pub struct Patcher {
    project_path: PathBuf,
    resource_path: PathBuf,
    group_name: String,
    target_name: String,
}

impl Default for Patcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Patcher {
    /// Create a patcher for the conventional project layout.
    pub fn new() -> Self {
        Self {
            project_path: PathBuf::from(DEFAULT_PROJECT_PATH),
            resource_path: PathBuf::from(DEFAULT_RESOURCE_PATH),
            group_name: DEFAULT_GROUP.to_string(),
            target_name: DEFAULT_TARGET.to_string(),
        }
    }

    /// Create a new PatcherBuilder for customized configuration.
    pub fn builder() -> PatcherBuilder {
        PatcherBuilder::default()
    }

    /// Run the patch sequence and save the project.
    ///
    /// Fails before anything is read or written when the resource file is
    /// not on disk; fails without saving when the group or target cannot
    /// be found.
    pub fn run(&self) -> Result<PatchReport> {
        if !self.resource_path.exists() {
            return Err(Error::MissingResource(self.resource_path.clone()));
        }
        let file_name = self
            .resource_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::Malformed(format!(
                    "resource path {} has no file name",
                    self.resource_path.display()
                ))
            })?
            .to_string();

        let mut project = Project::open(&self.project_path)?;

        let main_group = project.main_group()?;
        let group = project
            .group_named(&main_group, &self.group_name)?
            .ok_or_else(|| Error::GroupNotFound(self.group_name.clone()))?;

        let existing = project
            .file_references_with_path(&group, &file_name)?
            .into_iter()
            .next();
        let (file_ref, reference) = match existing {
            Some(id) => {
                debug!(%file_name, "file reference already present");
                (id, Decision::AlreadyPresent)
            }
            None => {
                let id = project.add_file_reference(&group, &file_name)?;
                info!(%file_name, group = %self.group_name, "added file reference");
                (id, Decision::Added)
            }
        };

        let target = project
            .target_named(&self.target_name)?
            .ok_or_else(|| Error::TargetNotFound(self.target_name.clone()))?;
        let phase = project.resources_build_phase(&target)?;

        let resources = if project
            .build_files_with_file_ref(&phase, &file_ref)?
            .is_empty()
        {
            project.add_build_file(&phase, &file_ref)?;
            info!(%file_name, target = %self.target_name, "added to Resources build phase");
            Decision::Added
        } else {
            debug!(%file_name, "already in Resources build phase");
            Decision::AlreadyPresent
        };

        let changed = reference == Decision::Added || resources == Decision::Added;
        project.save()?;
        info!(path = %project.path().display(), changed, "project saved");

        Ok(PatchReport {
            file_name,
            group: self.group_name.clone(),
            target: self.target_name.clone(),
            reference,
            resources,
            changed,
        })
    }
}

/// Builder for customized Patcher configuration.
#[derive(Default)]
pub struct PatcherBuilder {
    project_path: Option<PathBuf>,
    resource_path: Option<PathBuf>,
    group_name: Option<String>,
    target_name: Option<String>,
}

impl PatcherBuilder {
    /// Set the `.xcodeproj` (or `project.pbxproj`) path.
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    /// Set the resource file to register.
    pub fn resource_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.resource_path = Some(path.into());
        self
    }

    /// Set the group the file reference is registered under.
    pub fn group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    /// Set the target whose Resources build phase is patched.
    pub fn target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = Some(name.into());
        self
    }

    /// Build the Patcher instance.
    pub fn build(self) -> Patcher {
        Patcher {
            project_path: self
                .project_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_PATH)),
            resource_path: self
                .resource_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_PATH)),
            group_name: self.group_name.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
            target_name: self
                .target_name
                .unwrap_or_else(|| DEFAULT_TARGET.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_the_conventional_layout() {
        let patcher = Patcher::new();
        assert_eq!(patcher.project_path, PathBuf::from(DEFAULT_PROJECT_PATH));
        assert_eq!(patcher.resource_path, PathBuf::from(DEFAULT_RESOURCE_PATH));
        assert_eq!(patcher.group_name, DEFAULT_GROUP);
        assert_eq!(patcher.target_name, DEFAULT_TARGET);
    }

    #[test]
    fn builder_overrides_and_defaults_mix() {
        let patcher = Patcher::builder()
            .project_path("app/App.xcodeproj")
            .target_name("App")
            .build();
        assert_eq!(patcher.project_path, PathBuf::from("app/App.xcodeproj"));
        assert_eq!(patcher.resource_path, PathBuf::from(DEFAULT_RESOURCE_PATH));
        assert_eq!(patcher.group_name, DEFAULT_GROUP);
        assert_eq!(patcher.target_name, "App");
    }
}
