//! Shared fixtures for the on-disk integration tests.
//!
//! `FIXTURE` is a minimal Flutter-style Runner project: a `Runner` group
//! holding one source file, a `Runner` target with Sources and Resources
//! phases, and an empty Resources phase. `FIXTURE_LINKED_ONLY` already
//! carries the plist file reference in the group but not in the phase.

#![allow(dead_code)] // Not every test target uses every helper

use std::fs;
use std::path::{Path, PathBuf};

use pbxlink::Patcher;

pub const RESOURCE_NAME: &str = "GoogleService-Info.plist";

pub const FIXTURE: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 56;
	objects = {
		74858FAE1ED2DC5600515810 /* AppDelegate.swift */ = {
			isa = PBXFileReference;
			lastKnownFileType = sourcecode.swift;
			path = AppDelegate.swift;
			sourceTree = "<group>";
		};
		74858FAF1ED2DC5600515810 /* AppDelegate.swift in Sources */ = {
			isa = PBXBuildFile;
			fileRef = 74858FAE1ED2DC5600515810 /* AppDelegate.swift */;
		};
		97C146E51CF9000F007C117D = {
			isa = PBXGroup;
			children = (
				97C146F01CF9000F007C117D /* Runner */,
			);
			sourceTree = "<group>";
		};
		97C146F01CF9000F007C117D /* Runner */ = {
			isa = PBXGroup;
			children = (
				74858FAE1ED2DC5600515810 /* AppDelegate.swift */,
			);
			path = Runner;
			sourceTree = "<group>";
		};
		97C146EA1CF9000F007C117D /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				74858FAF1ED2DC5600515810 /* AppDelegate.swift in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
		97C146EC1CF9000F007C117D /* Resources */ = {
			isa = PBXResourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
		97C146ED1CF9000F007C117D /* Runner */ = {
			isa = PBXNativeTarget;
			buildPhases = (
				97C146EA1CF9000F007C117D /* Sources */,
				97C146EC1CF9000F007C117D /* Resources */,
			);
			name = Runner;
			productName = Runner;
			productType = "com.apple.product-type.application";
		};
		97C146E61CF9000F007C117D /* Project object */ = {
			isa = PBXProject;
			compatibilityVersion = "Xcode 9.3";
			mainGroup = 97C146E51CF9000F007C117D;
			targets = (
				97C146ED1CF9000F007C117D /* Runner */,
			);
		};
	};
	rootObject = 97C146E61CF9000F007C117D /* Project object */;
}
"#;

pub const FIXTURE_LINKED_ONLY: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 56;
	objects = {
		74858FAE1ED2DC5600515810 /* AppDelegate.swift */ = {
			isa = PBXFileReference;
			lastKnownFileType = sourcecode.swift;
			path = AppDelegate.swift;
			sourceTree = "<group>";
		};
		74858FAF1ED2DC5600515810 /* AppDelegate.swift in Sources */ = {
			isa = PBXBuildFile;
			fileRef = 74858FAE1ED2DC5600515810 /* AppDelegate.swift */;
		};
		2F4E5D661B2A4C8E9D3A7B10 /* GoogleService-Info.plist */ = {
			isa = PBXFileReference;
			lastKnownFileType = text.plist.xml;
			path = "GoogleService-Info.plist";
			sourceTree = "<group>";
		};
		97C146E51CF9000F007C117D = {
			isa = PBXGroup;
			children = (
				97C146F01CF9000F007C117D /* Runner */,
			);
			sourceTree = "<group>";
		};
		97C146F01CF9000F007C117D /* Runner */ = {
			isa = PBXGroup;
			children = (
				74858FAE1ED2DC5600515810 /* AppDelegate.swift */,
				2F4E5D661B2A4C8E9D3A7B10 /* GoogleService-Info.plist */,
			);
			path = Runner;
			sourceTree = "<group>";
		};
		97C146EA1CF9000F007C117D /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				74858FAF1ED2DC5600515810 /* AppDelegate.swift in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
		97C146EC1CF9000F007C117D /* Resources */ = {
			isa = PBXResourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
		97C146ED1CF9000F007C117D /* Runner */ = {
			isa = PBXNativeTarget;
			buildPhases = (
				97C146EA1CF9000F007C117D /* Sources */,
				97C146EC1CF9000F007C117D /* Resources */,
			);
			name = Runner;
			productName = Runner;
			productType = "com.apple.product-type.application";
		};
		97C146E61CF9000F007C117D /* Project object */ = {
			isa = PBXProject;
			compatibilityVersion = "Xcode 9.3";
			mainGroup = 97C146E51CF9000F007C117D;
			targets = (
				97C146ED1CF9000F007C117D /* Runner */,
			);
		};
	};
	rootObject = 97C146E61CF9000F007C117D /* Project object */;
}
"#;

/// Lay the fixture project out under `root` and return the path of the
/// `project.pbxproj` file.
pub fn write_project(root: &Path, source: &str) -> PathBuf {
    let project_dir = root.join("ios/Runner.xcodeproj");
    fs::create_dir_all(&project_dir).unwrap();
    let pbxproj = project_dir.join("project.pbxproj");
    fs::write(&pbxproj, source).unwrap();
    pbxproj
}

/// Put the plist at its conventional location under `root`.
pub fn write_resource(root: &Path) -> PathBuf {
    let dir = root.join("ios/Runner");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(RESOURCE_NAME);
    fs::write(&path, "<plist/>\n").unwrap();
    path
}

/// A patcher pointed at the fixture layout under `root`.
pub fn patcher_for(root: &Path) -> Patcher {
    Patcher::builder()
        .project_path(root.join("ios/Runner.xcodeproj"))
        .resource_path(root.join("ios/Runner").join(RESOURCE_NAME))
        .build()
}
