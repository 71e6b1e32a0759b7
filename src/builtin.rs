//! Built-in ignore template content.

/// Ignore patterns for macOS metadata files and Sketch documents.
///
/// This template is special-cased by the create-repository flow: its content
/// ships as a constant rather than as a file in the scanned template
/// directory, and must be preserved verbatim.
pub const KACTUS_GIT_IGNORE: &str = "*.DS_Store
.AppleDouble
.LSOverride

# Icon must end with two \r
Icon


# Thumbnails
._*

# Files that might appear in the root of a volume
.DocumentRevisions-V100
.fseventsd
.Spotlight-V100
.TemporaryItems
.Trashes
.VolumeIcon.icns
.com.apple.timemachine.donotpresent

# Directories potentially created on remote AFP share
.AppleDB
.AppleDesktop
Network Trash Folder
Temporary Items
.apdisk

# Sketch files
*.sketch
";
