use crate::music::MusicConfig;

/// Page-level configuration for one boot of the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    /// URL the game-data blob is fetched from
    pub asset_url: String,
    /// Where the blob lands in the runtime's virtual filesystem
    pub asset_vfs_path: String,
    /// Where the music table lands in the virtual filesystem
    pub music_cfg_path: String,
    pub canvas_id: String,
    /// Container of the on-screen touch controls
    pub controls_id: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            asset_url: "doom.wad".into(),
            asset_vfs_path: "doom.wad".into(),
            music_cfg_path: "./doom1-music.cfg".into(),
            canvas_id: "canvas".into(),
            controls_id: "controls".into(),
        }
    }
}

impl LaunchConfig {
    pub fn with_asset_url(mut self, url: impl Into<String>) -> Self {
        self.asset_url = url.into();
        self
    }

    pub fn with_canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = id.into();
        self
    }

    /// Command-line arguments selecting the loaded blob as the primary data file.
    pub fn runtime_arguments(&self) -> Vec<String> {
        vec!["-iwad".into(), self.asset_vfs_path.clone()]
    }

    /// Describe the factory call for this configuration.
    pub fn plan(&self) -> RuntimePlan {
        RuntimePlan {
            arguments: self.runtime_arguments(),
            files: vec![
                VfsFile {
                    path: self.music_cfg_path.clone(),
                    contents: VfsContents::Text(MusicConfig::doom1().render()),
                },
                VfsFile {
                    path: self.asset_vfs_path.clone(),
                    contents: VfsContents::Asset,
                },
            ],
        }
    }
}

/// Everything the runtime factory needs besides the render target.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimePlan {
    pub arguments: Vec<String>,
    /// Written in order by the factory's pre-run hook
    pub files: Vec<VfsFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VfsFile {
    pub path: String,
    pub contents: VfsContents,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VfsContents {
    /// UTF-8 text, encoded before writing
    Text(String),
    /// The fetched game-data bytes
    Asset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan() {
        let plan = LaunchConfig::default().plan();
        assert_eq!(plan.arguments, vec!["-iwad", "doom.wad"]);
        assert_eq!(plan.files.len(), 2);
        assert_eq!(plan.files[0].path, "./doom1-music.cfg");
        assert!(matches!(&plan.files[0].contents, VfsContents::Text(t) if t.lines().count() == 23));
        assert_eq!(plan.files[1].path, "doom.wad");
        assert_eq!(plan.files[1].contents, VfsContents::Asset);
    }

    #[test]
    fn test_overrides_keep_vfs_layout() {
        let config = LaunchConfig::default()
            .with_asset_url("/assets/freedoom1.wad")
            .with_canvas_id("screen");
        assert_eq!(config.asset_url, "/assets/freedoom1.wad");
        assert_eq!(config.canvas_id, "screen");
        assert_eq!(config.runtime_arguments(), vec!["-iwad", "doom.wad"]);
    }
}
