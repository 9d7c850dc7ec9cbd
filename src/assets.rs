//! Decorative banner art for each screen.
//!
//! Art is looked up by logical name as `<assets_dir>/<name>.txt`. A missing
//! directory, file, or unreadable file degrades to a single placeholder glyph
//! and a warning in the log; screens never fail because of it.

use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Logical names of the images the kiosk knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    /// City hall illustration on the login screen
    CityHall,
    BusIcon,
    MetroIcon,
}

impl AssetKey {
    /// File stem inside the assets directory
    pub fn file_stem(&self) -> &'static str {
        match self {
            AssetKey::CityHall => "city_hall",
            AssetKey::BusIcon => "bus_icon",
            AssetKey::MetroIcon => "metro_icon",
        }
    }

    /// Glyph shown when the art cannot be loaded
    pub fn placeholder(&self) -> &'static str {
        match self {
            AssetKey::CityHall => "🏛",
            AssetKey::BusIcon => "🚌",
            AssetKey::MetroIcon => "🚇",
        }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Loaded banner art
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artwork {
    /// Lines read from the asset file
    Loaded(Vec<String>),
    /// Fallback glyph
    Placeholder(&'static str),
}

impl Artwork {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Artwork::Loaded(lines) => lines.iter().map(String::as_str).collect(),
            Artwork::Placeholder(glyph) => vec![glyph],
        }
    }

    /// Rows the art needs on screen
    pub fn height(&self) -> u16 {
        match self {
            Artwork::Loaded(lines) => u16::try_from(lines.len()).unwrap_or(u16::MAX),
            Artwork::Placeholder(_) => 1,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Artwork::Placeholder(_))
    }
}

/// Art taller than this is cut so the form still fits in a 24-row terminal
const MAX_ART_LINES: usize = 8;

/// Resolves asset keys to artwork
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    assets_dir: Option<PathBuf>,
}

impl AssetLoader {
    pub fn new(assets_dir: Option<PathBuf>) -> Self {
        Self { assets_dir }
    }

    pub fn path_for(&self, key: AssetKey) -> Option<PathBuf> {
        self.assets_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.txt", key.file_stem())))
    }

    /// Load art for `key`, never failing
    pub fn load(&self, key: AssetKey) -> Artwork {
        let Some(path) = self.path_for(key) else {
            warn!("No assets directory configured, using placeholder for '{}'", key);
            return Artwork::Placeholder(key.placeholder());
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let lines: Vec<String> = content
                    .lines()
                    .take(MAX_ART_LINES)
                    .map(|l| l.trim_end().to_string())
                    .collect();
                if lines.iter().all(|l| l.is_empty()) {
                    warn!("Asset '{}' at {:?} is empty, using placeholder", key, path);
                    Artwork::Placeholder(key.placeholder())
                } else {
                    debug!("Loaded asset '{}' from {:?}", key, path);
                    Artwork::Loaded(lines)
                }
            }
            Err(e) => {
                warn!("Could not load asset '{}' from {:?}: {}", key, path, e);
                Artwork::Placeholder(key.placeholder())
            }
        }
    }
}
