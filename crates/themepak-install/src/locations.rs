use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Which of the two destination tables is active for the run. Chosen
/// once from the command line; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Global,
    Local,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// The closed set of asset categories a package may carry.
///
/// Top-level archive directories are matched against [`Category::dir_name`]
/// case-sensitively; any other name is ignored for classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    GlobalThemes,
    PlasmaStyles,
    ColorSchemes,
    IconThemes,
    PanelLayoutTemplates,
    TaskSwitchers,
    PlasmaWidgets,
    WallpaperPlugins,
    WindowDecorations,
    KwinEffects,
    KwinScripts,
    SddmThemes,
    CursorThemes,
    KvantumThemes,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::GlobalThemes,
        Category::PlasmaStyles,
        Category::ColorSchemes,
        Category::IconThemes,
        Category::PanelLayoutTemplates,
        Category::TaskSwitchers,
        Category::PlasmaWidgets,
        Category::WallpaperPlugins,
        Category::WindowDecorations,
        Category::KwinEffects,
        Category::KwinScripts,
        Category::SddmThemes,
        Category::CursorThemes,
        Category::KvantumThemes,
    ];

    /// Classification gate: exact, case-sensitive directory name.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Some(match name {
            "global themes" => Self::GlobalThemes,
            "plasma styles" => Self::PlasmaStyles,
            "color schemes" => Self::ColorSchemes,
            "icon themes" => Self::IconThemes,
            "panel layout templates" => Self::PanelLayoutTemplates,
            "task switchers" => Self::TaskSwitchers,
            "plasma widgets" => Self::PlasmaWidgets,
            "wallpaper plugins" => Self::WallpaperPlugins,
            "window decorations" => Self::WindowDecorations,
            "kwin effects" => Self::KwinEffects,
            "kwin scripts" => Self::KwinScripts,
            "sddm themes" => Self::SddmThemes,
            "cursor themes" => Self::CursorThemes,
            "kvantum themes" => Self::KvantumThemes,
            _ => return None,
        })
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::GlobalThemes => "global themes",
            Self::PlasmaStyles => "plasma styles",
            Self::ColorSchemes => "color schemes",
            Self::IconThemes => "icon themes",
            Self::PanelLayoutTemplates => "panel layout templates",
            Self::TaskSwitchers => "task switchers",
            Self::PlasmaWidgets => "plasma widgets",
            Self::WallpaperPlugins => "wallpaper plugins",
            Self::WindowDecorations => "window decorations",
            Self::KwinEffects => "kwin effects",
            Self::KwinScripts => "kwin scripts",
            Self::SddmThemes => "sddm themes",
            Self::CursorThemes => "cursor themes",
            Self::KvantumThemes => "kvantum themes",
        }
    }

    /// Whether the scope's table carries an entry for this category at
    /// all. Kvantum has no system-wide install directory.
    pub fn supported_in(&self, scope: Scope) -> bool {
        !matches!((self, scope), (Self::KvantumThemes, Scope::Global))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Tunables for table construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationOptions {
    /// Route icon and cursor themes to the legacy `~/.icons` directory
    /// instead of `~/.local/share/icons`.
    pub legacy_cursor_dirs: bool,
}

/// Resolved category -> destination table for one run. Read-only after
/// construction.
#[derive(Clone, Debug)]
pub struct Locations {
    scope: Scope,
    system_root: PathBuf,
    data_home: PathBuf,
    config_home: PathBuf,
    legacy_icon_root: PathBuf,
    legacy_cursor_dirs: bool,
}

impl Locations {
    /// Build the table for `scope` from the standard system and user
    /// prefixes.
    pub fn new(scope: Scope, options: LocationOptions) -> Result<Self> {
        let home = home::home_dir().ok_or(Error::HomeDirUnavailable)?;
        Ok(Self::with_roots(
            scope,
            PathBuf::from("/usr/share"),
            home.join(".local/share"),
            home.join(".config"),
            home.join(".icons"),
            options,
        ))
    }

    /// Build the table from explicit root prefixes.
    pub fn with_roots(
        scope: Scope,
        system_root: PathBuf,
        data_home: PathBuf,
        config_home: PathBuf,
        legacy_icon_root: PathBuf,
        options: LocationOptions,
    ) -> Self {
        Self {
            scope,
            system_root,
            data_home,
            config_home,
            legacy_icon_root,
            legacy_cursor_dirs: options.legacy_cursor_dirs,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Destination directory for `category`. Pure lookup; directory
    /// creation belongs to the extractor.
    pub fn resolve(&self, category: Category) -> Result<PathBuf> {
        let entry = match self.scope {
            Scope::Global => self.global_entry(category),
            Scope::Local => self.local_entry(category),
        };
        entry.ok_or(Error::CategoryNotSupported {
            category,
            scope: self.scope,
        })
    }

    fn global_entry(&self, category: Category) -> Option<PathBuf> {
        let root = &self.system_root;
        Some(match category {
            Category::GlobalThemes => root.join("plasma/look-and-feel"),
            Category::PlasmaStyles => root.join("plasma/desktoptheme"),
            Category::ColorSchemes => root.join("color-schemes"),
            Category::IconThemes | Category::CursorThemes => root.join("icons"),
            Category::PanelLayoutTemplates => root.join("plasma/layout-templates"),
            Category::TaskSwitchers => root.join("kwin/tabbox"),
            Category::PlasmaWidgets => root.join("plasma/plasmoids"),
            Category::WallpaperPlugins => root.join("plasma/wallpapers"),
            Category::WindowDecorations => root.join("aurorae/themes"),
            Category::KwinEffects => root.join("kwin/effects"),
            Category::KwinScripts => root.join("kwin/scripts"),
            Category::SddmThemes => root.join("sddm/themes"),
            Category::KvantumThemes => return None,
        })
    }

    fn local_entry(&self, category: Category) -> Option<PathBuf> {
        let data = &self.data_home;
        Some(match category {
            Category::GlobalThemes => data.join("plasma/look-and-feel"),
            Category::PlasmaStyles => data.join("plasma/desktoptheme"),
            Category::ColorSchemes => data.join("color-schemes"),
            Category::IconThemes | Category::CursorThemes if self.legacy_cursor_dirs => {
                self.legacy_icon_root.clone()
            }
            Category::IconThemes | Category::CursorThemes => data.join("icons"),
            Category::PanelLayoutTemplates => data.join("plasma/layout-templates"),
            Category::TaskSwitchers => data.join("kwin/tabbox"),
            Category::PlasmaWidgets => data.join("plasma/plasmoids"),
            Category::WallpaperPlugins => data.join("plasma/wallpapers"),
            Category::WindowDecorations => data.join("aurorae/themes"),
            Category::KwinEffects => data.join("kwin/effects"),
            Category::KwinScripts => data.join("kwin/scripts"),
            // No per-user login-screen directory exists; installs there
            // need privileges and are skipped without them.
            Category::SddmThemes => self.system_root.join("sddm/themes"),
            Category::KvantumThemes => self.config_home.join("Kvantum"),
        })
    }
}
