//! Views, the main menu and the per-view data cache.

use crate::bridge::Bridge;

/// One screen of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    MainMenu,
    PathView,
    AliasView,
    ConstantsView,
    CompletionsView,
    BackupsView,
    PluginsView,
    SettingsView,
}

/// A main-menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub view: View,
    pub label: &'static str,
    pub description: &'static str,
}

/// Main-menu entries, top to bottom.
pub const MENU: [MenuEntry; 7] = [
    MenuEntry {
        view: View::AliasView,
        label: "Aliases",
        description: "Shell command shortcuts",
    },
    MenuEntry {
        view: View::ConstantsView,
        label: "Constants",
        description: "Exported environment variables",
    },
    MenuEntry {
        view: View::PathView,
        label: "PATH",
        description: "Executable search directories",
    },
    MenuEntry {
        view: View::CompletionsView,
        label: "Completions",
        description: "Tab completion scripts",
    },
    MenuEntry {
        view: View::PluginsView,
        label: "Plugins",
        description: "Installed shell plugins",
    },
    MenuEntry {
        view: View::BackupsView,
        label: "Backups",
        description: "Configuration snapshots",
    },
    MenuEntry {
        view: View::SettingsView,
        label: "Settings",
        description: "Manager preferences",
    },
];

impl View {
    /// Human-readable name shown in the title bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MainMenu => "Main Menu",
            Self::PathView => "PATH",
            Self::AliasView => "Aliases",
            Self::ConstantsView => "Constants",
            Self::CompletionsView => "Completions",
            Self::BackupsView => "Backups",
            Self::PluginsView => "Plugins",
            Self::SettingsView => "Settings",
        }
    }

    /// Whether the view shows a bridge-backed list.
    #[must_use]
    pub const fn is_list(self) -> bool {
        !matches!(self, Self::MainMenu)
    }

    /// Whether `a` opens an add form here.
    #[must_use]
    pub const fn can_add(self) -> bool {
        matches!(self, Self::PathView | Self::AliasView | Self::ConstantsView)
    }

    /// Whether `d` deletes items here.
    #[must_use]
    pub const fn can_delete(self) -> bool {
        matches!(
            self,
            Self::PathView | Self::AliasView | Self::ConstantsView | Self::BackupsView
        )
    }

    /// Fetch this view's list from the host. The main menu has no list.
    pub fn load<B: Bridge + ?Sized>(self, bridge: &mut B) -> Vec<String> {
        match self {
            Self::MainMenu => Vec::new(),
            Self::PathView => bridge.load_paths(),
            Self::AliasView => bridge.load_aliases(),
            Self::ConstantsView => bridge.load_constants(),
            Self::CompletionsView => bridge.load_completions(),
            Self::BackupsView => bridge.load_backups(),
            Self::PluginsView => bridge.load_plugins(),
            Self::SettingsView => bridge.load_settings(),
        }
    }

    /// Fetch detail lines for one item.
    pub fn detail<B: Bridge + ?Sized>(self, bridge: &mut B, key: &str) -> Vec<String> {
        match self {
            Self::MainMenu => Vec::new(),
            Self::PathView => bridge.path_detail(key),
            Self::AliasView => bridge.alias_detail(key),
            Self::ConstantsView => bridge.constant_detail(key),
            Self::CompletionsView => bridge.completion_detail(key),
            Self::BackupsView => bridge.backup_detail(key),
            Self::PluginsView => bridge.plugin_detail(key),
            Self::SettingsView => bridge.setting_detail(key),
        }
    }

    /// Delete one item. Views without deletion report failure.
    pub fn delete<B: Bridge + ?Sized>(self, bridge: &mut B, key: &str) -> bool {
        match self {
            Self::PathView => bridge.delete_path(key),
            Self::AliasView => bridge.delete_alias(key),
            Self::ConstantsView => bridge.delete_constant(key),
            Self::BackupsView => bridge.delete_backup(key),
            _ => false,
        }
    }
}

/// Loaded lists, one slot per list view. `None` means not loaded yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewCache {
    paths: Option<Vec<String>>,
    aliases: Option<Vec<String>>,
    constants: Option<Vec<String>>,
    completions: Option<Vec<String>>,
    backups: Option<Vec<String>>,
    plugins: Option<Vec<String>>,
    settings: Option<Vec<String>>,
}

impl ViewCache {
    fn slot(&self, view: View) -> Option<&Option<Vec<String>>> {
        match view {
            View::MainMenu => None,
            View::PathView => Some(&self.paths),
            View::AliasView => Some(&self.aliases),
            View::ConstantsView => Some(&self.constants),
            View::CompletionsView => Some(&self.completions),
            View::BackupsView => Some(&self.backups),
            View::PluginsView => Some(&self.plugins),
            View::SettingsView => Some(&self.settings),
        }
    }

    fn slot_mut(&mut self, view: View) -> Option<&mut Option<Vec<String>>> {
        match view {
            View::MainMenu => None,
            View::PathView => Some(&mut self.paths),
            View::AliasView => Some(&mut self.aliases),
            View::ConstantsView => Some(&mut self.constants),
            View::CompletionsView => Some(&mut self.completions),
            View::BackupsView => Some(&mut self.backups),
            View::PluginsView => Some(&mut self.plugins),
            View::SettingsView => Some(&mut self.settings),
        }
    }

    /// Cached list for `view`, if loaded.
    #[must_use]
    pub fn get(&self, view: View) -> Option<&[String]> {
        self.slot(view).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn is_loaded(&self, view: View) -> bool {
        self.get(view).is_some()
    }

    /// Store a freshly loaded list. Ignored for the main menu.
    pub fn set(&mut self, view: View, items: Vec<String>) {
        if let Some(slot) = self.slot_mut(view) {
            *slot = Some(items);
        }
    }

    /// Drop `view`'s list so the next visit reloads it.
    pub fn invalidate(&mut self, view: View) {
        if let Some(slot) = self.slot_mut(view) {
            *slot = None;
        }
    }
}
