//! Interface between the UI engine and the host that owns the shell
//! configuration files.
//!
//! The engine never touches configuration files itself. Every list it
//! shows, every detail page and every mutation goes through [`Bridge`].
//! Items are identified by the exact string the host returned in the list.
//!
//! [`MemoryBridge`] is an in-memory host used by the demo binary and tests.

/// Host operations the UI needs. All calls are synchronous.
///
/// Mutations report success as `bool`; after a `false`, [`last_error`]
/// should describe what went wrong.
///
/// [`last_error`]: Bridge::last_error
pub trait Bridge {
    fn load_paths(&mut self) -> Vec<String>;
    fn load_aliases(&mut self) -> Vec<String>;
    fn load_constants(&mut self) -> Vec<String>;
    fn load_completions(&mut self) -> Vec<String>;
    fn load_backups(&mut self) -> Vec<String>;
    fn load_plugins(&mut self) -> Vec<String>;
    fn load_settings(&mut self) -> Vec<String>;

    fn delete_path(&mut self, key: &str) -> bool;
    fn delete_alias(&mut self, key: &str) -> bool;
    fn delete_constant(&mut self, key: &str) -> bool;
    fn delete_backup(&mut self, key: &str) -> bool;

    fn path_detail(&mut self, key: &str) -> Vec<String>;
    fn alias_detail(&mut self, key: &str) -> Vec<String>;
    fn constant_detail(&mut self, key: &str) -> Vec<String>;
    fn completion_detail(&mut self, key: &str) -> Vec<String>;
    fn backup_detail(&mut self, key: &str) -> Vec<String>;
    fn plugin_detail(&mut self, key: &str) -> Vec<String>;
    fn setting_detail(&mut self, key: &str) -> Vec<String>;

    fn add_path(&mut self, dir: &str) -> bool;
    fn add_alias(&mut self, name: &str, command: &str) -> bool;
    fn add_constant(&mut self, name: &str, value: &str) -> bool;

    /// Remove old backups beyond the host's retention limit.
    fn cleanup_backups(&mut self) -> bool;

    /// Description of the most recent failure, if any.
    fn last_error(&self) -> Option<String>;
}

impl<B: Bridge + ?Sized> Bridge for Box<B> {
    fn load_paths(&mut self) -> Vec<String> {
        (**self).load_paths()
    }
    fn load_aliases(&mut self) -> Vec<String> {
        (**self).load_aliases()
    }
    fn load_constants(&mut self) -> Vec<String> {
        (**self).load_constants()
    }
    fn load_completions(&mut self) -> Vec<String> {
        (**self).load_completions()
    }
    fn load_backups(&mut self) -> Vec<String> {
        (**self).load_backups()
    }
    fn load_plugins(&mut self) -> Vec<String> {
        (**self).load_plugins()
    }
    fn load_settings(&mut self) -> Vec<String> {
        (**self).load_settings()
    }
    fn delete_path(&mut self, key: &str) -> bool {
        (**self).delete_path(key)
    }
    fn delete_alias(&mut self, key: &str) -> bool {
        (**self).delete_alias(key)
    }
    fn delete_constant(&mut self, key: &str) -> bool {
        (**self).delete_constant(key)
    }
    fn delete_backup(&mut self, key: &str) -> bool {
        (**self).delete_backup(key)
    }
    fn path_detail(&mut self, key: &str) -> Vec<String> {
        (**self).path_detail(key)
    }
    fn alias_detail(&mut self, key: &str) -> Vec<String> {
        (**self).alias_detail(key)
    }
    fn constant_detail(&mut self, key: &str) -> Vec<String> {
        (**self).constant_detail(key)
    }
    fn completion_detail(&mut self, key: &str) -> Vec<String> {
        (**self).completion_detail(key)
    }
    fn backup_detail(&mut self, key: &str) -> Vec<String> {
        (**self).backup_detail(key)
    }
    fn plugin_detail(&mut self, key: &str) -> Vec<String> {
        (**self).plugin_detail(key)
    }
    fn setting_detail(&mut self, key: &str) -> Vec<String> {
        (**self).setting_detail(key)
    }
    fn add_path(&mut self, dir: &str) -> bool {
        (**self).add_path(dir)
    }
    fn add_alias(&mut self, name: &str, command: &str) -> bool {
        (**self).add_alias(name, command)
    }
    fn add_constant(&mut self, name: &str, value: &str) -> bool {
        (**self).add_constant(name, value)
    }
    fn cleanup_backups(&mut self) -> bool {
        (**self).cleanup_backups()
    }
    fn last_error(&self) -> Option<String> {
        (**self).last_error()
    }
}

/// Backups kept by [`MemoryBridge::cleanup_backups`].
const BACKUP_RETENTION: usize = 3;

/// In-memory host with seed data.
///
/// Aliases and constants are listed as `name=value`. With
/// [`fail_mutations`](Self::fail_mutations) every add, delete and cleanup
/// fails with a canned error.
#[derive(Clone, Debug, Default)]
pub struct MemoryBridge {
    pub paths: Vec<String>,
    pub aliases: Vec<(String, String)>,
    pub constants: Vec<(String, String)>,
    pub completions: Vec<String>,
    pub backups: Vec<String>,
    pub plugins: Vec<String>,
    pub settings: Vec<(String, String)>,
    pub fail_mutations: bool,
    /// Number of `load_*` calls served, for cache assertions.
    pub loads: usize,
    last_error: Option<String>,
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn display_pair((name, value): &(String, String)) -> String {
    format!("{name}={value}")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl MemoryBridge {
    /// An empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host pre-populated with a plausible shell configuration.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self {
            paths: strings(&[
                "/usr/local/bin",
                "/usr/bin",
                "/bin",
                "/usr/local/go/bin",
                "~/.cargo/bin",
                "~/.local/bin",
            ]),
            aliases: pairs(&[
                ("ll", "ls -la"),
                ("gs", "git status"),
                ("gd", "git diff"),
                ("..", "cd .."),
                ("k", "kubectl"),
            ]),
            constants: pairs(&[
                ("EDITOR", "nvim"),
                ("PAGER", "less -R"),
                ("GOPATH", "~/go"),
                ("LANG", "en_US.UTF-8"),
            ]),
            completions: strings(&["git", "cargo", "kubectl", "docker"]),
            backups: strings(&[
                "2026-10-01_0912.tar.gz",
                "2026-10-05_1744.tar.gz",
                "2026-10-09_0830.tar.gz",
                "2026-10-12_2201.tar.gz",
                "2026-10-15_1015.tar.gz",
            ]),
            plugins: strings(&["zsh-autosuggestions", "zsh-syntax-highlighting", "fzf-tab"]),
            settings: pairs(&[
                ("shell", "zsh"),
                ("backup_retention", "3"),
                ("config_dir", "~/.config/shellcfg"),
            ]),
            ..Self::default()
        }
    }

    /// Make every mutation fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    fn fail(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        tracing::warn!(error = %message, "bridge mutation failed");
        self.last_error = Some(message);
        false
    }

    fn succeed(&mut self) -> bool {
        self.last_error = None;
        true
    }

    fn injected_failure(&mut self) -> bool {
        if !self.fail_mutations {
            return false;
        }
        self.fail("configuration file is read-only");
        true
    }

    fn remove_string(&mut self, list: fn(&mut Self) -> &mut Vec<String>, key: &str) -> bool {
        if self.injected_failure() {
            return false;
        }
        let items = list(self);
        match items.iter().position(|item| item == key) {
            Some(idx) => {
                items.remove(idx);
                self.succeed()
            }
            None => self.fail(format!("{key} not found")),
        }
    }

    fn remove_pair(
        &mut self,
        list: fn(&mut Self) -> &mut Vec<(String, String)>,
        key: &str,
    ) -> bool {
        if self.injected_failure() {
            return false;
        }
        let items = list(self);
        match items.iter().position(|pair| display_pair(pair) == key) {
            Some(idx) => {
                items.remove(idx);
                self.succeed()
            }
            None => self.fail(format!("{key} not found")),
        }
    }

    fn add_pair(
        &mut self,
        list: fn(&mut Self) -> &mut Vec<(String, String)>,
        kind: &str,
        name: &str,
        value: &str,
    ) -> bool {
        if self.injected_failure() {
            return false;
        }
        if !is_identifier(name) {
            return self.fail(format!("invalid {kind} name: {name}"));
        }
        let items = list(self);
        if items.iter().any(|(existing, _)| existing == name) {
            return self.fail(format!("{kind} {name} already exists"));
        }
        items.push((name.to_string(), value.to_string()));
        self.succeed()
    }

    fn find_pair<'a>(items: &'a [(String, String)], key: &str) -> Option<&'a (String, String)> {
        items.iter().find(|pair| display_pair(pair) == key)
    }
}

impl Bridge for MemoryBridge {
    fn load_paths(&mut self) -> Vec<String> {
        self.loads += 1;
        self.paths.clone()
    }

    fn load_aliases(&mut self) -> Vec<String> {
        self.loads += 1;
        self.aliases.iter().map(display_pair).collect()
    }

    fn load_constants(&mut self) -> Vec<String> {
        self.loads += 1;
        self.constants.iter().map(display_pair).collect()
    }

    fn load_completions(&mut self) -> Vec<String> {
        self.loads += 1;
        self.completions.clone()
    }

    fn load_backups(&mut self) -> Vec<String> {
        self.loads += 1;
        self.backups.clone()
    }

    fn load_plugins(&mut self) -> Vec<String> {
        self.loads += 1;
        self.plugins.clone()
    }

    fn load_settings(&mut self) -> Vec<String> {
        self.loads += 1;
        self.settings.iter().map(display_pair).collect()
    }

    fn delete_path(&mut self, key: &str) -> bool {
        self.remove_string(|b| &mut b.paths, key)
    }

    fn delete_alias(&mut self, key: &str) -> bool {
        self.remove_pair(|b| &mut b.aliases, key)
    }

    fn delete_constant(&mut self, key: &str) -> bool {
        self.remove_pair(|b| &mut b.constants, key)
    }

    fn delete_backup(&mut self, key: &str) -> bool {
        self.remove_string(|b| &mut b.backups, key)
    }

    fn path_detail(&mut self, key: &str) -> Vec<String> {
        let position = self.paths.iter().position(|p| p == key);
        vec![
            format!("Directory: {key}"),
            match position {
                Some(idx) => format!("Search order: {} of {}", idx + 1, self.paths.len()),
                None => "Search order: not in PATH".to_string(),
            },
        ]
    }

    fn alias_detail(&mut self, key: &str) -> Vec<String> {
        match Self::find_pair(&self.aliases, key) {
            Some((name, command)) => vec![format!("Alias: {name}"), format!("Command: {command}")],
            None => vec![format!("{key} not found")],
        }
    }

    fn constant_detail(&mut self, key: &str) -> Vec<String> {
        match Self::find_pair(&self.constants, key) {
            Some((name, value)) => vec![
                format!("Variable: {name}"),
                format!("Value: {value}"),
                format!("Exported as: export {name}=\"{value}\""),
            ],
            None => vec![format!("{key} not found")],
        }
    }

    fn completion_detail(&mut self, key: &str) -> Vec<String> {
        vec![
            format!("Completion: {key}"),
            format!("Source: completions/_{key}"),
        ]
    }

    fn backup_detail(&mut self, key: &str) -> Vec<String> {
        vec![format!("Archive: {key}"), "Contents: aliases, constants, path".to_string()]
    }

    fn plugin_detail(&mut self, key: &str) -> Vec<String> {
        vec![format!("Plugin: {key}"), "Status: enabled".to_string()]
    }

    fn setting_detail(&mut self, key: &str) -> Vec<String> {
        match Self::find_pair(&self.settings, key) {
            Some((name, value)) => vec![format!("Setting: {name}"), format!("Value: {value}")],
            None => vec![format!("{key} not found")],
        }
    }

    fn add_path(&mut self, dir: &str) -> bool {
        if self.injected_failure() {
            return false;
        }
        if self.paths.iter().any(|p| p == dir) {
            return self.fail(format!("{dir} is already in PATH"));
        }
        self.paths.push(dir.to_string());
        self.succeed()
    }

    fn add_alias(&mut self, name: &str, command: &str) -> bool {
        self.add_pair(|b| &mut b.aliases, "alias", name, command)
    }

    fn add_constant(&mut self, name: &str, value: &str) -> bool {
        self.add_pair(|b| &mut b.constants, "constant", name, value)
    }

    fn cleanup_backups(&mut self) -> bool {
        if self.injected_failure() {
            return false;
        }
        let excess = self.backups.len().saturating_sub(BACKUP_RETENTION);
        self.backups.drain(..excess);
        self.succeed()
    }

    fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }
}
