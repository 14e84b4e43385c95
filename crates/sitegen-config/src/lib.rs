use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitegen_core::rules::DEFAULT_SHUFFLE_SEED;
use sitegen_core::Domain;
use thiserror::Error;

const CONFIG_FILENAME: &str = "sitegen.toml";

pub const DEFAULT_FOOTER_TARGETS: [&str; 6] = [
    "index.html",
    "about-igem.html",
    "the-association.html",
    "our-previous-teams.html",
    "our-sponsors.html",
    "alumni-stories.html",
];

/// Every location a run reads from or writes to. Relative paths resolve
/// against `root`; outputs additionally live under `output_dir`.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub shuffle_seed: u64,
    pub alumni: DomainPaths,
    pub board: DomainPaths,
    pub sponsors: DomainPaths,
    pub teams: DomainPaths,
    pub contact: ContactPaths,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPaths {
    pub data_dir: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPaths {
    pub data_file: PathBuf,
    pub output: PathBuf,
    pub footer_targets: Vec<String>,
}

impl DomainPaths {
    fn new(data_dir: &str, output: &str) -> Self {
        Self {
            data_dir: PathBuf::from(data_dir),
            output: PathBuf::from(output),
        }
    }
}

impl SiteConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_dir: PathBuf::from("."),
            shuffle_seed: DEFAULT_SHUFFLE_SEED,
            alumni: DomainPaths::new("alumni-data", "alumni-stories.html"),
            board: DomainPaths::new("board-data", "the-association.html"),
            sponsors: DomainPaths::new("sponsor-data", "our-sponsors.html"),
            teams: DomainPaths::new("team-data", "our-previous-teams.html"),
            contact: ContactPaths {
                data_file: PathBuf::from("contact-data").join("contact-info.txt"),
                output: PathBuf::from("contact-us.html"),
                footer_targets: DEFAULT_FOOTER_TARGETS
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            },
        }
    }

    pub fn domain(&self, domain: Domain) -> &DomainPaths {
        match domain {
            Domain::Alumni => &self.alumni,
            Domain::Board => &self.board,
            Domain::Sponsors => &self.sponsors,
            Domain::Teams => &self.teams,
        }
    }

    fn domain_mut(&mut self, domain: Domain) -> &mut DomainPaths {
        match domain {
            Domain::Alumni => &mut self.alumni,
            Domain::Board => &mut self.board,
            Domain::Sponsors => &mut self.sponsors,
            Domain::Teams => &mut self.teams,
        }
    }

    pub fn data_dir(&self, domain: Domain) -> PathBuf {
        self.root.join(&self.domain(domain).data_dir)
    }

    pub fn output_root(&self) -> PathBuf {
        if self.output_dir == Path::new(".") {
            return self.root.clone();
        }
        self.root.join(&self.output_dir)
    }

    pub fn output_path(&self, domain: Domain) -> PathBuf {
        self.output_root().join(&self.domain(domain).output)
    }

    pub fn contact_data_file(&self) -> PathBuf {
        self.root.join(&self.contact.data_file)
    }

    pub fn contact_output_path(&self) -> PathBuf {
        self.output_root().join(&self.contact.output)
    }

    pub fn footer_target_paths(&self) -> Vec<PathBuf> {
        let base = self.output_root();
        self.contact
            .footer_targets
            .iter()
            .map(|name| base.join(name))
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid {field} value: path cannot be empty")]
    EmptyPath { field: String },
    #[error("invalid footer target (expected a file name): {0}")]
    InvalidFooterTarget(String),
    #[error("duplicate footer target: {0}")]
    DuplicateFooterTarget(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_dir: Option<PathBuf>,
    shuffle_seed: Option<u64>,
    alumni: Option<DomainFile>,
    board: Option<DomainFile>,
    sponsors: Option<DomainFile>,
    teams: Option<DomainFile>,
    contact: Option<ContactFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DomainFile {
    data_dir: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContactFile {
    data_file: Option<PathBuf>,
    output: Option<PathBuf>,
    footer_targets: Option<Vec<String>>,
}

/// Loads `config_path` when given (it must exist), else `sitegen.toml`
/// under `root` when present, else the defaults.
pub fn load(root: &Path, config_path: Option<PathBuf>) -> Result<SiteConfig> {
    let required = config_path.is_some();
    let path = resolve_config_path(root, config_path)?;
    match load_at_path(root, &path, required)? {
        Some(config) => Ok(config),
        None => Ok(SiteConfig::with_root(root)),
    }
}

pub fn resolve_config_path(root: &Path, custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => Ok(root.join(CONFIG_FILENAME)),
    }
}

fn load_at_path(root: &Path, path: &Path, required: bool) -> Result<Option<SiteConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(root, parsed)?))
}

fn merge_config(root: &Path, parsed: ConfigFile) -> Result<SiteConfig> {
    let mut config = SiteConfig::with_root(root);

    if let Some(output_dir) = parsed.output_dir {
        config.output_dir = non_empty("output_dir", output_dir)?;
    }

    if let Some(seed) = parsed.shuffle_seed {
        config.shuffle_seed = seed;
    }

    let domains = [
        (Domain::Alumni, parsed.alumni),
        (Domain::Board, parsed.board),
        (Domain::Sponsors, parsed.sponsors),
        (Domain::Teams, parsed.teams),
    ];
    for (domain, file) in domains {
        let Some(file) = file else {
            continue;
        };
        let paths = config.domain_mut(domain);
        if let Some(data_dir) = file.data_dir {
            paths.data_dir = non_empty(&format!("{domain}.data_dir"), data_dir)?;
        }
        if let Some(output) = file.output {
            paths.output = non_empty(&format!("{domain}.output"), output)?;
        }
    }

    if let Some(contact) = parsed.contact {
        if let Some(data_file) = contact.data_file {
            config.contact.data_file = non_empty("contact.data_file", data_file)?;
        }
        if let Some(output) = contact.output {
            config.contact.output = non_empty("contact.output", output)?;
        }
        if let Some(targets) = contact.footer_targets {
            config.contact.footer_targets = validate_footer_targets(targets)?;
        }
    }

    Ok(config)
}

fn non_empty(field: &str, path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath {
            field: field.to_string(),
        });
    }
    Ok(path)
}

fn validate_footer_targets(targets: Vec<String>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(targets.len());
    for raw in targets {
        let name = raw.trim();
        if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
            return Err(ConfigError::InvalidFooterTarget(raw));
        }
        if !seen.insert(name.to_string()) {
            return Err(ConfigError::DuplicateFooterTarget(name.to_string()));
        }
        out.push(name.to_string());
    }
    Ok(out)
}
