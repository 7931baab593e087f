use super::{ComponentDefinition, DefinitionKind};
use crate::config::Config;
use crate::discovery::{normalize_path, FileFinder};
use crate::error::read_source;
use crate::parser::{DefinitionMatch, NavigationSyntax};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Locates the files that define a component.
///
/// Every lookup is a scan over all source files under the root, so results
/// are memoized per component name for the lifetime of the resolver. The
/// file list itself is walked once, on first use.
pub struct ComponentResolver<'a> {
    root: PathBuf,
    config: &'a Config,
    syntax: &'a dyn NavigationSyntax,
    files: Option<Vec<PathBuf>>,
    memo: HashMap<String, Vec<ComponentDefinition>>,
    scans: usize,
}

impl<'a> ComponentResolver<'a> {
    pub fn new(config: &'a Config, syntax: &'a dyn NavigationSyntax, root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            syntax,
            files: None,
            memo: HashMap::new(),
            scans: 0,
        }
    }

    /// All definitions of `component` under the root, in walk order
    pub fn definitions(&mut self, component: &str) -> Vec<ComponentDefinition> {
        if let Some(cached) = self.memo.get(component) {
            trace!("Resolver cache hit: {}", component);
            return cached.clone();
        }

        let definitions = self.scan(component);
        self.memo.insert(component.to_string(), definitions.clone());
        definitions
    }

    /// Distinct files defining `component`; any of them is a valid recursion target
    pub fn find_defining_files(&mut self, component: &str) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        self.definitions(component)
            .into_iter()
            .map(|definition| definition.file_path)
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }

    /// Number of tree scans performed so far (cache misses)
    pub fn scan_count(&self) -> usize {
        self.scans
    }

    fn scan(&mut self, component: &str) -> Vec<ComponentDefinition> {
        self.scans += 1;
        debug!("Scanning for definitions of {}", component);

        let finder = FileFinder::new(self.config);
        let root = &self.root;
        let files = self.files.get_or_insert_with(|| finder.find_files(root));

        let mut definitions = Vec::new();
        for file in files.iter() {
            let contents = match read_source(file) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!("{}", err);
                    continue;
                }
            };

            match self.syntax.find_definition(&contents, component) {
                Some(DefinitionMatch::Defined(kind)) => {
                    definitions.push(ComponentDefinition {
                        component_name: component.to_string(),
                        file_path: file.clone(),
                        kind,
                    });
                }
                Some(DefinitionMatch::Lazy { specifier }) => {
                    match resolve_lazy_import(file, &specifier, &self.config.extensions) {
                        Some(target) => definitions.push(ComponentDefinition {
                            component_name: component.to_string(),
                            file_path: target,
                            kind: DefinitionKind::LazyImport,
                        }),
                        None => debug!(
                            "Unresolved lazy import of {} in {}: {}",
                            component,
                            file.display(),
                            specifier
                        ),
                    }
                }
                None => {}
            }
        }

        debug!("{} defined in {} place(s)", component, definitions.len());
        definitions
    }
}

/// Resolve a deferred import specifier relative to the importing file.
///
/// Only `./` and `../` specifiers are resolved; package and alias imports
/// yield `None`. The literal path is tried first, then each source extension,
/// then `index.<ext>` inside a directory of that name.
pub fn resolve_lazy_import(importer: &Path, specifier: &str, extensions: &[String]) -> Option<PathBuf> {
    if !specifier.starts_with('.') {
        return None;
    }

    let base = normalize_path(&importer.parent()?.join(specifier));
    if base.is_file() {
        return Some(base);
    }

    let with_extension = extensions.iter().map(|ext| {
        let mut path = OsString::from(base.as_os_str());
        path.push(".");
        path.push(ext);
        PathBuf::from(path)
    });
    let index_files = extensions.iter().map(|ext| base.join(format!("index.{}", ext)));

    with_extension.chain(index_files).find(|candidate| candidate.is_file())
}
