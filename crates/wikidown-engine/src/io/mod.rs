use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use uuid::Uuid;

use crate::embeds::{EmbedError, EmbedSource, EmbeddedDocument};
use crate::models::DocumentRef;
use crate::parsing::blocks::kinds::Heading;
use crate::parsing::source::lines;
use crate::resolver::{DocIndex, DocumentResolver};
use crate::slug::clean_slug;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
    #[error("Path is not inside the docs directory: {0}")]
    InvalidPath(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for markdown files in the docs directory, sorted
pub fn scan_markdown_files(docs_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_docs_dir(docs_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(docs_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Title of a markdown document: its first level-one heading.
fn title_from_content(content: &str) -> Option<&str> {
    lines(content).find_map(|line| match Heading::parse(line.text) {
        Some((1, text)) if !text.is_empty() => Some(text),
        _ => None,
    })
}

/// Stable id for a slug: UUID v5 in the URL namespace.
pub fn doc_id_for_slug(slug: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, slug.as_bytes()).to_string()
}

/// A folder of markdown files acting as a document store.
///
/// Each `.md` file is one document: its slug is the relative path without
/// `.md`, its title the first `# ` heading (or the file stem), and its id is
/// derived from the slug so it is the same on every load.
#[derive(Debug)]
pub struct DocLibrary {
    root: PathBuf,
    index: DocIndex,
    paths: HashMap<String, RelativePathBuf>,
}

impl DocLibrary {
    pub fn load(root: &Path) -> Result<Self, IoError> {
        let mut index = DocIndex::new();
        let mut paths = HashMap::new();

        for path in scan_markdown_files(root)? {
            let relative = relative_to(&path, root)?;
            let slug = clean_slug(relative.as_str());
            let content = read_file(&relative, root)?;
            let title = title_from_content(&content)
                .or_else(|| relative.file_stem())
                .unwrap_or(slug.as_str())
                .to_string();

            log::debug!("loaded {slug} ({title})");
            index.insert(DocumentRef::new(doc_id_for_slug(&slug), slug.clone(), title));
            paths.insert(slug, relative);
        }

        Ok(Self {
            root: root.to_path_buf(),
            index,
            paths,
        })
    }

    pub fn index(&self) -> &DocIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Slug a file inside the library is known by.
    pub fn slug_for_path(&self, path: &Path) -> Result<String, IoError> {
        let canonical_root = fs::canonicalize(&self.root)?;
        let canonical = fs::canonicalize(path)?;
        let relative = relative_to(&canonical, &canonical_root)?;
        Ok(clean_slug(relative.as_str()))
    }

    /// Reads a document's current content.
    pub fn read(&self, slug: &str) -> Result<String, IoError> {
        let relative = self
            .paths
            .get(&clean_slug(slug))
            .ok_or_else(|| IoError::NotFound(RelativePath::new(slug).to_path(&self.root)))?;
        read_file(relative, &self.root)
    }
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    path.strip_prefix(root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| IoError::InvalidPath(path.to_path_buf()))
}

impl DocumentResolver for DocLibrary {
    fn resolve_by_id(&self, id: &str) -> Option<DocumentRef> {
        self.index.resolve_by_id(id)
    }

    fn resolve_by_slug(&self, slug: &str) -> Option<DocumentRef> {
        self.index.resolve_by_slug(slug)
    }
}

impl EmbedSource for DocLibrary {
    fn fetch(&self, slug: &str) -> Result<EmbeddedDocument, EmbedError> {
        let doc = self
            .index
            .resolve_by_slug(slug)
            .ok_or_else(|| EmbedError::NotFound(slug.to_string()))?;

        let content = self.read(&doc.slug).map_err(|e| match e {
            IoError::NotFound(_) => EmbedError::NotFound(slug.to_string()),
            IoError::Io(source) => EmbedError::Read {
                slug: slug.to_string(),
                source,
            },
            other => EmbedError::Read {
                slug: slug.to_string(),
                source: std::io::Error::other(other.to_string()),
            },
        })?;

        Ok(EmbeddedDocument {
            slug: doc.slug,
            title: doc.title,
            content,
        })
    }
}
