//! wikidown CLI - render wiki-flavoured markdown against a folder of documents.
//!
//! - `render`: print a file as HTML, optionally with embeds filled in
//! - `links`: list a file's outgoing wiki-links
//! - `index`: list every document in the folder as TOML
//! - `config`: show or update the config file

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use wikidown_config::{Config, check_embed_depth};
use wikidown_engine::embeds::DEFAULT_MAX_DEPTH;
use wikidown_engine::{
    DocLibrary, DocLink, DocumentRef, DocumentResolver, EmbedFiller, NoDocuments,
    extract_doc_links, render, resolve_linked_ids,
};

#[derive(Parser)]
#[command(name = "wikidown", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to HTML on stdout.
    Render {
        file: PathBuf,
        /// Documents folder that links and embeds resolve against (overrides config).
        #[arg(long)]
        docs: Option<PathBuf>,
        /// Fill embed placeholders with the embedded content.
        #[arg(long)]
        embeds: bool,
        /// Levels of nested embeds to fill (overrides config).
        #[arg(long, requires = "embeds")]
        depth: Option<usize>,
    },
    /// List the wiki-links in a markdown file.
    Links {
        file: PathBuf,
        /// Documents folder used to resolve link targets (overrides config).
        #[arg(long)]
        docs: Option<PathBuf>,
    },
    /// List the documents in the documents folder.
    Index {
        /// Documents folder (overrides config).
        #[arg(long)]
        docs: Option<PathBuf>,
    },
    /// Show the config file, or save new settings to it.
    Config {
        /// Documents folder to use by default.
        #[arg(long)]
        docs: Option<PathBuf>,
        /// Levels of nested embeds `render --embeds` fills by default.
        #[arg(long)]
        embed_depth: Option<usize>,
    },
}

#[derive(Serialize)]
struct IndexListing<'a> {
    documents: Vec<&'a DocumentRef>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to warnings only; RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config file: {e}");
            None
        }
    };

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Render {
            file,
            docs,
            embeds,
            depth,
        } => {
            let library = open_library(docs, config.as_ref())?;
            let depth = match depth {
                Some(depth) => check_embed_depth(depth)?,
                None => config.as_ref().map_or(DEFAULT_MAX_DEPTH, |c| c.embed_depth),
            };
            render_file(&file, library.as_ref(), embeds.then_some(depth), &mut stdout)
        }
        Commands::Links { file, docs } => {
            let library = open_library(docs, config.as_ref())?;
            list_links(&file, library.as_ref(), &mut stdout)
        }
        Commands::Index { docs } => {
            let library = open_library(docs, config.as_ref())?.with_context(|| {
                format!(
                    "No documents folder given and none set in {}",
                    Config::config_path().display()
                )
            })?;
            list_index(&library, &mut stdout)
        }
        Commands::Config { docs, embed_depth } => {
            let config_path = Config::config_path();
            if docs.is_none() && embed_depth.is_none() {
                return show_config(config.as_ref(), &config_path, &mut stdout);
            }
            configure(config, docs, embed_depth)?.save()?;
            writeln!(stdout, "Saved {}", config_path.display())?;
            Ok(())
        }
    }
}

/// Applies `--docs` and `--embed-depth` on top of the current config.
fn configure(
    current: Option<Config>,
    docs: Option<PathBuf>,
    embed_depth: Option<usize>,
) -> Result<Config> {
    let mut config = match (docs, current) {
        (Some(docs), current) => {
            let fresh = Config::new(docs)?;
            match current {
                Some(current) => fresh.with_embed_depth(current.embed_depth)?,
                None => fresh,
            }
        }
        (None, Some(current)) => current,
        (None, None) => bail!("No documents folder configured yet; pass --docs"),
    };
    if let Some(depth) = embed_depth {
        config = config.with_embed_depth(depth)?;
    }
    Ok(config)
}

fn show_config(config: Option<&Config>, config_path: &Path, out: &mut impl Write) -> Result<()> {
    match config {
        Some(config) => write!(out, "{}", toml::to_string_pretty(config)?)?,
        None => writeln!(out, "No config at {}", config_path.display())?,
    }
    Ok(())
}

/// Loads the documents folder from `--docs`, else from the config file.
fn open_library(docs: Option<PathBuf>, config: Option<&Config>) -> Result<Option<DocLibrary>> {
    let Some(dir) = docs.or_else(|| config.map(|c| c.docs_path.clone())) else {
        log::debug!("no documents folder; links will not resolve");
        return Ok(None);
    };
    let library = DocLibrary::load(&dir)
        .with_context(|| format!("Documents path '{}' is invalid", dir.display()))?;
    log::info!("loaded {} documents from {}", library.len(), dir.display());
    Ok(Some(library))
}

fn read_input(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn render_file(
    file: &Path,
    library: Option<&DocLibrary>,
    embed_depth: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let content = read_input(file)?;
    let resolver: &dyn DocumentResolver = match library {
        Some(library) => library,
        None => &NoDocuments,
    };
    let mut html = render(&content, resolver);

    match (library, embed_depth) {
        (Some(library), Some(depth)) => {
            let mut filler = EmbedFiller::new(library, library).max_depth(depth);
            if let Ok(slug) = library.slug_for_path(file) {
                filler = filler.origin(slug);
            }
            html = filler.fill(&html);
        }
        (None, Some(_)) => log::warn!("--embeds needs a documents folder; leaving placeholders"),
        _ => {}
    }

    writeln!(out, "{html}")?;
    Ok(())
}

fn list_links(file: &Path, library: Option<&DocLibrary>, out: &mut impl Write) -> Result<()> {
    let content = read_input(file)?;
    let links = extract_doc_links(&content);

    for link in &links {
        match link {
            DocLink::Id(id) => writeln!(out, "doc:{id}")?,
            DocLink::Slug(slug) => writeln!(out, "{slug}")?,
        }
    }

    if let Some(library) = library {
        let own_id = library
            .slug_for_path(file)
            .ok()
            .and_then(|slug| library.resolve_by_slug(&slug))
            .map(|doc| doc.id);
        for id in resolve_linked_ids(&links, library, own_id.as_deref()) {
            match library.resolve_by_id(&id) {
                Some(doc) => writeln!(out, "-> {} ({})", doc.slug, doc.id)?,
                None => writeln!(out, "-> ? ({id})")?,
            }
        }
    }
    Ok(())
}

fn list_index(library: &DocLibrary, out: &mut impl Write) -> Result<()> {
    let listing = IndexListing {
        documents: library.index().iter().collect(),
    };
    write!(out, "{}", toml::to_string_pretty(&listing)?)?;
    Ok(())
}
