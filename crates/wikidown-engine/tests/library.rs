use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wikidown_engine::embeds::DEFAULT_MAX_DEPTH;
use wikidown_engine::{
    DocLibrary, DocumentResolver, EmbedFiller, extract_doc_links, fill_embeds, render,
    resolve_linked_ids,
};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn docs() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "index.md",
        "# Welcome\nStart with [[team/handbook]].\n![[team/handbook#Setup]]",
    );
    write(
        dir.path(),
        "team/handbook.md",
        "# Handbook\nintro\n## Setup\nInstall [[tools]]\n## Later\nnot embedded",
    );
    write(dir.path(), "tools.md", "Just a list of tools");
    dir
}

#[test]
fn renders_and_fills_from_a_folder() {
    let dir = docs();
    let library = DocLibrary::load(dir.path()).unwrap();
    let content = library.read("index").unwrap();

    let html = render(&content, &library);
    assert!(html.contains(">Handbook</a>"));
    assert!(html.contains(r#"data-embed-fragment="Setup""#));

    let filled = fill_embeds(&html, &library, &library, DEFAULT_MAX_DEPTH);
    assert!(filled.contains("md-embed--loaded"));
    assert!(filled.contains("<h2>Setup</h2>"));
    // `tools` has no heading, so its file stem is its title
    assert!(filled.contains(">tools</a>"));
    assert!(!filled.contains("not embedded"));
}

#[test]
fn origin_blocks_self_embeds() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "me.md", "# Me\n![[me]]");
    let library = DocLibrary::load(dir.path()).unwrap();

    let html = render(&library.read("me").unwrap(), &library);
    let filled = EmbedFiller::new(&library, &library)
        .origin("me")
        .fill(&html);

    assert!(filled.contains("md-embed--error"));
}

#[test]
fn outgoing_links_resolve_to_library_ids() {
    let dir = docs();
    let library = DocLibrary::load(dir.path()).unwrap();
    let index_id = library.resolve_by_slug("index").unwrap().id;
    let handbook_id = library.resolve_by_slug("team/handbook").unwrap().id;

    let links = extract_doc_links(&library.read("index").unwrap());
    assert_eq!(links.len(), 2);

    assert_eq!(
        resolve_linked_ids(&links, &library, Some(&index_id)),
        vec![handbook_id]
    );
}
