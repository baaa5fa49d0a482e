// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use wikidown_engine::{DocIndex, DocumentRef};

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *em*, `code` and [[team/handbook|a link]].\n\n- Bullet point\n  - Nested item with [[missing/page]]\n- Another item\n1. Ordered\n\n| Name | Link |\n|------|------|\n| a | [[home]] |\n| b | https://example.com |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> quoted ![[home#Intro]]\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn library() -> DocIndex {
    [
        DocumentRef::new("d1", "home", "Home Page"),
        DocumentRef::new("d2", "team/handbook", "Handbook"),
    ]
    .into_iter()
    .collect()
}
