// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and `code`.\n\n- Bullet point\n  - Flattened item\n1. Ordered item\n\n> Quoted [link](https://example.com \"title\")\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

/// One long line that exercises every inline rule, including the fallbacks.
#[allow(dead_code)]
pub fn generate_inline_heavy(size: usize) -> String {
    let unit = "plain ***strong em*** ~~del~~ `` code `` \\* [a **b**](u) ![i](s) *x * y ** z ";
    unit.repeat(size)
}
