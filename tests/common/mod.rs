// tests/common/mod.rs
use std::{fs, path::Path};

/// Lays out the five-file fixture tree used by the end-to-end scenarios:
/// four files at the root plus one nested under `subdir/`, 5300 bytes in
/// total.
pub fn populate_sample_tree(root: &Path) {
    write_bytes(&root.join("test1.txt"), 100);
    write_bytes(&root.join("test2.txt"), 200);
    write_bytes(&root.join("image.jpg"), 1500);
    write_bytes(&root.join("document.pdf"), 3000);
    fs::create_dir(root.join("subdir")).expect("create subdir");
    write_bytes(&root.join("subdir").join("nested.txt"), 500);
}

fn write_bytes(path: &Path, len: usize) {
    fs::write(path, vec![b'x'; len]).expect("write fixture file");
}
