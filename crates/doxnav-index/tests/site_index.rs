//! End-to-end checks against a real generator-produced site index.

use std::fs;

use doxnav_index::{CheckOptions, IndexLoader, lint, unformatted, write};

/// Sidebar index of a hardware-design documentation site, as published
/// by its generator.
const SITE_INDEX: &str = r##"var index =
[
    [ "VHDL Generic Parameters", "index.html#generic_params", null ],
    [ "RTL Verification", "index.html#rtl_verification", [
      [ "VCD-files automatic comparision", "index.html#vcd_autocheck", [
        [ "Generating VCD-pattern form SystemC model", "index.html#gen_vcd_systemc", null ],
        [ "Compare RIVER SystemC model relative RTL", "index.html#compare_vcd_rtl", null ]
      ] ]
    ] ],
    [ "RISC-V Processor", "index.html#riscv_core", null ],
    [ "Peripheries", "index.html#periphery", null ],
    [ "RISC-V debugger", "index.html#debugger", null ]
];"##;

#[test]
fn test_loads_with_expected_top_level_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("index.js"), SITE_INDEX).unwrap();

    let index = IndexLoader::new(temp_dir.path().to_path_buf()).load().unwrap();

    let labels: Vec<_> = index
        .main()
        .roots
        .iter()
        .map(|root| root.label.as_str())
        .collect();
    assert_eq!(
        labels,
        [
            "VHDL Generic Parameters",
            "RTL Verification",
            "RISC-V Processor",
            "Peripheries",
            "RISC-V debugger",
        ]
    );
}

#[test]
fn test_verification_section_holds_vcd_comparison_group() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("index.js"), SITE_INDEX).unwrap();

    let index = IndexLoader::new(temp_dir.path().to_path_buf()).load().unwrap();

    let verification = index
        .main()
        .roots
        .iter()
        .find(|root| root.label == "RTL Verification")
        .unwrap();
    let group = verification
        .find(&["VCD-files automatic comparision"])
        .unwrap();

    let leaves: Vec<_> = group
        .children
        .nodes()
        .iter()
        .map(|child| child.label.as_str())
        .collect();
    assert_eq!(
        leaves,
        [
            "Generating VCD-pattern form SystemC model",
            "Compare RIVER SystemC model relative RTL",
        ]
    );
    assert!(group.children.nodes().iter().all(|child| child.is_leaf()));
}

#[test]
fn test_site_index_lints_clean() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("index.js"), SITE_INDEX).unwrap();

    let index = IndexLoader::new(temp_dir.path().to_path_buf()).load().unwrap();

    assert!(lint(&index, &CheckOptions::default()).is_empty());
}

#[test]
fn test_rewrite_preserves_structure_and_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("index.js"), SITE_INDEX).unwrap();
    let loader = IndexLoader::new(temp_dir.path().to_path_buf());
    let index = loader.load().unwrap();

    // Generator output is not in canonical form yet.
    assert_eq!(unformatted(&index).unwrap().len(), 1);

    write(&index).unwrap();
    let reloaded = loader.load().unwrap();

    assert_eq!(reloaded, index);
    assert!(unformatted(&reloaded).unwrap().is_empty());
}

#[test]
fn test_expanded_tree_counts_every_entry() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("index.js"), SITE_INDEX).unwrap();

    let index = IndexLoader::new(temp_dir.path().to_path_buf()).load().unwrap();

    let expanded = index.expanded();
    let total: usize = expanded.iter().map(doxnav_tree::NavNode::node_count).sum();
    assert_eq!(total, 8);
    assert_eq!(index.node_count(), 8);
}
