use chatroll::core::transcript::fragments;

#[test]
fn test_flat_lines_have_no_ancestors() {
    let frags = fragments("one\ntwo\nthree\n");
    assert_eq!(frags.len(), 3);
    assert!(frags.iter().all(|f| f.ancestors.is_empty()));
}

#[test]
fn test_blank_lines_are_skipped() {
    let frags = fragments("one\n\n   \ntwo\n");
    let texts: Vec<&str> = frags.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn test_indentation_builds_ancestor_chain_closest_first() {
    let frags = fragments("root\n  parent\n    leaf\n");
    assert_eq!(frags[2].text, "leaf");
    assert_eq!(frags[2].ancestors, vec!["parent".to_string(), "root".to_string()]);
}

#[test]
fn test_dedent_pops_back_to_sibling_level() {
    let frags = fragments("root\n  childA\n    grand\n  childB\n");
    let child_b = frags.last().expect("childB");
    assert_eq!(child_b.text, "childB");
    assert_eq!(child_b.ancestors, vec!["root".to_string()]);
}

#[test]
fn test_same_level_lines_are_siblings_not_ancestors() {
    let frags = fragments("  a\n  b\n");
    assert_eq!(frags[1].text, "b");
    assert!(frags[1].ancestors.is_empty());
}
