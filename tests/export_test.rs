// Export: selected cells as one tab-separated line, in rank order

use std::collections::HashMap;

use viewer_wasm::export::join_exported;
use viewer_wasm::models::{CellRef, SelectionState};

#[test]
fn joins_fields_with_tabs() {
    assert_eq!(join_exported(["MCA101", "Theory", "28", "A+"]), "MCA101\tTheory\t28\tA+");
}

#[test]
fn single_field_has_no_delimiter() {
    assert_eq!(join_exported(["8.5"]), "8.5");
}

#[test]
fn empty_input_yields_empty_line() {
    assert_eq!(join_exported(Vec::<String>::new()), "");
}

#[test]
fn fields_follow_selection_rank_order() {
    // Texts come from the page; simulate cell text lookup with a map.
    let mut texts: HashMap<CellRef, &str> = HashMap::new();
    let roll = CellRef::new("general-info", 0, 1);
    let grade = CellRef::new("block-0", 2, 6);
    let name = CellRef::new("general-info", 2, 1);
    texts.insert(roll.clone(), "2203456");
    texts.insert(grade.clone(), "A+");
    texts.insert(name.clone(), "Asha Verma");

    let mut selection = SelectionState::new();
    selection.toggle(name.clone(), true);
    selection.toggle(roll.clone(), true);
    selection.toggle(grade.clone(), true);

    let line = join_exported(selection.iter().map(|c| texts[c]));
    assert_eq!(line, "Asha Verma\t2203456\tA+");

    let fields: Vec<&str> = line.split('\t').collect();
    assert_eq!(fields.len(), selection.len(), "one field per selected cell");
}
