//! Tests for reference validation: self, bad, and circular references

use mesa_sheets::prelude::*;

fn number(s: &Spreadsheet, name: &str) -> f64 {
    s.cell_value_by_name(name)
        .and_then(CellValue::as_number)
        .unwrap_or_else(|| panic!("{name} is not a number: {:?}", s.cell_value_by_name(name)))
}

fn sentinel(s: &Spreadsheet, name: &str) -> CellError {
    match s.cell_value_by_name(name) {
        Some(CellValue::Error(e)) => *e,
        other => panic!("{name} is not an error: {other:?}"),
    }
}

/// Test that a formula referencing its own cell is rejected
#[test]
fn test_self_reference_rejected() {
    let mut s = Spreadsheet::new(50, 26).unwrap();
    s.set_text("A1", "=A1").unwrap();
    assert_eq!(sentinel(&s, "A1"), CellError::SelfReference);

    // also when buried in a larger expression
    s.set_text("B2", "=1+(B2*3)").unwrap();
    assert_eq!(sentinel(&s, "B2"), CellError::SelfReference);
}

/// Test recovery after a self-reference
#[test]
fn test_self_reference_recovery() {
    let mut s = Spreadsheet::new(50, 26).unwrap();
    s.set_text("A1", "=A1").unwrap();
    s.set_text("A1", "=B1+1").unwrap();
    assert_eq!(number(&s, "A1"), 1.0);

    s.set_text("B1", "9").unwrap();
    assert_eq!(number(&s, "A1"), 10.0);
}

/// Test that references outside the grid are rejected
#[test]
fn test_bad_reference_rejected() {
    let mut s = Spreadsheet::new(50, 26).unwrap();

    // row past the last
    s.set_text("A1", "=A51").unwrap();
    assert_eq!(sentinel(&s, "A1"), CellError::BadReference);

    // not a cell name at all
    s.set_text("A2", "=total+1").unwrap();
    assert_eq!(sentinel(&s, "A2"), CellError::BadReference);

    // a rejected formula installs no edges, so edits to the other
    // referenced cells must not touch this one
    s.set_text("A3", "=B1+B99").unwrap();
    assert_eq!(sentinel(&s, "A3"), CellError::BadReference);
    s.set_text("B1", "5").unwrap();
    assert_eq!(sentinel(&s, "A3"), CellError::BadReference);
}

/// Test that a two-cell cycle is rejected at the closing edit
#[test]
fn test_direct_cycle_rejected() {
    let mut s = Spreadsheet::new(50, 26).unwrap();
    s.set_text("A1", "=B1").unwrap();
    s.set_text("B1", "=A1").unwrap();

    assert_eq!(sentinel(&s, "B1"), CellError::CircularReference);
    // A1's committed formula now reads B1's error and propagates it
    assert_eq!(sentinel(&s, "A1"), CellError::CircularReference);

    // the rejected edit committed nothing: giving B1 a number heals both
    s.set_text("B1", "2").unwrap();
    assert_eq!(number(&s, "A1"), 2.0);
    assert_eq!(number(&s, "B1"), 2.0);
}

/// Test that a longer cycle is rejected wherever it closes
#[test]
fn test_chain_cycle_rejected() {
    let mut s = Spreadsheet::new(50, 26).unwrap();
    s.set_text("A1", "=B1").unwrap();
    s.set_text("B1", "=C1").unwrap();
    s.set_text("C1", "=A1").unwrap();
    assert_eq!(sentinel(&s, "C1"), CellError::CircularReference);

    s.set_text("C1", "4").unwrap();
    assert_eq!(number(&s, "A1"), 4.0);
    assert_eq!(number(&s, "B1"), 4.0);
}

/// Test that rejected cycle edges are fully rolled back
#[test]
fn test_cycle_rollback_leaves_no_edges() {
    let mut s = Spreadsheet::new(50, 26).unwrap();
    s.set_text("A1", "=B1").unwrap();
    s.set_text("B1", "=A1").unwrap();

    // overwriting A1 walks its dependents; a leaked A1 -> B1 edge from the
    // rejected formula would blow up here
    s.set_text("A1", "7").unwrap();
    assert_eq!(number(&s, "A1"), 7.0);
    assert_eq!(sentinel(&s, "B1"), CellError::CircularReference);
}

/// Test that a diamond dependency is not mistaken for a cycle
#[test]
fn test_diamond_is_not_a_cycle() {
    let mut s = Spreadsheet::new(50, 26).unwrap();
    s.set_text("A1", "1").unwrap();
    s.set_text("B1", "=A1+1").unwrap();
    s.set_text("B2", "=A1*2").unwrap();
    s.set_text("C1", "=B1+B2").unwrap();
    assert_eq!(number(&s, "C1"), 4.0);

    s.set_text("A1", "10").unwrap();
    assert_eq!(number(&s, "C1"), 31.0);
}
