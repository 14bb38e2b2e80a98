//! The spreadsheet engine
//!
//! Ties the grid, the formula parser, and the dependency graph together.
//! Every text edit runs the same pipeline: retract the edges of the old
//! formula, validate and commit the new one, evaluate, then recalculate
//! every transitive dependent so no cell is ever left with a stale value.
//!
//! Edges in the dependency graph point from a referenced cell to the cells
//! whose formulas mention it. An edge into a cell exists exactly when the
//! parsed-formula cache holds an entry for that cell; retraction therefore
//! reads the variable set from the cache instead of re-parsing old text.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};
use mesa_sheets_core::{Cell, CellAddress, CellError, CellValue, Sheet};
use mesa_sheets_formula::{DependencyGraph, ExpressionTree, FormulaError};

use crate::error::{Error, Result};
use crate::event::CellChange;

/// Map a formula pipeline failure to the sentinel shown in the cell
fn sentinel_for(err: &FormulaError) -> CellError {
    match err {
        FormulaError::Syntax(_) => CellError::Syntax,
        FormulaError::UnknownOperator(_) => CellError::UnknownOperator,
        FormulaError::MismatchedParens => CellError::MismatchedParens,
        FormulaError::DivisionByZero => CellError::Div0,
        FormulaError::VariableNotFound(_) => CellError::BadReference,
    }
}

/// A grid of cells with formula evaluation and automatic recalculation
pub struct Spreadsheet {
    sheet: Sheet,
    graph: DependencyGraph,
    parsed: AHashMap<String, ExpressionTree>,
    events: VecDeque<CellChange>,
}

impl Spreadsheet {
    /// Create a spreadsheet with the given grid dimensions
    pub fn new(rows: u32, cols: u16) -> Result<Self> {
        Ok(Self {
            sheet: Sheet::new(rows, cols)?,
            graph: DependencyGraph::new(),
            parsed: AHashMap::new(),
            events: VecDeque::new(),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.sheet.rows()
    }

    /// Number of columns
    pub fn cols(&self) -> u16 {
        self.sheet.cols()
    }

    /// The underlying grid
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Get a cell by coordinates
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.sheet.cell(row, col)
    }

    /// Get a cell by name, e.g. "B12"
    pub fn cell_by_name(&self, name: &str) -> Option<&Cell> {
        self.sheet.cell_by_name(name)
    }

    /// A cell's raw text, e.g. "=A1+5"
    pub fn cell_text(&self, name: &str) -> Option<&str> {
        self.sheet.cell_by_name(name).map(|c| c.text())
    }

    /// A cell's computed value, by coordinates
    pub fn cell_value(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.sheet.cell(row, col).map(|c| c.value())
    }

    /// A cell's computed value, by name
    pub fn cell_value_by_name(&self, name: &str) -> Option<&CellValue> {
        self.sheet.cell_by_name(name).map(|c| c.value())
    }

    /// Iterate over cells with non-default text or value
    pub fn changed_cells(&self) -> impl Iterator<Item = &Cell> {
        self.sheet.changed_cells()
    }

    /// Drain the queued change notifications, oldest first
    pub fn drain_changes(&mut self) -> Vec<CellChange> {
        self.events.drain(..).collect()
    }

    /// Reset every cell, all dependency edges, and the notification queue
    pub fn clear(&mut self) {
        self.sheet.clear();
        self.graph = DependencyGraph::new();
        self.parsed.clear();
        self.events.clear();
    }

    /// Set a cell's text by coordinates; see [`Spreadsheet::set_text`]
    pub fn set_cell_text(&mut self, row: u32, col: u16, text: &str) -> Result<()> {
        let name = self
            .sheet
            .cell(row, col)
            .ok_or_else(|| Error::UnknownCell(CellAddress::new(row, col).name()))?
            .name()
            .to_string();
        self.set_text(&name, text)
    }

    /// Set a cell's text and recalculate everything downstream of it
    ///
    /// A no-op when the text is unchanged. Formula failures (bad syntax,
    /// self/bad/circular references, division by zero) do not error; they
    /// leave a sentinel in the cell's value.
    pub fn set_text(&mut self, name: &str, text: &str) -> Result<()> {
        let change = self
            .sheet
            .cell_by_name_mut(name)
            .ok_or_else(|| Error::UnknownCell(name.to_string()))?
            .set_text(text);

        let Some(change) = change else {
            return Ok(());
        };
        log::debug!("cell {}: {:?} -> {:?}", name, change.old, change.new);

        // retract the edges installed for the replaced formula
        if let Some(old_tree) = self.parsed.remove(name) {
            for var in old_tree.variables() {
                self.graph.remove_edge(var, name);
            }
        }

        let value = self.compute(name, &change.new);
        let rejected = value.is_error();
        self.store(name, value, rejected);
        self.cascade(name);
        Ok(())
    }

    /// Compute the value for fresh cell text
    fn compute(&mut self, name: &str, text: &str) -> CellValue {
        if let Some(body) = text.strip_prefix('=') {
            self.compute_formula(name, body)
        } else if text.is_empty() {
            CellValue::Empty
        } else {
            match text.trim().parse::<f64>() {
                // "inf" and "NaN" parse, but non-finite values are not
                // numbers here; they would leak past the saturation rule
                Ok(n) if n.is_finite() => CellValue::Number(n),
                _ => CellValue::text(text),
            }
        }
    }

    /// Run the formula pipeline: parse, validate references, commit, evaluate
    fn compute_formula(&mut self, name: &str, body: &str) -> CellValue {
        let tree = match ExpressionTree::new(body) {
            Ok(tree) => tree,
            Err(e) => {
                log::warn!("cell {}: formula rejected: {}", name, e);
                return sentinel_for(&e).into();
            }
        };

        let vars: Vec<String> = tree.variables().into_iter().map(str::to_string).collect();

        if vars.iter().any(|v| v == name) {
            log::warn!("cell {}: formula references itself", name);
            return CellError::SelfReference.into();
        }
        if let Some(bad) = vars.iter().find(|v| !self.sheet.contains_name(v)) {
            log::warn!("cell {}: reference to '{}' outside the grid", name, bad);
            return CellError::BadReference.into();
        }

        // install edges tentatively; roll back if they close a cycle
        for var in &vars {
            self.graph.add_edge(var, name);
        }
        if self.graph.is_reachable(name, name) {
            for var in &vars {
                self.graph.remove_edge(var, name);
            }
            log::warn!("cell {}: formula closes a dependency cycle", name);
            return CellError::CircularReference.into();
        }

        self.parsed.insert(name.to_string(), tree);
        self.evaluate_cached(name)
    }

    /// Evaluate a committed formula against the grid's current values
    ///
    /// References to empty cells bind to 0.0. A reference to a text or
    /// error cell skips evaluation and propagates that value verbatim.
    fn evaluate_cached(&mut self, name: &str) -> CellValue {
        let vars: Vec<String> = self
            .parsed
            .get(name)
            .expect("evaluated cell has a cached tree")
            .variables()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut bindings = Vec::with_capacity(vars.len());
        for var in &vars {
            let cell = self
                .sheet
                .cell_by_name(var)
                .expect("references validated at commit time");
            match cell.value() {
                CellValue::Number(n) => bindings.push(*n),
                CellValue::Empty => bindings.push(0.0),
                other => return other.clone(),
            }
        }

        let tree = self.parsed.get_mut(name).expect("cached tree checked above");
        for (var, value) in vars.iter().zip(bindings) {
            tree.set_variable(var, value)
                .expect("variable names come from this tree");
        }
        match tree.evaluate() {
            Ok(n) => CellValue::Number(n),
            Err(e) => sentinel_for(&e).into(),
        }
    }

    /// Write a computed value, queueing a notification if it changed
    ///
    /// `force_notify` queues one even when the value is unchanged; edits
    /// that produce a sentinel use it so every rejection is observable,
    /// including one that repeats the previous sentinel.
    fn store(&mut self, name: &str, value: CellValue, force_notify: bool) {
        let is_error = value.is_error();
        let cell = self
            .sheet
            .cell_by_name_mut(name)
            .expect("stored cell exists in the grid");
        let changed = cell.set_value(value);
        if changed || force_notify {
            self.events.push_back(CellChange::new(name, is_error));
        }
    }

    /// Re-evaluate every transitive dependent of the given cell
    ///
    /// Dependents are processed in topological order over the affected
    /// subgraph (Kahn's indegree counting, with each cell's precedents read
    /// from its cached tree's variable set). A diamond-shaped fan-in is
    /// therefore evaluated exactly once, after every one of its refreshed
    /// precedents. The committed graph is acyclic, so the queue drains.
    fn cascade(&mut self, origin: &str) {
        let mut affected = AHashSet::new();
        let mut stack: Vec<String> = self.graph.dependents(origin).map(str::to_string).collect();
        while let Some(name) = stack.pop() {
            if affected.insert(name.clone()) {
                stack.extend(self.graph.dependents(&name).map(str::to_string));
            }
        }
        if affected.is_empty() {
            return;
        }

        // count only precedents that are themselves being recomputed; the
        // origin and cells outside the cascade already hold fresh values
        let mut indegree: AHashMap<String, usize> = AHashMap::new();
        for name in &affected {
            let upstream = self
                .parsed
                .get(name)
                .expect("dependent has a cached tree")
                .variables()
                .into_iter()
                .filter(|v| affected.contains(*v))
                .count();
            indegree.insert(name.clone(), upstream);
        }

        let mut ready: Vec<String> = indegree
            .iter()
            .filter(|(_, upstream)| **upstream == 0)
            .map(|(name, _)| name.clone())
            .collect();

        while let Some(name) = ready.pop() {
            let value = self.evaluate_cached(&name);
            self.store(&name, value, false);
            for dep in self.graph.dependents(&name) {
                if let Some(upstream) = indegree.get_mut(dep) {
                    *upstream -= 1;
                    if *upstream == 0 {
                        ready.push(dep.to_string());
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
