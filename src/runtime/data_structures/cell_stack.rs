use std::fmt::{self, Display, Formatter};
use crate::runtime::{
    data_structures::cell::Cell,
    error::{self, ErrorKind},
};

/// The data stack.  Cells are pushed and popped at the top only.  There is no capacity limit.
#[derive(Clone, Default)]
pub struct CellStack {
    cells: Vec<Cell>,

    /// The deepest the stack has been so far.
    max_depth: usize,
}

/// Cells from the bottom of the stack to the top, separated by single spaces.  This is the format
/// `.s` prints.
impl Display for CellStack {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{}", cell)?;
        }

        Ok(())
    }
}

impl CellStack {
    pub fn new() -> CellStack {
        CellStack {
            cells: Vec::with_capacity(20),
            max_depth: 0,
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);

        if self.cells.len() > self.max_depth {
            self.max_depth = self.cells.len();
        }
    }

    /// Remove and return the top cell.  An empty stack is left untouched and reported as an
    /// underflow.
    pub fn pop(&mut self) -> error::Result<Cell> {
        match self.cells.pop() {
            Some(cell) => Ok(cell),
            None => Err(ErrorKind::StackUnderflow.into()),
        }
    }

    /// The top cell, without removing it.
    pub fn peek(&self) -> error::Result<&Cell> {
        match self.cells.last() {
            Some(cell) => Ok(cell),
            None => Err(ErrorKind::StackUnderflow.into()),
        }
    }

    /// Drop every cell.  The depth watermark is kept.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Iterate from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}
