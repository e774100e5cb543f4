#![allow(dead_code)] // Complete API module, not all methods currently used
//! Pushdown stack shared by the PDA and NPDA
//!
//! This module provides the stack value type used by both pushdown machines:
//! - [`Stack`]: a LIFO sequence of [`Symbol`]s
//!
//! # Underflow
//!
//! [`Stack::pop`] and [`Stack::peek`] return `Option<Symbol>` rather than a
//! bottom-marker sentinel: `None` means the stack is empty. Transition rules
//! treat `None` as an ordinary (usually rejecting) case, so underflow is
//! never fatal. The `'$'` bottom marker of the classical presentation
//! survives only in the [`fmt::Display`] rendering used by traces.
//!
//! # Cloning
//!
//! `Stack` is `Clone`, and a clone is fully independent of its source. The
//! NPDA clones the stack at every branch point, which is what keeps sibling
//! branches from observing each other's mutations. Depth is bounded by the
//! input length, so the copy cost stays proportional to the input.

use super::symbol::Symbol;
use std::fmt;

/// A LIFO stack of input symbols
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    items: Vec<Symbol>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Push a symbol onto the top of the stack
    pub fn push(&mut self, symbol: Symbol) {
        self.items.push(symbol);
    }

    /// Remove and return the top symbol, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<Symbol> {
        self.items.pop()
    }

    /// Return the top symbol without removing it, or `None` if empty
    pub fn peek(&self) -> Option<Symbol> {
        self.items.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of symbols currently on the stack
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// The symbols from bottom to top (for display)
    pub fn symbols(&self) -> &[Symbol] {
        &self.items
    }
}

impl fmt::Display for Stack {
    /// Renders bottom-to-top with the conventional `$` bottom marker,
    /// e.g. `$011` for a stack whose top is `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for symbol in &self.items {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_peek_discipline() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);

        stack.push(Symbol::Zero);
        stack.push(Symbol::One);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.peek(), Some(Symbol::One));
        assert_eq!(stack.pop(), Some(Symbol::One));
        assert_eq!(stack.pop(), Some(Symbol::Zero));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Stack::new();
        original.push(Symbol::One);

        let mut branch = original.clone();
        branch.push(Symbol::Zero);
        branch.pop();
        branch.pop();

        // Mutating the clone never shows through on the source.
        assert_eq!(original.depth(), 1);
        assert_eq!(original.peek(), Some(Symbol::One));
        assert!(branch.is_empty());
    }

    #[test]
    fn display_uses_bottom_marker() {
        let mut stack = Stack::new();
        assert_eq!(stack.to_string(), "$");
        stack.push(Symbol::Zero);
        stack.push(Symbol::One);
        stack.push(Symbol::One);
        assert_eq!(stack.to_string(), "$011");
    }
}
