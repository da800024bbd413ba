//! Scope chain and symbol table

use crate::ast::Variable;
use crate::common::{AnalysisError, AnalysisResult, Span};
use std::collections::HashMap;

/// A lexical scope. The root scope belongs to the program; every `while`,
/// `for` and `if` body gets a child scope for the duration of its analysis.
///
/// A name may only be declared if it is not visible anywhere in the chain,
/// so inner scopes can never shadow outer declarations.
#[derive(Debug, Default)]
pub struct Scope {
    locals: HashMap<String, Variable>,
    parent: Option<Box<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is `name` declared here or in any enclosing scope?
    pub fn sees(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Look up a variable, searching outward through enclosing scopes
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        if let Some(var) = self.locals.get(name) {
            Some(var)
        } else if let Some(parent) = &self.parent {
            parent.lookup(name)
        } else {
            None
        }
    }

    /// Bind a variable in the current scope
    pub fn declare(&mut self, variable: Variable, span: Span) -> AnalysisResult<()> {
        if self.sees(&variable.name) {
            return Err(AnalysisError::duplicate_declaration(variable.name, span));
        }
        self.locals.insert(variable.name.clone(), variable);
        Ok(())
    }

    /// Resolve a name, failing if no enclosing scope declares it
    pub fn resolve(&self, name: &str, span: Span) -> AnalysisResult<&Variable> {
        self.lookup(name)
            .ok_or_else(|| AnalysisError::undeclared_identifier(name, span))
    }

    /// Push a new, empty child scope
    pub fn push_child(&mut self) {
        let old_scope = std::mem::take(self);
        self.parent = Some(Box::new(old_scope));
    }

    /// Discard the current scope and return to its parent
    pub fn pop_to_parent(&mut self) -> bool {
        if let Some(parent) = self.parent.take() {
            *self = *parent;
            true
        } else {
            false
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of enclosing scopes
    pub fn depth(&self) -> usize {
        self.parent.as_ref().map_or(0, |parent| parent.depth() + 1)
    }
}
