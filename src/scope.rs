// ABOUTME: Runtime scope chain for variable bindings

use crate::error::CoizError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One link of the scope chain. Created on entry to a block, call frame,
/// loop header, or import; torn down on exit. Resolution walks toward the
/// root.
#[derive(Debug)]
pub struct Scope {
    name: String,
    level: usize,
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Scope>>,
}

impl Scope {
    /// The root scope, named for diagnostics.
    pub fn global() -> Rc<Self> {
        Rc::new(Scope {
            name: "global".to_string(),
            level: 1,
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// A child scope one level below its parent.
    pub fn child(parent: &Rc<Scope>, name: &str) -> Rc<Self> {
        Rc::new(Scope {
            name: name.to_string(),
            level: parent.level + 1,
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent.clone()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn parent(&self) -> Option<Rc<Scope>> {
        self.parent.clone()
    }

    /// Bind a name in THIS scope, shadowing any enclosing binding.
    pub fn insert(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Look a name up here and then in enclosing scopes.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        if let Some(ref parent) = self.parent {
            return parent.lookup(name);
        }
        None
    }

    /// Overwrite an existing binding in the scope that owns it.
    pub fn update(&self, name: &str, value: Value) -> Result<(), CoizError> {
        if self.bindings.borrow().contains_key(name) {
            self.bindings.borrow_mut().insert(name.to_string(), value);
            return Ok(());
        }
        if let Some(ref parent) = self.parent {
            return parent.update(name, value);
        }
        Err(CoizError::UndefinedName(name.to_string()))
    }

    /// Copy every binding of `other` into this scope. Used to pull an
    /// imported module's globals into the importer.
    pub fn absorb(&self, other: &Scope) {
        let mut ours = self.bindings.borrow_mut();
        for (name, value) in other.bindings.borrow().iter() {
            ours.insert(name.clone(), value.clone());
        }
    }

    /// Snapshot of this scope's own bindings, without the chain.
    pub fn bindings(&self) -> Vec<(String, Value)> {
        self.bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
