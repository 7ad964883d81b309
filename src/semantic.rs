// ABOUTME: Pre-execution semantic pass: scoped symbol tables and name checks

use crate::ast::{FuncDef, Node};
use crate::config::SOURCE_EXTENSION;
use crate::error::CoizError;
use crate::eval::Interpreter;
use crate::value::Value;
use std::collections::HashMap;
use std::fs;
use std::rc::Rc;

/// Static shape of a variable's initializer, recorded so indexing can be
/// checked before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarTag {
    Array,
    Str,
}

/// A variable symbol: its name plus the optional shape tag.
#[derive(Debug, Clone)]
pub struct VarSymbol {
    pub name: String,
    pub tag: Option<VarTag>,
}

/// A function symbol: its name plus the ordered parameter names.
#[derive(Debug, Clone)]
pub struct FuncSymbol {
    pub name: String,
    pub params: Vec<String>,
}

/// A scope of variable symbols, chained like the runtime scopes so the two
/// passes agree on visibility.
#[derive(Debug)]
struct SymbolTable {
    /// Kept for scope-dump debugging.
    #[allow(dead_code)]
    name: String,
    level: usize,
    symbols: HashMap<String, VarSymbol>,
    enclosing: Option<Box<SymbolTable>>,
}

impl SymbolTable {
    fn new(name: &str, level: usize) -> Self {
        SymbolTable {
            name: name.to_string(),
            level,
            symbols: HashMap::new(),
            enclosing: None,
        }
    }

    fn insert(&mut self, symbol: VarSymbol) {
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    /// Chained lookup toward the root.
    fn lookup(&self, name: &str) -> Option<&VarSymbol> {
        if let Some(symbol) = self.symbols.get(name) {
            return Some(symbol);
        }
        self.enclosing.as_ref().and_then(|e| e.lookup(name))
    }

    /// Current-scope-only lookup, used by the duplicate-declaration check.
    fn lookup_local(&self, name: &str) -> Option<&VarSymbol> {
        self.symbols.get(name)
    }
}

/// One recursive pass over the tree. Verifies name resolution, call arity,
/// indexability of array targets, and duplicate declarations, and loads
/// imported modules so their bindings are known before execution.
///
/// Functions live in a dedicated root table; variables live in the scope
/// chain. The pass walks function bodies at their declaration, so a name
/// used inside a body must already resolve there: declare callees before
/// callers, and declare any free variable a function relies on before the
/// function itself.
pub struct SemanticAnalyzer {
    funcs: HashMap<String, FuncSymbol>,
    scope: SymbolTable,
    imports: Vec<Interpreter>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        SemanticAnalyzer {
            funcs: HashMap::new(),
            scope: SymbolTable::new("global", 1),
            imports: Vec::new(),
        }
    }

    /// Interpreters for every module imported during the pass, in import
    /// order. The evaluator merges their globals before the root runs.
    pub fn into_imports(self) -> Vec<Interpreter> {
        self.imports
    }

    pub fn analyze(&mut self, node: &Node) -> Result<(), CoizError> {
        match node {
            Node::Number(_) | Node::Str(_) | Node::Code(_) | Node::NoOp => Ok(()),

            Node::Array(elements) => {
                for element in elements {
                    self.analyze(element)?;
                }
                Ok(())
            }

            Node::Variable { name, index } => {
                let symbol = self
                    .scope
                    .lookup(name)
                    .ok_or_else(|| CoizError::UndefinedName(name.clone()))?;
                if index.is_some() && symbol.tag != Some(VarTag::Array) {
                    return Err(CoizError::NotIndexable(name.clone()));
                }
                if let Some(index) = index {
                    self.analyze(index)?;
                }
                Ok(())
            }

            Node::Unary { operand, .. } => self.analyze(operand),
            Node::Len(operand) => self.analyze(operand),

            Node::Binary { left, right, .. } | Node::Logical { left, right, .. } => {
                self.analyze(left)?;
                self.analyze(right)
            }

            Node::Call { name, args } => {
                let symbol = self
                    .funcs
                    .get(name)
                    .ok_or_else(|| CoizError::UndefinedName(name.clone()))?;
                if args.len() != symbol.params.len() {
                    return Err(CoizError::arity(name, symbol.params.len(), args.len()));
                }
                for arg in args {
                    self.analyze(arg)?;
                }
                Ok(())
            }

            Node::VarDecl { name, init } => {
                // The initializer is checked first, so `var x = x` only
                // resolves against an enclosing binding.
                self.analyze(init)?;
                if self.scope.lookup_local(name).is_some() {
                    return Err(CoizError::DuplicateName(name.clone()));
                }
                let tag = match init.as_ref() {
                    Node::Array(_) => Some(VarTag::Array),
                    Node::Str(_) => Some(VarTag::Str),
                    _ => None,
                };
                self.scope.insert(VarSymbol {
                    name: name.clone(),
                    tag,
                });
                Ok(())
            }

            Node::Assign {
                name,
                index,
                value,
                ..
            } => {
                let symbol = self
                    .scope
                    .lookup(name)
                    .ok_or_else(|| CoizError::UndefinedName(name.clone()))?;
                if index.is_some() && symbol.tag != Some(VarTag::Array) {
                    return Err(CoizError::NotIndexable(name.clone()));
                }
                if let Some(index) = index {
                    self.analyze(index)?;
                }
                self.analyze(value)
            }

            Node::Block(stmts) => {
                self.push("block");
                let result = self.analyze_all(stmts);
                self.pop();
                result
            }

            Node::Compound(stmts) => self.analyze_all(stmts),

            Node::If {
                cond,
                then_block,
                else_branch,
            } => {
                self.analyze(cond)?;
                self.analyze(then_block)?;
                if let Some(else_branch) = else_branch {
                    self.analyze(else_branch)?;
                }
                Ok(())
            }

            Node::While { cond, body } => {
                self.analyze(cond)?;
                self.analyze(body)
            }

            Node::For {
                init,
                cond,
                step,
                body,
            } => {
                // The loop header introduces its own scope, matching the
                // evaluator, so the induction variable dies with the loop.
                self.push("for");
                let result = self
                    .analyze(init)
                    .and_then(|_| self.analyze(cond))
                    .and_then(|_| self.analyze(step))
                    .and_then(|_| self.analyze(body));
                self.pop();
                result
            }

            Node::FuncDecl(def) => self.declare_func(def),

            Node::Return(expr) => self.analyze(expr),

            Node::Print(args) => self.analyze_all(args),

            Node::Assert { cond, print_stmt } => {
                self.analyze(cond)?;
                self.analyze(print_stmt)
            }

            Node::Import { file } => self.load_import(file),
        }
    }

    fn analyze_all(&mut self, nodes: &[Node]) -> Result<(), CoizError> {
        for node in nodes {
            self.analyze(node)?;
        }
        Ok(())
    }

    fn declare_func(&mut self, def: &Rc<FuncDef>) -> Result<(), CoizError> {
        // Registered before the body is walked so self-recursion resolves.
        self.funcs.insert(
            def.name.clone(),
            FuncSymbol {
                name: def.name.clone(),
                params: def.params.clone(),
            },
        );

        self.push(&def.name);
        for param in &def.params {
            self.scope.insert(VarSymbol {
                name: param.clone(),
                tag: None,
            });
        }
        let result = self.analyze(&def.body);
        self.pop();
        result
    }

    /// Resolve `file` against the import extension, run it through a fresh
    /// interpreter, and register its final global bindings: functions at the
    /// root, everything else as variables in the current scope. The executed
    /// interpreter is retained so the evaluator can absorb its bindings.
    fn load_import(&mut self, file: &str) -> Result<(), CoizError> {
        let path = format!("{}{}", file, SOURCE_EXTENSION);
        let source = fs::read_to_string(&path).map_err(|e| CoizError::ImportFailed {
            file: path.clone(),
            reason: e.to_string(),
        })?;

        let module = crate::run(&source, file).map_err(|e| CoizError::ImportFailed {
            file: path.clone(),
            reason: e.to_string(),
        })?;

        for (name, value) in module.global_scope().bindings() {
            match value {
                Value::Func(def) => {
                    self.funcs.insert(
                        name.clone(),
                        FuncSymbol {
                            name,
                            params: def.params.clone(),
                        },
                    );
                }
                other => {
                    let tag = match other {
                        Value::Array(_) => Some(VarTag::Array),
                        Value::Str(_) => Some(VarTag::Str),
                        _ => None,
                    };
                    self.scope.insert(VarSymbol { name, tag });
                }
            }
        }

        self.imports.push(module);
        Ok(())
    }

    fn push(&mut self, name: &str) {
        let level = self.scope.level + 1;
        let enclosing = std::mem::replace(&mut self.scope, SymbolTable::new(name, level));
        self.scope.enclosing = Some(Box::new(enclosing));
    }

    fn pop(&mut self) {
        if let Some(enclosing) = self.scope.enclosing.take() {
            self.scope = *enclosing;
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
