// ABOUTME: Tree-walking evaluator executing the syntax tree against a scope chain

use crate::ast::{AssignOp, LogicalOp, Node, UnaryOp};
use crate::error::CoizError;
use crate::scope::Scope;
use crate::value::Value;
use std::rc::Rc;

/// How a statement finished: fell through, or hit a `return`.
///
/// The return unwind carries the UNEVALUATED expression. Scopes opened
/// between the call frame and the return site are left in place while the
/// unwind travels, so the call frame evaluates the expression with the
/// return site's full chain visible, then restores the caller's scope
/// wholesale.
enum Control {
    Normal,
    Return(Rc<Node>),
}

/// Executes a program tree against a chain of runtime scopes.
///
/// A call frame's parent is the caller's current scope, not the scope where
/// the function was declared, so free names inside a function resolve
/// dynamically. A lexical variant would store the defining scope alongside
/// the function value.
#[derive(Debug)]
pub struct Interpreter {
    scope: Rc<Scope>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            scope: Scope::global(),
        }
    }

    /// The current scope. After `execute` returns this is the global scope
    /// again, which is what import merging reads.
    pub fn global_scope(&self) -> Rc<Scope> {
        self.scope.clone()
    }

    /// Execute a root compound node. A `return` reaching the top level is an
    /// error since there is no call frame to unwind to.
    pub fn execute(&mut self, tree: &Node) -> Result<(), CoizError> {
        match self.exec(tree)? {
            Control::Normal => Ok(()),
            Control::Return(_) => Err(CoizError::ReturnOutsideFunction),
        }
    }

    // ===== Statements =====

    fn exec(&mut self, node: &Node) -> Result<Control, CoizError> {
        match node {
            Node::Compound(stmts) => self.exec_all(stmts),

            Node::Block(stmts) => {
                self.push_scope("block");
                let flow = self.exec_all(stmts);
                self.pop_scope_if_normal(&flow);
                flow
            }

            Node::VarDecl { name, init } => {
                let value = self.eval(init)?;
                self.scope.insert(name.clone(), value);
                Ok(Control::Normal)
            }

            Node::Assign {
                name,
                op,
                index,
                value,
            } => {
                self.exec_assign(name, *op, index.as_deref(), value)?;
                Ok(Control::Normal)
            }

            Node::If {
                cond,
                then_block,
                else_branch,
            } => {
                if self.eval(cond)?.is_truthy() {
                    self.push_scope("if");
                    let flow = self.exec(then_block);
                    self.pop_scope_if_normal(&flow);
                    flow
                } else if let Some(else_branch) = else_branch {
                    match else_branch.as_ref() {
                        // else-if chains reuse the nested if's own scopes.
                        nested @ Node::If { .. } => self.exec(nested),
                        block => {
                            self.push_scope("else");
                            let flow = self.exec(block);
                            self.pop_scope_if_normal(&flow);
                            flow
                        }
                    }
                } else {
                    Ok(Control::Normal)
                }
            }

            Node::While { cond, body } => {
                self.push_scope("while");
                let flow = self.exec_while(cond, body);
                self.pop_scope_if_normal(&flow);
                flow
            }

            Node::For {
                init,
                cond,
                step,
                body,
            } => {
                self.push_scope("for");
                let flow = self.exec_for(init, cond, step, body);
                self.pop_scope_if_normal(&flow);
                flow
            }

            Node::FuncDecl(def) => {
                self.scope
                    .insert(def.name.clone(), Value::Func(def.clone()));
                Ok(Control::Normal)
            }

            Node::Return(expr) => Ok(Control::Return(expr.clone())),

            Node::Print(args) => {
                let line = self.render_print(args)?;
                println!("{}", line);
                Ok(Control::Normal)
            }

            Node::Assert { cond, print_stmt } => {
                // A failed assertion prints its message and execution
                // continues.
                if !self.eval(cond)?.is_truthy() {
                    self.exec(print_stmt)?;
                }
                Ok(Control::Normal)
            }

            // The semantic pass already loaded the module and its bindings
            // were merged into the global scope before execution started.
            Node::Import { .. } => Ok(Control::Normal),

            Node::NoOp => Ok(Control::Normal),

            // Expression in statement position (a bare call); its value is
            // discarded.
            other => {
                self.eval(other)?;
                Ok(Control::Normal)
            }
        }
    }

    fn exec_all(&mut self, stmts: &[Node]) -> Result<Control, CoizError> {
        for stmt in stmts {
            match self.exec(stmt)? {
                Control::Normal => {}
                flow @ Control::Return(_) => return Ok(flow),
            }
        }
        Ok(Control::Normal)
    }

    fn exec_while(&mut self, cond: &Node, body: &Node) -> Result<Control, CoizError> {
        while self.eval(cond)?.is_truthy() {
            match self.exec(body)? {
                Control::Normal => {}
                flow @ Control::Return(_) => return Ok(flow),
            }
        }
        Ok(Control::Normal)
    }

    fn exec_for(
        &mut self,
        init: &Node,
        cond: &Node,
        step: &Node,
        body: &Node,
    ) -> Result<Control, CoizError> {
        match self.exec(init)? {
            Control::Normal => {}
            flow @ Control::Return(_) => return Ok(flow),
        }
        while self.eval(cond)?.is_truthy() {
            match self.exec(body)? {
                Control::Normal => {}
                flow @ Control::Return(_) => return Ok(flow),
            }
            match self.exec(step)? {
                Control::Normal => {}
                flow @ Control::Return(_) => return Ok(flow),
            }
        }
        Ok(Control::Normal)
    }

    fn exec_assign(
        &mut self,
        name: &str,
        op: AssignOp,
        index: Option<&Node>,
        value: &Node,
    ) -> Result<(), CoizError> {
        let rhs = self.eval(value)?;

        match index {
            None => {
                let new_value = match op.binary() {
                    None => rhs,
                    Some(binary) => {
                        let current = self
                            .scope
                            .lookup(name)
                            .ok_or_else(|| CoizError::UndefinedName(name.to_string()))?;
                        Value::apply_binary(binary, &current, &rhs)?
                    }
                };
                self.scope.update(name, new_value)
            }
            Some(index) => {
                let index_value = self.eval(index)?;
                let current = self
                    .scope
                    .lookup(name)
                    .ok_or_else(|| CoizError::UndefinedName(name.to_string()))?;
                let Value::Array(mut items) = current else {
                    return Err(CoizError::NotIndexable(name.to_string()));
                };
                let i = resolve_index(&index_value, items.len())?;
                items[i] = match op.binary() {
                    None => rhs,
                    Some(binary) => Value::apply_binary(binary, &items[i], &rhs)?,
                };
                self.scope.update(name, Value::Array(items))
            }
        }
    }

    // ===== Expressions =====

    fn eval(&mut self, node: &Node) -> Result<Value, CoizError> {
        match node {
            Node::Number(value) => Ok(value.clone()),
            Node::Str(s) => Ok(Value::Str(s.clone())),

            // No host evaluator exists on this platform, so embedded code is
            // refused rather than emulated.
            Node::Code(_) => Err(CoizError::EmbeddedCodeUnsupported),

            Node::Array(elements) => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(self.eval(element)?);
                }
                Ok(Value::Array(items))
            }

            Node::Variable { name, index } => {
                let value = self
                    .scope
                    .lookup(name)
                    .ok_or_else(|| CoizError::UndefinedName(name.clone()))?;
                match index {
                    None => Ok(value),
                    Some(index) => {
                        let index_value = self.eval(index)?;
                        let Value::Array(items) = value else {
                            return Err(CoizError::NotIndexable(name.clone()));
                        };
                        let i = resolve_index(&index_value, items.len())?;
                        Ok(items[i].clone())
                    }
                }
            }

            Node::Unary { op, operand } => {
                let value = self.eval(operand)?;
                match (op, value) {
                    (UnaryOp::Plus, v @ Value::Int(_)) | (UnaryOp::Plus, v @ Value::Float(_)) => {
                        Ok(v)
                    }
                    (UnaryOp::Minus, Value::Int(n)) => Ok(match n.checked_neg() {
                        Some(negated) => Value::Int(negated),
                        None => Value::Float(-(n as f64)),
                    }),
                    (UnaryOp::Minus, Value::Float(n)) => Ok(Value::Float(-n)),
                    (_, v) => Err(CoizError::type_mismatch(
                        "unary sign",
                        "a number",
                        v.type_name(),
                    )),
                }
            }

            Node::Binary { op, left, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Value::apply_binary(*op, &lhs, &rhs)
            }

            Node::Logical { op, left, right } => match op {
                LogicalOp::And => {
                    let lhs = self.eval(left)?;
                    if !lhs.is_truthy() {
                        return Ok(lhs);
                    }
                    self.eval(right)
                }
                LogicalOp::Or => {
                    let lhs = self.eval(left)?;
                    if lhs.is_truthy() {
                        return Ok(lhs);
                    }
                    self.eval(right)
                }
                comparison => {
                    let lhs = self.eval(left)?;
                    let rhs = self.eval(right)?;
                    Value::compare(*comparison, &lhs, &rhs)
                }
            },

            Node::Call { name, args } => self.eval_call(name, args),

            Node::Len(operand) => {
                let value = self.eval(operand)?;
                match value {
                    Value::Str(s) => Ok(Value::Int(s.chars().count() as i64)),
                    Value::Array(items) => Ok(Value::Int(items.len() as i64)),
                    other => Err(CoizError::type_mismatch(
                        "len()",
                        "an array or string",
                        other.type_name(),
                    )),
                }
            }

            // Statement nodes never reach expression position; the parser
            // does not produce them there.
            _ => Err(CoizError::type_mismatch(
                "expression",
                "a value-producing node",
                "a statement",
            )),
        }
    }

    fn eval_call(&mut self, name: &str, args: &[Node]) -> Result<Value, CoizError> {
        let callee = self
            .scope
            .lookup(name)
            .ok_or_else(|| CoizError::UndefinedName(name.to_string()))?;
        let Value::Func(def) = callee else {
            return Err(CoizError::NotCallable(name.to_string()));
        };
        if args.len() != def.params.len() {
            return Err(CoizError::arity(name, def.params.len(), args.len()));
        }

        // Arguments are evaluated in the caller's scope, in order.
        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.eval(arg)?);
        }

        let caller = self.scope.clone();
        self.scope = Scope::child(&caller, &def.name);
        for (param, value) in def.params.iter().zip(arg_values) {
            self.scope.insert(param.clone(), value);
        }

        let result = match self.exec(&def.body) {
            // The returned expression is evaluated before the frame is torn
            // down, so parameters and locals at the return site still
            // resolve; caller names resolve too, through the frame's parent.
            Ok(Control::Return(expr)) => self.eval(&expr),
            Ok(Control::Normal) => Ok(Value::Nil),
            Err(e) => Err(e),
        };

        // The caller's scope comes back on every exit path, including errors.
        self.scope = caller;
        result
    }

    // ===== Printing =====

    /// Render print arguments to the output line. One argument prints as
    /// itself; more than one treats the first as a printf-style format with
    /// the rest as positional substitutions.
    fn render_print(&mut self, args: &[Node]) -> Result<String, CoizError> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg)?);
        }

        if values.len() == 1 {
            return Ok(values[0].to_string());
        }
        format_printf(&values[0], &values[1..])
    }

    fn push_scope(&mut self, name: &str) {
        self.scope = Scope::child(&self.scope, name);
    }

    fn pop_scope(&mut self) {
        if let Some(parent) = self.scope.parent() {
            self.scope = parent;
        }
    }

    /// A return unwind leaves intermediate scopes standing so the call frame
    /// can evaluate the returned expression against the return site's chain;
    /// only normal completion pops here.
    fn pop_scope_if_normal(&mut self, flow: &Result<Control, CoizError>) {
        if matches!(flow, Ok(Control::Normal)) {
            self.pop_scope();
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a numeric index to an integer and resolve it against `len`.
/// Negative indices count back from the end.
fn resolve_index(value: &Value, len: usize) -> Result<usize, CoizError> {
    let raw = match value {
        Value::Int(n) => *n,
        Value::Float(n) => *n as i64,
        other => {
            return Err(CoizError::type_mismatch(
                "index",
                "a number",
                other.type_name(),
            ))
        }
    };
    let adjusted = if raw < 0 { raw + len as i64 } else { raw };
    if adjusted < 0 || adjusted as usize >= len {
        return Err(CoizError::IndexOutOfRange { index: raw, len });
    }
    Ok(adjusted as usize)
}

/// printf-style substitution over `%s`, `%d`, `%f`, and `%%`.
fn format_printf(format: &Value, args: &[Value]) -> Result<String, CoizError> {
    let Value::Str(format) = format else {
        return Err(CoizError::type_mismatch(
            "print",
            "a format string",
            format.type_name(),
        ));
    };

    let mut out = String::new();
    let mut next_arg = 0;
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some(directive @ ('s' | 'd' | 'f')) => {
                let value = args.get(next_arg).ok_or_else(|| {
                    CoizError::Format(format!(
                        "not enough arguments for format string (needed more than {}).",
                        args.len()
                    ))
                })?;
                next_arg += 1;
                match directive {
                    's' => out.push_str(&value.to_string()),
                    'd' => match value {
                        Value::Int(n) => out.push_str(&n.to_string()),
                        Value::Float(n) => out.push_str(&(*n as i64).to_string()),
                        other => {
                            return Err(CoizError::Format(format!(
                                "%d expects a number, got {}.",
                                other.type_name()
                            )))
                        }
                    },
                    _ => match value {
                        Value::Int(n) => out.push_str(&format!("{:.6}", *n as f64)),
                        Value::Float(n) => out.push_str(&format!("{:.6}", n)),
                        other => {
                            return Err(CoizError::Format(format!(
                                "%f expects a number, got {}.",
                                other.type_name()
                            )))
                        }
                    },
                }
            }
            Some(other) => {
                return Err(CoizError::Format(format!(
                    "unsupported format directive '%{}'.",
                    other
                )))
            }
            None => return Err(CoizError::Format("dangling '%' in format string.".into())),
        }
    }

    if next_arg < args.len() {
        return Err(CoizError::Format(format!(
            "{} format argument{} left over.",
            args.len() - next_arg,
            if args.len() - next_arg == 1 { "" } else { "s" }
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::scanner::Scanner;
    use crate::semantic::SemanticAnalyzer;

    /// Run a source string through the full pipeline and return the
    /// interpreter with its final global scope.
    fn run(source: &str) -> Result<Interpreter, CoizError> {
        let mut scanner = Scanner::new(source, "test");
        let tokens = scanner.scan_tokens();
        assert!(!scanner.had_error(), "scan failed for {:?}", source);
        let tree = Parser::new(tokens, "test").parse()?;
        SemanticAnalyzer::new().analyze(&tree)?;
        let mut interp = Interpreter::new();
        interp.execute(&tree)?;
        Ok(interp)
    }

    fn global(interp: &Interpreter, name: &str) -> Value {
        interp
            .global_scope()
            .lookup(name)
            .unwrap_or_else(|| panic!("no global named {}", name))
    }

    #[test]
    fn test_arithmetic_precedence() {
        let interp = run("var x = 2 + 3 * 4;").unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(14)));
    }

    #[test]
    fn test_division_yields_float() {
        let interp = run("var x = 7 / 2; var y = 6 / 3;").unwrap();
        assert!(matches!(global(&interp, "x"), Value::Float(n) if n == 3.5));
        assert!(matches!(global(&interp, "y"), Value::Float(n) if n == 2.0));
    }

    #[test]
    fn test_remainder_keeps_host_sign() {
        let interp = run("var x = 7 % 3; var y = -7 % 3;").unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(1)));
        assert!(matches!(global(&interp, "y"), Value::Int(-1)));
    }

    #[test]
    fn test_compound_assignment_matches_read_op_write() {
        let interp = run("var a = 10; a += 5; var b = 10; b = b + 5;").unwrap();
        let a = global(&interp, "a");
        let b = global(&interp, "b");
        assert!(a.loose_eq(&b));
        assert!(matches!(a, Value::Int(15)));
    }

    #[test]
    fn test_indexed_compound_assignment() {
        let interp = run("var a = [10, 20, 30]; a[1] += 5;").unwrap();
        let Value::Array(items) = global(&interp, "a") else {
            panic!("expected array");
        };
        assert!(matches!(items[1], Value::Int(25)));
    }

    #[test]
    fn test_negative_index_counts_from_the_end() {
        let interp = run("var a = [10, 20, 30]; var last = a[-1]; a[-3] = 7;").unwrap();
        assert!(matches!(global(&interp, "last"), Value::Int(30)));
        let Value::Array(items) = global(&interp, "a") else {
            panic!("expected array");
        };
        assert!(matches!(items[0], Value::Int(7)));
    }

    #[test]
    fn test_index_out_of_range_is_a_hard_failure() {
        let err = run("var a = [1, 2]; var x = a[5];").unwrap_err();
        assert!(matches!(err, CoizError::IndexOutOfRange { index: 5, len: 2 }));
        let err = run("var a = [1, 2]; var x = a[-3];").unwrap_err();
        assert!(matches!(err, CoizError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_float_index_truncates() {
        let interp = run("var a = [10, 20, 30]; var x = a[1.9];").unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(20)));
    }

    #[test]
    fn test_function_call_returns_value() {
        let interp = run("func sq(n) { return n * n; }; var x = sq(7);").unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(49)));
    }

    #[test]
    fn test_function_without_return_yields_nil() {
        let interp = run("func noisy(n) { print(n); }; var x = noisy(1);").unwrap();
        assert!(matches!(global(&interp, "x"), Value::Nil));
    }

    #[test]
    fn test_return_unwinds_from_nested_blocks_and_loops() {
        let interp = run(
            "func find(limit) { \
               for (var k = 0; k < limit; k += 1) { \
                 if (k == 3) { { return k * 10; }; }; \
               }; \
               return -1; \
             }; \
             var x = find(10);",
        )
        .unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(30)));
    }

    #[test]
    fn test_recursion() {
        let interp = run(
            "func fact(n) { if (n <= 1) { return 1; }; return n * fact(n - 1); }; \
             var x = fact(5);",
        )
        .unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(120)));
    }

    #[test]
    fn test_return_expression_sees_locals_and_caller_names() {
        // The returned expression resolves callee locals at the return site
        // and caller names through the frame's parent link.
        let interp = run(
            "var x = 5; \
             func local_result() { var r = 7; return r; }; \
             func caller_name(ignored) { return x; }; \
             var a = local_result(); \
             var b = caller_name(0);",
        )
        .unwrap();
        assert!(matches!(global(&interp, "a"), Value::Int(7)));
        assert!(matches!(global(&interp, "b"), Value::Int(5)));
    }

    #[test]
    fn test_call_frames_see_caller_scope() {
        // Free names inside a function resolve against the caller's chain.
        let interp = run(
            "var base = 100; \
             func bump(n) { return base + n; }; \
             var x = bump(1);",
        )
        .unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(101)));
    }

    #[test]
    fn test_for_loop_accumulates() {
        let interp = run("var i = 0; for (var k = 0; k < 3; k += 1) { i += k; };").unwrap();
        assert!(matches!(global(&interp, "i"), Value::Int(3)));
    }

    #[test]
    fn test_while_loop_counts_down() {
        let interp = run("var n = 5; var steps = 0; while (n > 0) { n -= 1; steps += 1; };").unwrap();
        assert!(matches!(global(&interp, "n"), Value::Int(0)));
        assert!(matches!(global(&interp, "steps"), Value::Int(5)));
    }

    #[test]
    fn test_block_bindings_do_not_leak() {
        let interp = run("var x = 1; { var y = 2; x = 3; };").unwrap();
        assert!(matches!(global(&interp, "x"), Value::Int(3)));
        assert!(interp.global_scope().lookup("y").is_none());
    }

    #[test]
    fn test_if_else_picks_a_branch() {
        let interp = run("var r = 0; if (1 < 2) { r = 1; } else { r = 2; };").unwrap();
        assert!(matches!(global(&interp, "r"), Value::Int(1)));
        let interp = run("var r = 0; if (2 < 1) { r = 1; } else { r = 2; };").unwrap();
        assert!(matches!(global(&interp, "r"), Value::Int(2)));
    }

    #[test]
    fn test_else_if_chain() {
        let interp = run(
            "var r = 0; \
             if (1 == 2) { r = 1; } else if (2 == 2) { r = 2; } else { r = 3; };",
        )
        .unwrap();
        assert!(matches!(global(&interp, "r"), Value::Int(2)));
    }

    #[test]
    fn test_logical_operators_short_circuit() {
        // The right side never runs when the left decides: the division by
        // zero would otherwise fail the run.
        let interp = run("var r = 0; if (0 and 1 / 0) { r = 1; };").unwrap();
        assert!(matches!(global(&interp, "r"), Value::Int(0)));
        let interp = run("var r = 0; if (1 or 1 / 0) { r = 1; };").unwrap();
        assert!(matches!(global(&interp, "r"), Value::Int(1)));
    }

    #[test]
    fn test_len_of_strings_and_arrays() {
        let interp = run("var s = \"hello\"; var a = [1, 2, 3]; var n = len(s); var m = len(a);")
            .unwrap();
        assert!(matches!(global(&interp, "n"), Value::Int(5)));
        assert!(matches!(global(&interp, "m"), Value::Int(3)));
    }

    #[test]
    fn test_len_of_literals() {
        let interp = run("var n = len(\"abcd\"); var m = len([1, 2, 3, 4, 5]);").unwrap();
        assert!(matches!(global(&interp, "n"), Value::Int(4)));
        assert!(matches!(global(&interp, "m"), Value::Int(5)));
    }

    #[test]
    fn test_embedded_code_is_refused() {
        let err = run("var x = `os.getcwd()`;").unwrap_err();
        assert!(matches!(err, CoizError::EmbeddedCodeUnsupported));
    }

    #[test]
    fn test_assert_failure_does_not_stop_execution() {
        let interp = run("var r = 0; assert(1 == 2, print(\"nope\")); r = 1;").unwrap();
        assert!(matches!(global(&interp, "r"), Value::Int(1)));
    }

    #[test]
    fn test_return_at_top_level_is_an_error() {
        let err = run("return 1;").unwrap_err();
        assert!(matches!(err, CoizError::ReturnOutsideFunction));
    }

    #[test]
    fn test_unary_signs() {
        let interp = run("var a = -3; var b = +4; var c = --5;").unwrap();
        assert!(matches!(global(&interp, "a"), Value::Int(-3)));
        assert!(matches!(global(&interp, "b"), Value::Int(4)));
        assert!(matches!(global(&interp, "c"), Value::Int(5)));
    }

    #[test]
    fn test_format_printf_substitutions() {
        let line = format_printf(
            &Value::Str("%s=%d".to_string()),
            &[Value::Str("n".to_string()), Value::Int(42)],
        )
        .unwrap();
        assert_eq!(line, "n=42");
    }

    #[test]
    fn test_format_printf_escapes_percent() {
        let line = format_printf(&Value::Str("100%%".to_string()), &[]).unwrap();
        assert_eq!(line, "100%");
    }

    #[test]
    fn test_format_printf_rejects_bad_directives_and_arity() {
        assert!(matches!(
            format_printf(&Value::Str("%q".to_string()), &[Value::Int(1)]),
            Err(CoizError::Format(_))
        ));
        assert!(matches!(
            format_printf(&Value::Str("%d %d".to_string()), &[Value::Int(1)]),
            Err(CoizError::Format(_))
        ));
        assert!(matches!(
            format_printf(&Value::Str("%d".to_string()), &[Value::Int(1), Value::Int(2)]),
            Err(CoizError::Format(_))
        ));
    }

    #[test]
    fn test_d_directive_truncates_floats() {
        let line = format_printf(&Value::Str("%d".to_string()), &[Value::Float(3.9)]).unwrap();
        assert_eq!(line, "3");
    }
}
