// ABOUTME: Library surface: the front-end/execution pipeline and its modules

pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod highlighter;
pub mod parser;
pub mod scanner;
pub mod scope;
pub mod semantic;
pub mod token;
pub mod value;

use error::CoizError;
use eval::Interpreter;
use parser::Parser;
use scanner::Scanner;
use semantic::SemanticAnalyzer;

/// Run a source string through the whole pipeline: scan, parse, analyze,
/// execute. Returns the finished interpreter so callers (imports, tests) can
/// read its final global scope.
///
/// Lexical errors have already been printed by the scanner when this returns
/// [`CoizError::ScanFailed`]; every other error is returned for the caller
/// to report.
pub fn run(source: &str, filename: &str) -> Result<Interpreter, CoizError> {
    let mut scanner = Scanner::new(source, filename);
    let tokens = scanner.scan_tokens();
    if scanner.had_error() {
        return Err(CoizError::ScanFailed);
    }

    let tree = Parser::new(tokens, filename).parse()?;

    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&tree)?;

    let mut interpreter = Interpreter::new();
    // Imported modules ran to completion during analysis; their globals are
    // pulled in before any user code executes.
    for module in analyzer.into_imports() {
        interpreter.global_scope().absorb(&module.global_scope());
    }
    interpreter.execute(&tree)?;
    Ok(interpreter)
}
