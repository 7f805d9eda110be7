use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::ast::NodeId;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GroupingData, LogicalData, PostfixData,
    TernaryData, UnaryData, VariableData,
};
use crate::function::{Callable, Function, NativeFunction};
use crate::literal::Literal;
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::{Token, Type};
use crate::value::Value;

/// The two ways evaluating a statement can unwind the call stack instead of
/// running to completion: a `return` carrying its value, or a runtime error.
/// Both travel the same `Result` channel so a single `?`-propagating walk
/// implements control flow and error handling at once.
#[derive(Debug)]
pub enum Unwind {
    Return(Value),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

type EvalResult = Result<Value, Unwind>;
type ExecResult = Result<(), Unwind>;

pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
    writer: Box<dyn Write>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Builds an interpreter that writes `print` output to `writer` instead of
    /// stdout. Used by the test suite to capture output without touching the
    /// real standard streams.
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::globals() {
            let name = native.name.clone();
            globals.borrow_mut().define(&name, Value::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            writer,
        }
    }

    /// Records the lexical distance the resolver computed for an
    /// identifier-referencing expression, keyed by its `NodeId`.
    pub fn resolve(&mut self, id: NodeId, depth: usize) {
        self.locals.insert(id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if let Err(Unwind::Error(error)) = self.execute(statement) {
                use crate::error::Error;
                error.throw();
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Runs `statements` under `environment`, restoring the previous
    /// environment on every exit path (normal completion, return, or error).
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = Rc::clone(&self.environment);
        self.environment = environment;

        let mut result = Ok(());
        for statement in statements {
            result = self.execute(statement);
            if result.is_err() {
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn look_up_variable(&self, id: NodeId, name: &Token) -> Result<Value, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-memory `Write` sink shared by reference, so a test can keep reading
/// what was printed after handing the writing half to an `Interpreter`.
#[derive(Clone, Default)]
pub struct CaptureWriter(Rc<RefCell<Vec<u8>>>);

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("captured output to be valid UTF-8")
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ExprVisitor<EvalResult> for Interpreter {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(Value::from(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> EvalResult {
        self.evaluate(&data.expr)
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> EvalResult {
        let right = self.evaluate(&data.expr)?;

        match data.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| {
                Unwind::Error(RuntimeError {
                    token: data.operator.clone(),
                    message: "Operand must be a number".to_string(),
                })
            }),
            Type::Bang => Ok(!right),
            _ => unreachable!("parser only produces ! and - as unary operators"),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> EvalResult {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let operator = &data.operator;

        let type_error = || {
            Unwind::Error(RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers".to_string(),
            })
        };

        match operator.r#type {
            Type::Plus => (left + right).ok_or_else(|| {
                Unwind::Error(RuntimeError {
                    token: operator.clone(),
                    message: "Operands of + must be either numbers or strings".to_string(),
                })
            }),
            Type::Minus => (left - right).ok_or_else(type_error),
            Type::Star => (left * right).ok_or_else(type_error),
            Type::Slash => {
                if matches!(&right, Value::Literal(Literal::Number(n)) if *n == 0.0) {
                    return Err(Unwind::Error(RuntimeError {
                        token: operator.clone(),
                        message: "Division by 0".to_string(),
                    }));
                }
                (left / right).ok_or_else(type_error)
            }
            Type::Percent => {
                if matches!(&right, Value::Literal(Literal::Number(n)) if *n == 0.0) {
                    return Err(Unwind::Error(RuntimeError {
                        token: operator.clone(),
                        message: "Modulo by 0".to_string(),
                    }));
                }
                (left % right).ok_or_else(type_error)
            }
            Type::Star2 => match (left, right) {
                (Value::Literal(Literal::Number(l)), Value::Literal(Literal::Number(r))) => {
                    Ok(Value::from(l.powf(r)))
                }
                _ => Err(type_error()),
            },
            Type::Greater => left.partial_cmp(&right).map(|o| Value::from(o.is_gt())).ok_or_else(type_error),
            Type::GreaterEqual => left.partial_cmp(&right).map(|o| Value::from(o.is_ge())).ok_or_else(type_error),
            Type::Less => left.partial_cmp(&right).map(|o| Value::from(o.is_lt())).ok_or_else(type_error),
            Type::LessEqual => left.partial_cmp(&right).map(|o| Value::from(o.is_le())).ok_or_else(type_error),
            Type::EqualEqual => Ok(Value::from(left == right)),
            Type::BangEqual => Ok(Value::from(left != right)),
            _ => unreachable!("parser only produces binary operators handled above"),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> EvalResult {
        let left = self.evaluate(&data.left)?;

        if data.operator.r#type == Type::Or {
            if left.is_truthy() {
                return Ok(left);
            }
        } else if !left.is_truthy() {
            return Ok(left);
        }

        self.evaluate(&data.right)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> EvalResult {
        self.look_up_variable(data.id, &data.name).map_err(Unwind::Error)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> EvalResult {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(&distance) => self.environment.borrow_mut().assign_at(distance, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone()),
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> EvalResult {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let arity = match &callee {
            Value::Function(function) => function.arity(),
            Value::Native(native) => native.arity(),
            _ => {
                return Err(Unwind::Error(RuntimeError {
                    token: data.paren.clone(),
                    message: "Can only call functions".to_string(),
                }))
            }
        };

        if arguments.len() != arity {
            return Err(Unwind::Error(RuntimeError {
                token: data.paren.clone(),
                message: format!("Expected {arity} arguments but got {}", arguments.len()),
            }));
        }

        match &callee {
            Value::Function(function) => function.call(self, arguments),
            Value::Native(native) => native.call(self, arguments),
            _ => unreachable!(),
        }
    }

    fn visit_postfix_expr(&mut self, data: &PostfixData) -> EvalResult {
        let current = self.look_up_variable(data.id, &data.name).map_err(Unwind::Error)?;

        let number = match &current {
            Value::Literal(Literal::Number(n)) => *n,
            _ => {
                return Err(Unwind::Error(RuntimeError {
                    token: data.name.clone(),
                    message: "Operand of '++' must be a number".to_string(),
                }))
            }
        };

        let incremented = Value::from(number + 1.0);
        match self.locals.get(&data.id) {
            Some(&distance) => self.environment.borrow_mut().assign_at(distance, &data.name, incremented),
            None => self.globals.borrow_mut().assign(&data.name, incremented),
        }

        Ok(current)
    }

    fn visit_ternary_expr(&mut self, data: &TernaryData) -> EvalResult {
        let condition = self.evaluate(&data.condition)?;

        if condition.is_truthy() {
            self.evaluate(&data.then_branch)
        } else {
            self.evaluate(&data.else_branch)
        }
    }
}

impl StmtVisitor<ExecResult> for Interpreter {
    fn visit_expression_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Print(data) = stmt else { unreachable!() };
        let value = self.evaluate(&data.expr)?;
        writeln!(self.writer, "{value}").ok();
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Var(data) = stmt else { unreachable!() };

        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Value::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Function(data) = stmt else { unreachable!() };

        let function = Function::new(
            data.name.clone(),
            data.params.clone(),
            data.body.clone(),
            Rc::clone(&self.environment),
        );

        self.environment.borrow_mut().define(&data.name.lexeme, Value::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Return(data) = stmt else { unreachable!() };

        let value = match &data.value {
            Some(value) => self.evaluate(value)?,
            None => Value::from(Literal::Nil),
        };

        Err(Unwind::Return(value))
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::If(data) = stmt else { unreachable!() };

        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::While(data) = stmt else { unreachable!() };

        while self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.body)?;
        }

        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Block(data) = stmt else { unreachable!() };

        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
        self.execute_block(&data.statements, environment)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::Parser;
    use crate::resolver::Resolver;
    use crate::scanner::Scanner;

    fn run(source: &str) -> String {
        let tokens = Scanner::new(source).scan_tokens();
        let statements = Parser::new(tokens).parse();

        let output = CaptureWriter::new();
        let mut interpreter = Interpreter::with_writer(Box::new(output.clone()));
        Resolver::new(&mut interpreter).resolve(&statements);
        interpreter.interpret(&statements);

        output.contents()
    }

    #[test]
    fn arithmetic_and_precedence() {
        assert_eq!(run("print 1 + 2 * 3;"), "7\n");
        assert_eq!(run("print (1 + 2) * 3;"), "9\n");
        assert_eq!(run("print 2 ** 3 ** 2;"), "512\n");
    }

    #[test]
    fn ternary_short_circuits() {
        assert_eq!(run("print true ? 1 : 2;"), "1\n");
        assert_eq!(run("print false ? 1 : 2;"), "2\n");
    }

    #[test]
    fn postfix_increment_returns_old_value() {
        assert_eq!(run("var x = 1; print x++; print x;"), "1\n2\n");
    }

    #[test]
    fn closures_capture_declaration_environment() {
        let source = r#"
            fun make() {
                var count = 0;
                fun inc() {
                    count = count + 1;
                    return count;
                }
                return inc;
            }
            var counter = make();
            print counter();
            print counter();
        "#;
        assert_eq!(run(source), "1\n2\n");
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        crate::error::reset_error();
        assert_eq!(run("print 1 / 0;"), "");
        assert!(crate::error::did_runtime_error());
        crate::error::reset_error();
    }
}
