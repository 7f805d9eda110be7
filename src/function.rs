use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::rc::Rc;

use rand::Rng;

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::interpreter::{Interpreter, Unwind};
use crate::literal::Literal;
use crate::stmt::Stmt;
use crate::token::{Location, Token, Type};
use crate::value::Value;

/// Anything that can be invoked with `(...)`: user-declared functions and
/// the built-ins bound into the global environment.
pub trait Callable {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, Unwind>;
    fn arity(&self) -> usize;
}

#[derive(Debug)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
    /// The environment present at the point the function was declared. Captured
    /// by reference so that later assignments to enclosing variables are visible
    /// the next time the closure runs.
    pub closure: Rc<RefCell<Environment>>,
}

impl Function {
    pub fn new(
        name: Token,
        params: Vec<Token>,
        body: Vec<Stmt>,
        closure: Rc<RefCell<Environment>>,
    ) -> Self {
        Function { name, params, body, closure }
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, Unwind> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        self.params.iter().zip(arguments.into_iter()).for_each(|(param, arg)| {
            environment.define(&param.lexeme, arg);
        });

        match interpreter.execute_block(&self.body, Rc::new(RefCell::new(environment))) {
            Ok(()) => Ok(Value::from(Literal::Nil)),
            Err(Unwind::Return(value)) => Ok(value),
            Err(err @ Unwind::Error(_)) => Err(err),
        }
    }

    fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.name.lexeme)
    }
}

type NativeFn = fn(&mut Interpreter, Vec<Value>) -> Result<Value, RuntimeError>;

#[derive(Clone)]
pub struct NativeFunction {
    pub name: String,
    pub arity: usize,
    pub function: NativeFn,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, Unwind> {
        (self.function)(interpreter, arguments).map_err(Unwind::Error)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    /// The built-ins every fresh `Interpreter` binds into its global scope.
    /// `rand`, `time`, and `sqrt`.
    pub fn globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: "rand".to_owned(),
                arity: 1,
                function: |_, arguments| {
                    let token = Token::new(Type::Identifier, "rand".to_owned(), None, Location::new(0, 0));
                    let max = match &arguments[0] {
                        Value::Literal(Literal::Number(n)) => *n,
                        _ => {
                            return Err(RuntimeError {
                                token,
                                message: "rand() expects a number argument".to_owned(),
                            })
                        }
                    };

                    if max <= 0.0 {
                        return Err(RuntimeError {
                            token,
                            message: "rand() expects a positive argument".to_owned(),
                        });
                    }

                    let value = rand::thread_rng().gen_range(0..max as i64);
                    Ok(Value::from(value as f64))
                },
            },
            NativeFunction {
                name: "time".to_owned(),
                arity: 0,
                function: |_, _| {
                    let now = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .unwrap()
                        .as_secs_f64();
                    Ok(Value::from(now))
                },
            },
            NativeFunction {
                name: "sqrt".to_owned(),
                arity: 1,
                function: |_, arguments| {
                    let token = Token::new(Type::Identifier, "sqrt".to_owned(), None, Location::new(0, 0));
                    let value = match &arguments[0] {
                        Value::Literal(Literal::Number(n)) => *n,
                        _ => {
                            return Err(RuntimeError {
                                token,
                                message: "sqrt() expects a number argument".to_owned(),
                            })
                        }
                    };

                    if value < 0.0 {
                        return Err(RuntimeError {
                            token,
                            message: "sqrt() expects a non-negative argument".to_owned(),
                        });
                    }

                    Ok(Value::from(value.sqrt()))
                },
            },
        ]
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}
