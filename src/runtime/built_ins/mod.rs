use crate::runtime::{
    built_ins::base_words::{
        list_words, math_logic_and_bit_words, quotation_words, stack_words, value_type_words,
    },
    error,
    interpreter::Interpreter,
};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// The core words of the language.
pub mod base_words;

/// Words that perform I/O operations.
pub mod io_words;

/// The operations built into the interpreter.  Every one of them is reserved, a user definition of
/// the same name is never reached.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BuiltIn {
    Id,
    Halt,
    Print,
    Apply,
    Quote,
    Compose,
    Pop,
    Swap,
    Dup,
    Dig,
    Dip,
    If,
    Equal,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Less,
    LessEqual,
    GreaterEqual,
    Greater,
    ShiftRight,
    ShiftLeft,
    BitAnd,
    BitOr,
    BitXor,
    DivMod,
    ModDiv,
    ToS,
    ToI,
    ToF,
    And,
    Or,
    Xor,
    Not,
    Null,
    Cons,
    Unlist,
    DumpDefs,
    LoadDefs,
    ExpandDef,
}

/// The reserved names.  Some operations go by more than one.
const BUILT_IN_NAMES: &[(&str, BuiltIn)] = &[
    ("id", BuiltIn::Id),
    ("nop", BuiltIn::Id),
    ("halt", BuiltIn::Halt),
    ("print", BuiltIn::Print),
    ("apply", BuiltIn::Apply),
    ("quote", BuiltIn::Quote),
    ("compose", BuiltIn::Compose),
    ("pop", BuiltIn::Pop),
    ("swap", BuiltIn::Swap),
    ("dup", BuiltIn::Dup),
    ("dig", BuiltIn::Dig),
    ("dip", BuiltIn::Dip),
    ("if", BuiltIn::If),
    ("=", BuiltIn::Equal),
    ("==", BuiltIn::Equal),
    ("+", BuiltIn::Add),
    ("-", BuiltIn::Subtract),
    ("*", BuiltIn::Multiply),
    ("/", BuiltIn::Divide),
    ("%", BuiltIn::Modulo),
    ("**", BuiltIn::Power),
    ("<", BuiltIn::Less),
    ("<=", BuiltIn::LessEqual),
    (">=", BuiltIn::GreaterEqual),
    (">", BuiltIn::Greater),
    (">>", BuiltIn::ShiftRight),
    ("<<", BuiltIn::ShiftLeft),
    ("&", BuiltIn::BitAnd),
    ("|", BuiltIn::BitOr),
    ("^", BuiltIn::BitXor),
    ("/%", BuiltIn::DivMod),
    ("%/", BuiltIn::ModDiv),
    ("to_s", BuiltIn::ToS),
    ("to_i", BuiltIn::ToI),
    ("to_f", BuiltIn::ToF),
    ("and", BuiltIn::And),
    ("or", BuiltIn::Or),
    ("xor", BuiltIn::Xor),
    ("not", BuiltIn::Not),
    ("null", BuiltIn::Null),
    ("cons", BuiltIn::Cons),
    ("unlist", BuiltIn::Unlist),
    ("dump-defs", BuiltIn::DumpDefs),
    ("load-defs", BuiltIn::LoadDefs),
    ("expand-def", BuiltIn::ExpandDef),
];

lazy_static! {
    static ref BUILT_INS: HashMap<&'static str, BuiltIn> =
        BUILT_IN_NAMES.iter().copied().collect();
}

impl BuiltIn {
    /// Find the built-in operation reserved under the name.
    pub fn find(name: &str) -> Option<BuiltIn> {
        BUILT_INS.get(name).copied()
    }

    /// Every reserved name.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILT_IN_NAMES.iter().map(|(name, _)| *name)
    }

    /// Run the operation against the interpreter.
    pub fn execute(self, interpreter: &mut dyn Interpreter) -> error::Result<()> {
        match self {
            BuiltIn::Id => Ok(()),
            BuiltIn::Halt => {
                interpreter.halt();
                Ok(())
            }
            BuiltIn::Print => io_words::word_print(interpreter),
            BuiltIn::Apply => quotation_words::word_apply(interpreter),
            BuiltIn::Quote => quotation_words::word_quote(interpreter),
            BuiltIn::Compose => quotation_words::word_compose(interpreter),
            BuiltIn::Pop => stack_words::word_pop(interpreter),
            BuiltIn::Swap => stack_words::word_swap(interpreter),
            BuiltIn::Dup => stack_words::word_dup(interpreter),
            BuiltIn::Dig => stack_words::word_dig(interpreter),
            BuiltIn::Dip => quotation_words::word_dip(interpreter),
            BuiltIn::If => quotation_words::word_if(interpreter),
            BuiltIn::Equal => math_logic_and_bit_words::word_equal(interpreter),
            BuiltIn::Add => math_logic_and_bit_words::word_add(interpreter),
            BuiltIn::Subtract => math_logic_and_bit_words::word_subtract(interpreter),
            BuiltIn::Multiply => math_logic_and_bit_words::word_multiply(interpreter),
            BuiltIn::Divide => math_logic_and_bit_words::word_divide(interpreter),
            BuiltIn::Modulo => math_logic_and_bit_words::word_mod(interpreter),
            BuiltIn::Power => math_logic_and_bit_words::word_power(interpreter),
            BuiltIn::Less => math_logic_and_bit_words::word_less(interpreter),
            BuiltIn::LessEqual => math_logic_and_bit_words::word_less_equal(interpreter),
            BuiltIn::GreaterEqual => math_logic_and_bit_words::word_greater_equal(interpreter),
            BuiltIn::Greater => math_logic_and_bit_words::word_greater(interpreter),
            BuiltIn::ShiftRight => math_logic_and_bit_words::word_shift_right(interpreter),
            BuiltIn::ShiftLeft => math_logic_and_bit_words::word_shift_left(interpreter),
            BuiltIn::BitAnd => math_logic_and_bit_words::word_bit_and(interpreter),
            BuiltIn::BitOr => math_logic_and_bit_words::word_bit_or(interpreter),
            BuiltIn::BitXor => math_logic_and_bit_words::word_bit_xor(interpreter),
            BuiltIn::DivMod => math_logic_and_bit_words::word_div_mod(interpreter),
            BuiltIn::ModDiv => math_logic_and_bit_words::word_mod_div(interpreter),
            BuiltIn::ToS => value_type_words::word_to_s(interpreter),
            BuiltIn::ToI => value_type_words::word_to_i(interpreter),
            BuiltIn::ToF => value_type_words::word_to_f(interpreter),
            BuiltIn::And => math_logic_and_bit_words::word_logic_and(interpreter),
            BuiltIn::Or => math_logic_and_bit_words::word_logic_or(interpreter),
            BuiltIn::Xor => math_logic_and_bit_words::word_logic_xor(interpreter),
            BuiltIn::Not => math_logic_and_bit_words::word_logic_not(interpreter),
            BuiltIn::Null => list_words::word_null(interpreter),
            BuiltIn::Cons => list_words::word_cons(interpreter),
            BuiltIn::Unlist => list_words::word_unlist(interpreter),
            BuiltIn::DumpDefs => io_words::word_dump_defs(interpreter),
            BuiltIn::LoadDefs => io_words::word_load_defs(interpreter),
            BuiltIn::ExpandDef => quotation_words::word_expand_def(interpreter),
        }
    }
}

/// What a name refers to when it is evaluated.  Reserved names come first, anything else is looked
/// up in the dictionary at the moment it runs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Word {
    BuiltIn(BuiltIn),
    User(String),
}

impl Word {
    pub fn resolve(name: &str) -> Word {
        match BuiltIn::find(name) {
            Some(built_in) => Word::BuiltIn(built_in),
            None => Word::User(name.to_string()),
        }
    }
}
