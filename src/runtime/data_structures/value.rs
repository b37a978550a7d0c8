
use std::fmt::{ self,
                Display,
                Formatter };
use crate::{ lang::term::Quotation,
             runtime::{ data_structures::list::List,
                        error::{ self,
                                 script_error,
                                 ErrorKind } } };



/// A list of runtime values.  Strings are lists whose elements are all characters.
pub type ValueList = List<Value>;



/// Core value enumeration used by the bee interpreter.  This enumeration is used to represent all
/// data that bee programs can push, pop and manipulate.
#[derive(Clone, Debug)]
pub enum Value
{
    /// We have an integer value.  Represented as an i64.
    Int(i64),

    /// A floating-point value  Represented as a f64.
    Float(f64),

    /// A boolean value.
    Bool(bool),

    /// A single character.
    Char(char),

    /// A persistent list of values, also used for strings.
    List(ValueList),

    /// A deferred block of code.
    Quotation(Quotation)
}


/// Manage equality for the Value enumeration.  Integers and floats compare by numeric value, every
/// other combination of different variants is unequal.
impl PartialEq for Value
{
    fn eq(&self, other: &Value) -> bool
    {
        match ( self, other )
        {
            ( Value::Int(a),       Value::Int(b)       ) => a == b,
            ( Value::Float(a),     Value::Float(b)     ) => a == b,
            ( Value::Int(a),       Value::Float(b)     ) => (*a as f64) == *b,
            ( Value::Float(a),     Value::Int(b)       ) => *a == (*b as f64),
            ( Value::Bool(a),      Value::Bool(b)      ) => a == b,
            ( Value::Char(a),      Value::Char(b)      ) => a == b,
            ( Value::List(a),      Value::List(b)      ) => a == b,
            ( Value::Quotation(a), Value::Quotation(b) ) => a == b,

            _                                            => false
        }
    }
}


/// Pretty print the value the way the `print` word shows it.
impl Display for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::Int(value)       => write!(f, "{}", value),
            Value::Float(value)     => write!(f, "{}", float_text(*value)),
            Value::Bool(value)      => write!(f, "{}", value),
            Value::Char(value)      => write!(f, "'{}'", escape_char(*value)),
            Value::List(value)      => write_list(f, value),
            Value::Quotation(value) => write!(f, "{}", value)
        }
    }
}


/// Strings print double quoted, the empty list prints as `null` and any other list prints as a
/// parenthesised sequence of its elements.
fn write_list(f: &mut Formatter, list: &ValueList) -> fmt::Result
{
    if list.is_null()
    {
        return write!(f, "null");
    }

    if let Some(text) = Value::string_text(list)
    {
        return write!(f, "\"{}\"", escape_string(&text));
    }

    write!(f, "(")?;

    for ( index, item ) in list.iter().enumerate()
    {
        if index > 0
        {
            write!(f, " ")?;
        }

        write!(f, "{}", item)?;
    }

    write!(f, ")")
}


/// Floats always show a decimal point so that they read back as floats.
pub fn float_text(value: f64) -> String
{
    let mut text = value.to_string();

    if value.is_finite() && !text.contains('.')
    {
        text.push_str(".0");
    }

    text
}


/// The two character escape for the control characters the parser understands.
fn escape_char(character: char) -> String
{
    match character
    {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\\' => "\\\\".to_string(),
        _    => character.to_string()
    }
}


/// Convert new lines, carriage returns and tabs back into their escape sequences.
fn escape_string(text: &str) -> String
{
    let mut result = String::new();

    for character in text.chars()
    {
        match character
        {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _    => result.push(character)
        }
    }

    result
}


/// Define implementations for converting between Values and the raw data types they represent.
macro_rules! value_conversion
{
    ($data_type:ty , $variant:ident , $as_ident:ident, $description:literal) =>
    {
        impl Value
        {
            #[doc = concat!("Borrow the value as ", stringify!($data_type), ".")]
            pub fn $as_ident(&self) -> error::Result<&$data_type>
            {
                match self
                {
                    Value::$variant(value) => Ok(value),
                    _ => script_error(ErrorKind::TypeMismatch,
                                      format!("expected {}, found {}", $description, self))
                }
            }
        }


        #[doc = concat!("Support converting from a ", stringify!($data_type), " to a Value.")]
        impl From<$data_type> for Value
        {
            fn from(original: $data_type) -> Value
            {
                Value::$variant(original)
            }
        }
    };
}


// Implement the simple conversions for the value enumeration types.
value_conversion!(i64,       Int,       as_int,       "an integer");
value_conversion!(f64,       Float,     as_float,     "a float");
value_conversion!(bool,      Bool,      as_bool,      "a boolean");
value_conversion!(char,      Char,      as_char,      "a character");
value_conversion!(ValueList, List,      as_list,      "a list");
value_conversion!(Quotation, Quotation, as_quotation, "a quotation");


/// Strings become lists of characters.
impl From<&str> for Value
{
    fn from(text: &str) -> Value
    {
        Value::string(text)
    }
}


impl Value
{
    /// Build the character list that represents the text.
    pub fn string(text: &str) -> Value
    {
        Value::List(text.chars().map(Value::Char).collect())
    }

    /// The empty list.
    pub fn null() -> Value
    {
        Value::List(List::null())
    }

    /// If every element of the list is a character, the text those characters spell.  The empty
    /// list spells the empty string.
    pub fn string_text(list: &ValueList) -> Option<String>
    {
        list.iter()
            .map(|item|
                {
                    match item
                    {
                        Value::Char(character) => Some(*character),
                        _                      => None
                    }
                })
            .collect()
    }

    /// The only false value is `false` itself.
    pub fn is_truthy(&self) -> bool
    {
        !matches!(self, Value::Bool(false))
    }

    /// Is the value any kind of number?
    pub fn is_numeric(&self) -> bool
    {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// The plain text of the value, without the quoting used for display.  Characters stand for
    /// themselves and a list is the text of its elements run together.
    pub fn text(&self) -> String
    {
        match self
        {
            Value::Char(value) => value.to_string(),
            Value::List(value) =>
                {
                    let mut result = String::new();

                    for item in value.iter()
                    {
                        result.push_str(&item.text());
                    }

                    result
                },
            _                  => self.to_string()
        }
    }

    /// The source syntax that reads back as this value, if there is one.  The empty list is written
    /// as the empty string.
    pub fn source_text(&self) -> Option<String>
    {
        match self
        {
            Value::Char('\'')      => None,
            Value::Char(_)         => Some(self.to_string()),
            Value::List(value)     =>
                {
                    let text = Value::string_text(value)?;

                    if !text.contains('"')
                    {
                        Some(format!("\"{}\"", escape_string(&text)))
                    }
                    else if !text.contains('\'')
                    {
                        Some(format!("'{}'", escape_string(&text)))
                    }
                    else
                    {
                        None
                    }
                },
            Value::Float(value) if !value.is_finite() => None,
            Value::Quotation(_)    => None,
            _                      => Some(self.to_string())
        }
    }

    /// Borrow the value as a number, promoted to a float.
    pub fn as_number(&self) -> error::Result<f64>
    {
        match self
        {
            Value::Int(value)   => Ok(*value as f64),
            Value::Float(value) => Ok(*value),
            _                   => script_error(ErrorKind::TypeMismatch,
                                                format!("expected a number, found {}", self))
        }
    }
}
