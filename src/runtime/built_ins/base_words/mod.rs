/// Words that manipulate the data stack.
pub mod stack_words;

/// Words that build, combine and run quotations.
pub mod quotation_words;

/// Words that work with math, logic, bit manipulation and Value equality.
pub mod math_logic_and_bit_words;

/// Words that work with Value types.
pub mod value_type_words;

/// Words that build and take apart lists.
pub mod list_words;
