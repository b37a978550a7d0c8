
use std::{ io::{ stdout, Write },
           path::Path };
use tracing::{ debug, error, trace, warn };
use crate::{ lang::{ parsing::{ parse_file, parse_source },
                     term::Term },
             runtime::{ built_ins::Word,
                        data_structures::{ dictionary::Dictionary,
                                           value::Value },
                        error,
                        interpreter::{ stack_underflow,
                                       trace::ExecutionTrace,
                                       ContinuationManagement,
                                       ContinuationQueue,
                                       Interpreter,
                                       InterpreterStack,
                                       Item,
                                       ValueStack,
                                       WordManagement } } };



/// The core interpreter implementation for the bee language.
///
/// There is no call stack.  Running a user word replaces its name at the front of the continuation
/// queue with the word's body, so deep and mutually recursive words never grow the host stack.
pub struct BeeInterpreter
{
    /// The data stack used by the interpreter.
    stack: ValueStack,

    /// Work still to be done, front first.
    queue: ContinuationQueue,

    /// Every word defined by the code run so far.
    dictionary: Dictionary,

    /// Where `print` and the debug trace go.
    output: Box<dyn Write>,

    /// Should the debug trace be coloured?
    colored: bool
}


impl Interpreter for BeeInterpreter
{
    fn output(&mut self) -> &mut dyn Write
    {
        self.output.as_mut()
    }
}


impl InterpreterStack for BeeInterpreter
{
    fn stack(&self) -> &ValueStack
    {
        &self.stack
    }

    fn push(&mut self, value: Value)
    {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<Value>
    {
        match self.stack.pop()
        {
            Some(value) => Ok(value),
            None        => stack_underflow()
        }
    }
}


impl ContinuationManagement for BeeInterpreter
{
    fn queue(&self) -> &ContinuationQueue
    {
        &self.queue
    }

    fn schedule_terms(&mut self, terms: &[Term])
    {
        for term in terms.iter().rev()
        {
            self.queue.push_front(Item::Eval(term.clone()));
        }
    }

    fn schedule_value(&mut self, value: Value)
    {
        self.queue.push_front(Item::Value(value));
    }

    fn halt(&mut self)
    {
        self.stack.clear();
        self.queue.clear();
    }
}


impl WordManagement for BeeInterpreter
{
    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn dictionary_mut(&mut self) -> &mut Dictionary
    {
        &mut self.dictionary
    }
}


impl BeeInterpreter
{
    /// Evaluate one item taken from the front of the queue.
    fn evaluate_item(&mut self, item: Item) -> error::Result<()>
    {
        match item
        {
            Item::Value(value)                 => self.push(value),
            Item::Eval(Term::Literal(value))   => self.push(value),
            Item::Eval(Term::Quotation(block)) => self.push(Value::Quotation(block)),
            Item::Eval(Term::Name(name))       =>
                {
                    match Word::resolve(&name)
                    {
                        Word::BuiltIn(built_in) => built_in.execute(self)?,
                        Word::User(name)        =>
                            {
                                let terms = self.dictionary.lookup(&name)?;

                                for term in terms.iter().rev()
                                {
                                    self.queue.push_front(Item::Eval(term.clone()));
                                }
                            }
                    }
                }
        }

        Ok(())
    }

    /// Keep evaluating until the queue runs dry or something fails.
    fn drain_queue(&mut self, execution_trace: &mut ExecutionTrace) -> error::Result<()>
    {
        while let Some(item) = self.queue.pop_front()
        {
            execution_trace.record(&self.stack, &item, &self.queue);
            trace!(item = %item, depth = self.stack.len(), pending = self.queue.len(), "evaluate");

            self.evaluate_item(item)?;
        }

        Ok(())
    }

    /// Import the words of the dictionary then evaluate the terms.  The stack is the result of the
    /// run and carries over to the next one, as do the words.
    ///
    /// With debug on, the trace of every step is written to the output once the run ends, whether
    /// it failed or not.
    pub fn run(&mut self,
               terms: &[Term],
               dictionary: &Dictionary,
               debug: bool) -> error::Result<&ValueStack>
    {
        if !dictionary.is_empty()
        {
            debug!(words = dictionary.len(), "importing definitions");
            self.dictionary.import(dictionary);
        }

        self.queue.extend(terms.iter().cloned().map(Item::Eval));

        let mut execution_trace = ExecutionTrace::new(debug);
        let result = self.drain_queue(&mut execution_trace);

        if execution_trace.is_enabled()
        {
            execution_trace.write_to(self.output.as_mut(), self.colored)?;
        }

        result?;

        debug!(depth = self.stack.len(), "run finished");
        Ok(&self.stack)
    }

    /// The recovery point for errors: on failure the error is logged, pending work is dropped and
    /// the error handed back.  Whatever the failed run did to the stack and dictionary up to that
    /// point stays.
    fn recover(&mut self, outcome: error::Result<()>) -> error::Result<&ValueStack>
    {
        if let Err(script_error) = outcome
        {
            error!("{}", script_error);
            self.queue.clear();

            return Err(script_error);
        }

        Ok(&self.stack)
    }

    /// Parse and run the source code.  The path only names the source in error messages.
    pub fn evaluate_source(&mut self,
                           path: &str,
                           source: &str,
                           debug: bool) -> error::Result<&ValueStack>
    {
        let outcome = parse_source(path, source)
            .and_then(|( terms, dictionary )| self.run(&terms, &dictionary, debug).map(|_| ()));

        self.recover(outcome)
    }

    /// Parse and run source code handed over directly.
    pub fn evaluate(&mut self, source: &str, debug: bool) -> error::Result<&ValueStack>
    {
        self.evaluate_source("<input>", source, debug)
    }

    /// Parse and run a script file.
    pub fn evaluate_file(&mut self, path: &str, debug: bool) -> error::Result<&ValueStack>
    {
        let outcome = parse_file(path)
            .and_then(|( terms, dictionary )| self.run(&terms, &dictionary, debug).map(|_| ()));

        self.recover(outcome)
    }

    /// Seed the dictionary from the standard word file.  A missing file only earns a warning and
    /// leaves the dictionary as it was.
    pub fn bootstrap(&mut self, path: &str) -> error::Result<()>
    {
        if !Path::new(path).is_file()
        {
            warn!("bootstrap file {} not found, starting with an empty dictionary", path);
            return Ok(());
        }

        self.evaluate_file(path, false)?;
        debug!(path, words = self.dictionary.len(), "bootstrapped");

        Ok(())
    }

    /// Empty the stack and the queue, the words stay defined.
    pub fn reset(&mut self)
    {
        self.halt();
    }

    /// Choose whether the debug trace uses colour.
    pub fn set_colored(&mut self, colored: bool)
    {
        self.colored = colored;
    }
}


impl BeeInterpreter
{
    /// An interpreter writing to standard output.
    pub fn new() -> BeeInterpreter
    {
        BeeInterpreter
            {
                stack: ValueStack::with_capacity(20),
                queue: ContinuationQueue::with_capacity(40),
                dictionary: Dictionary::new(),
                output: Box::new(stdout()),
                colored: true
            }
    }

    /// An interpreter writing to the given sink, for embedding and capturing output.  The debug
    /// trace is left uncoloured.
    pub fn with_output(output: Box<dyn Write>) -> BeeInterpreter
    {
        BeeInterpreter
            {
                stack: ValueStack::with_capacity(20),
                queue: ContinuationQueue::with_capacity(40),
                dictionary: Dictionary::new(),
                output,
                colored: false
            }
    }
}


impl Default for BeeInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
